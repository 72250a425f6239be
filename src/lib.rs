//! # vlk-common
//!
//! Geometry primitives for a game engine, no-std compatible: vectors,
//! matrices, quaternions and transforms whose math can run either at
//! runtime or inside `const` items, plus an alias-keyed content cache.
//!
//! ## Quick start
//!
//! ```
//! use vlk_common::{ConstEval, Matrix3, Matrix4, Vector2};
//!
//! // Runtime: rotate a point a quarter turn about the origin.
//! let r = Matrix3::rotation(core::f64::consts::FRAC_PI_2);
//! let p = r.transform_point(&Vector2::from_array([1.0, 1.0]));
//! assert!((p.x() + 1.0).abs() < 1e-12 && (p.y() - 1.0).abs() < 1e-12);
//!
//! // Compile time: the same factories through `ConstEval`.
//! const VIEW: Matrix4<f64> = ConstEval::<Matrix4<f64>>::rotation_y(0.5).get();
//! const DET: f64 = ConstEval(VIEW).determinant().get();
//! assert!((DET - 1.0).abs() < 1e-12);
//!
//! // Cofactor inverse for any square size.
//! let m = Matrix4::<f64>::new([
//!     [0.0, 1.0, 2.0, -2.0],
//!     [9.0, 8.0, 7.0, 0.0],
//!     [3.0, 4.0, 5.0, 4.0],
//!     [2.0, 6.0, 1.0, -7.0],
//! ]);
//! assert!((m.determinant() + 540.0).abs() < 1e-9);
//! assert!((m * m.inverse()).max_abs_diff(&Matrix4::identity()) < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`math`]: scalar functions (`sin`, `atan2`, `sqrt`, `pow`, rounding,
//!   `sign`, …) in two forms: generic runtime functions over
//!   [`FloatScalar`], and constant-evaluable methods on [`ConstEval`].
//!
//! - [`matrix`]: fixed-size `Matrix<T, M, N>` with const-generic
//!   dimensions and column-major storage. [`Vector<T, N>`] is a 1-row
//!   matrix. Arithmetic, products, transposition, cofactor determinant,
//!   minors, adjugate and inverse for any square size, and the homogeneous
//!   factories on [`Matrix3`] (2D) and [`Matrix4`] (3D). Every operation
//!   that does transcendental math or is used by one also has a `const` form
//!   on `ConstEval<Matrix<…>>`.
//!
//! - [`quaternion`]: `(x, y, z, w)` rotation quaternion with Hamilton
//!   product, axis-angle and per-axis factories, and conversion to and from
//!   rotation matrices.
//!
//! - [`types`]: integer [`Point`]s and [`Area`]s, RGBA [`Color`]s.
//!
//! - [`transform`]: [`Transform2D`] / [`Transform3D`] values and the
//!   [`TransformTree`] arena that links them into parent hierarchies and
//!   rejects cycles (requires `alloc`).
//!
//! - [`content`]: [`Content<T>`](content::Content), a thread-safe cache of
//!   loaded resources keyed by alias, with `.meta` sidecar metadata and
//!   load/unload listeners (requires `content`).
//!
//! - [`traits`]: element traits. [`Scalar`] covers every matrix element,
//!   integers included; [`FloatScalar`] adds the float routines.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `TransformTree` (heap-backed arena) |
//! | `content` | yes      | `Content<T>` cache; pulls in `parking_lot` and `log` |
//! | `libm`    | baseline | Pure-Rust software float fallback, always on |
//! | `all`     | no       | All features |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "content")]
pub mod content;
pub mod math;
pub mod matrix;
pub mod quaternion;
pub mod traits;
pub mod transform;
pub mod types;

pub use math::ConstEval;
pub use matrix::aliases::{
    Matrix1, Matrix2, Matrix2x3, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x3,
};
pub use matrix::vector::{
    ColumnVector, ColumnVector3, ColumnVector4, Vector, Vector2, Vector3, Vector4,
};
pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use traits::{FloatScalar, Scalar};
pub use transform::{Transform, Transform2D, Transform3D, TransformError};
#[cfg(feature = "alloc")]
pub use transform::{TransformId, TransformTree};
pub use types::{Area, Color, Point};

#[cfg(feature = "content")]
pub use content::Content;
