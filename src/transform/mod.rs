//! Translate·rotate·scale transforms and parent hierarchies.
//!
//! [`Transform2D`] and [`Transform3D`] are plain values: each collapses to
//! one homogeneous matrix, `translation × rotation × scale`, so scale is
//! applied first and translation last.
//!
//! Parenting lives in a [`TransformTree`] (requires `alloc`), an arena that
//! owns the transforms and links them by [`TransformId`] handles. World
//! matrices compose root-first: `world(child) = world(parent) × local(child)`.
//!
//! ```
//! use vlk_common::{Transform2D, TransformTree, Vector2};
//! use core::f64::consts::FRAC_PI_2;
//!
//! let mut tree = TransformTree::new();
//! let body = tree.insert(Transform2D::new(Vector2::from_array([2.0, 2.0]), FRAC_PI_2, Vector2::from_array([2.0, 3.0])));
//! let arm = tree.insert(Transform2D::new(Vector2::from_array([-1.0, 4.0]), -core::f64::consts::PI, Vector2::from_array([0.5, 0.5])));
//! tree.set_parent(arm, Some(body)).unwrap();
//!
//! let p = tree.world_translation(arm).unwrap();
//! assert!((p.x() + 10.0).abs() < 1e-9 && p.y().abs() < 1e-9);
//!
//! // A transform cannot become its own ancestor.
//! assert!(tree.set_parent(body, Some(arm)).is_err());
//! ```

use core::ops::Mul;

mod transform2d;
mod transform3d;
#[cfg(feature = "alloc")]
mod tree;

pub use transform2d::Transform2D;
pub use transform3d::Transform3D;
#[cfg(feature = "alloc")]
pub use tree::{Ancestors, TransformId, TransformTree};

/// A local transform that collapses to a single homogeneous matrix.
pub trait Transform {
    /// `Matrix3` for 2D, `Matrix4` for 3D.
    type Matrix: Copy + Mul<Output = Self::Matrix>;

    /// Local matrix: `translation × rotation × scale`.
    fn matrix(&self) -> Self::Matrix;

    /// This transform expressed in the space that `parent_world` maps to.
    fn world_matrix(&self, parent_world: &Self::Matrix) -> Self::Matrix {
        *parent_world * self.matrix()
    }
}

/// Errors from [`TransformTree`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// The requested parent link would make a transform its own ancestor.
    CircularHierarchy,
    /// The handle was not issued by this tree.
    InvalidHandle,
}

impl core::fmt::Display for TransformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransformError::CircularHierarchy => {
                write!(f, "circular transform hierarchy: a transform cannot be its own ancestor")
            }
            TransformError::InvalidHandle => write!(f, "transform handle does not belong to this tree"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransformError {}
