use core::fmt::Debug;
use num_traits::{Float, FloatConst, Num, One, Zero};

/// Trait for types that can be used as vector and matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `sin`, `atan2`, π, etc.
/// (lengths, rotations, inverses, transforms). The routines come from
/// [`num_traits::Float`], backed by the system libm under `std` and by the
/// pure-Rust `libm` crate otherwise.
pub trait FloatScalar: Scalar + Float + FloatConst {}

impl<T: Scalar + Float + FloatConst> FloatScalar for T {}
