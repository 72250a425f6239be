//! Scalar math with a runtime path and a compile-time path.
//!
//! Every function below has two forms:
//!
//! - the **runtime** form, a generic function over [`FloatScalar`] that
//!   forwards to the platform routine (`std` or `libm` via `num-traits`)
//!   with no extra work;
//! - the **constant-evaluable** form, a method on [`ConstEval<f32>`] /
//!   [`ConstEval<f64>`] implemented as a series or by rounding arithmetic,
//!   usable in `const` items.
//!
//! # Functions
//!
//! | Runtime | Const | Notes |
//! |---------|-------|-------|
//! | [`sin`], [`cos`] | `ConstEval::sin`, `ConstEval::cos` | |
//! | [`tan`] | `ConstEval::tan` | const form degrades near asymptotes |
//! | [`asin`], [`acos`], [`atan`] | `ConstEval::asin`, … | NaN outside `[-1, 1]` for asin/acos |
//! | [`atan2`] | `ConstEval::atan2` | four-quadrant |
//! | [`sqrt`] | `ConstEval::sqrt` | |
//! | [`pow`] | `ConstEval::pow` | const form: NaN for negative bases |
//! | [`fmod`] | `ConstEval::fmod` | const form loses accuracy as the divisor → 0 |
//! | [`ceil`], [`floor`], [`trunc`], [`round`] | `ConstEval::ceil`, … | round: half away from zero |
//! | [`abs`] | `ConstEval::abs` | |
//! | [`sign`] | `ConstEval::sign` | `-1`, `0` or `1`; `0` for NaN |
//!
//! # Example
//!
//! ```
//! use vlk_common::math::{self, ConstEval};
//!
//! const QUARTER_TURN: f64 = ConstEval(math::HALF_PI).sin().get();
//! assert!((QUARTER_TURN - math::sin(math::HALF_PI)).abs() < 1e-12);
//!
//! assert_eq!(math::sign(-3.0_f64), -1.0);
//! assert_eq!(math::sign(f64::NAN), 0.0);
//! ```

mod const_eval;
pub(crate) mod series;

#[cfg(test)]
mod tests;

pub use const_eval::ConstEval;

use crate::traits::{FloatScalar, Scalar};

/// π
pub const PI: f64 = core::f64::consts::PI;
/// 2π
pub const TWO_PI: f64 = core::f64::consts::TAU;
/// π/2
pub const HALF_PI: f64 = core::f64::consts::FRAC_PI_2;

/// π in `T`.
#[inline]
pub fn pi<T: FloatScalar>() -> T {
    T::PI()
}

/// 2π in `T`.
#[inline]
pub fn two_pi<T: FloatScalar>() -> T {
    T::PI() + T::PI()
}

/// π/2 in `T`.
#[inline]
pub fn half_pi<T: FloatScalar>() -> T {
    T::FRAC_PI_2()
}

// ── Trigonometry ────────────────────────────────────────────────────

#[inline]
pub fn sin<T: FloatScalar>(x: T) -> T {
    x.sin()
}

#[inline]
pub fn cos<T: FloatScalar>(x: T) -> T {
    x.cos()
}

#[inline]
pub fn tan<T: FloatScalar>(x: T) -> T {
    x.tan()
}

#[inline]
pub fn asin<T: FloatScalar>(x: T) -> T {
    x.asin()
}

#[inline]
pub fn acos<T: FloatScalar>(x: T) -> T {
    x.acos()
}

#[inline]
pub fn atan<T: FloatScalar>(x: T) -> T {
    x.atan()
}

/// Four-quadrant arctangent of `y / x`.
#[inline]
pub fn atan2<T: FloatScalar>(y: T, x: T) -> T {
    y.atan2(x)
}

// ── Powers ──────────────────────────────────────────────────────────

#[inline]
pub fn sqrt<T: FloatScalar>(x: T) -> T {
    x.sqrt()
}

#[inline]
pub fn pow<T: FloatScalar>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

/// Remainder of `a / b` with the sign of `a`.
#[inline]
pub fn fmod<T: FloatScalar>(a: T, b: T) -> T {
    a % b
}

// ── Rounding ────────────────────────────────────────────────────────

#[inline]
pub fn ceil<T: FloatScalar>(x: T) -> T {
    x.ceil()
}

#[inline]
pub fn floor<T: FloatScalar>(x: T) -> T {
    x.floor()
}

#[inline]
pub fn trunc<T: FloatScalar>(x: T) -> T {
    x.trunc()
}

/// Rounds half-way cases away from zero.
#[inline]
pub fn round<T: FloatScalar>(x: T) -> T {
    x.round()
}

#[inline]
pub fn abs<T: FloatScalar>(x: T) -> T {
    x.abs()
}

/// `(0 < t) − (t < 0)`: exactly `-1`, `0` or `1`.
///
/// Both comparisons are false for NaN, so NaN maps to `0`. Works for
/// integers as well as floats.
#[inline]
pub fn sign<T: Scalar + PartialOrd>(t: T) -> T {
    let zero = T::zero();
    if zero < t {
        T::one()
    } else if t < zero {
        zero - T::one()
    } else {
        zero
    }
}
