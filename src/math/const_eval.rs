use super::series;

/// Tags a value for compile-time evaluation.
///
/// Methods on `ConstEval<T>` are `const fn` and use the series
/// implementations in place of the platform math routines, so a whole
/// expression built from them can initialize a `const` item. The plain
/// functions in [`math`](crate::math) and the inherent methods on the
/// geometric types are the runtime path; both paths agree to within the
/// precision limits documented on each function.
///
/// The wrapper is available for `f32` and `f64` and for vectors, matrices,
/// quaternions and transforms over those element types. `f32` values are
/// widened to `f64` for the series and narrowed back.
///
/// ```
/// use vlk_common::math::ConstEval;
///
/// const HALF: f64 = ConstEval(core::f64::consts::FRAC_PI_6).sin().get();
/// assert!((HALF - 0.5).abs() < 1e-12);
/// ```
///
/// Runtime use is legal but slow; prefer the runtime path outside `const`
/// contexts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(transparent)]
pub struct ConstEval<T>(pub T);

impl<T: Copy> ConstEval<T> {
    /// Wrap a value.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Unwrap the value.
    #[inline]
    pub const fn get(self) -> T {
        self.0
    }
}

impl<T> From<T> for ConstEval<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

macro_rules! impl_const_scalar {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl ConstEval<$t> {
                pub const fn sin(self) -> Self { Self(series::sin(self.0 as f64) as $t) }
                pub const fn cos(self) -> Self { Self(series::cos(self.0 as f64) as $t) }
                /// Inaccurate near odd multiples of π/2.
                pub const fn tan(self) -> Self { Self(series::tan(self.0 as f64) as $t) }
                pub const fn asin(self) -> Self { Self(series::asin(self.0 as f64) as $t) }
                pub const fn acos(self) -> Self { Self(series::acos(self.0 as f64) as $t) }
                pub const fn atan(self) -> Self { Self(series::atan(self.0 as f64) as $t) }

                /// Four-quadrant arctangent of `self / x`.
                pub const fn atan2(self, x: Self) -> Self {
                    Self(series::atan2(self.0 as f64, x.0 as f64) as $t)
                }

                pub const fn sqrt(self) -> Self { Self(series::sqrt(self.0 as f64) as $t) }

                /// NaN for negative bases; negative exponents are not guaranteed.
                pub const fn pow(self, exponent: Self) -> Self {
                    Self(series::pow(self.0 as f64, exponent.0 as f64) as $t)
                }

                /// Loses accuracy as `divisor` approaches zero.
                pub const fn fmod(self, divisor: Self) -> Self {
                    Self(series::fmod(self.0 as f64, divisor.0 as f64) as $t)
                }

                pub const fn ceil(self) -> Self { Self(series::ceil(self.0 as f64) as $t) }
                pub const fn floor(self) -> Self { Self(series::floor(self.0 as f64) as $t) }
                pub const fn trunc(self) -> Self { Self(series::trunc(self.0 as f64) as $t) }
                pub const fn round(self) -> Self { Self(series::round(self.0 as f64) as $t) }
                pub const fn abs(self) -> Self { Self(series::abs(self.0 as f64) as $t) }

                /// `-1`, `0` or `1`; `0` for NaN.
                pub const fn sign(self) -> Self { Self(series::sign(self.0 as f64) as $t) }
            }
        )*
    };
}

impl_const_scalar!(f32, f64);
