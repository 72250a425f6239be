use crate::math::{series, ConstEval};
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// ── Vector metrics ──────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared length (dot product with self). No sqrt, works with integers.
    pub fn square_length(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// Euclidean length.
    pub fn length(&self) -> T {
        self.square_length().sqrt()
    }

    /// Return a unit vector in the same direction.
    ///
    /// A zero vector yields NaN components.
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    /// Euclidean distance between two points.
    pub fn distance(&self, other: &Self) -> T {
        (*other - *self).length()
    }

    /// Unsigned angle between two vectors, in radians: `acos(a·b / (|a||b|))`.
    ///
    /// ```
    /// use vlk_common::Vector2;
    /// let a = Vector2::from_array([1.0_f64, 0.0]);
    /// let b = Vector2::from_array([0.0, 3.0]);
    /// assert!((a.angle_between(&b) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle_between(&self, other: &Self) -> T {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Linear interpolation `a + t·(b − a)`. `t` is not clamped.
    pub fn lerp(&self, other: &Self, t: T) -> Self {
        *self + (*other - *self) * t
    }
}

// ── Compile-time forms ──────────────────────────────────────────────

macro_rules! impl_const_metrics {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl<const N: usize> ConstEval<Vector<$t, N>> {
                pub const fn dot(self, rhs: Self) -> $t {
                    let mut sum = 0.0;
                    let mut i = 0;
                    while i < N {
                        sum = sum + self.0.data[i][0] * rhs.0.data[i][0];
                        i += 1;
                    }
                    sum
                }

                pub const fn square_length(self) -> $t {
                    self.dot(self)
                }

                pub const fn length(self) -> $t {
                    series::sqrt(self.square_length() as f64) as $t
                }

                pub const fn normalized(self) -> Self {
                    self.div_scalar(self.length())
                }

                pub const fn distance(self, other: Self) -> $t {
                    other.sub(self).length()
                }

                pub const fn angle_between(self, other: Self) -> $t {
                    let cos = self.dot(other) / (self.length() * other.length());
                    series::acos(cos as f64) as $t
                }

                pub const fn lerp(self, other: Self, t: $t) -> Self {
                    self.add(other.sub(self).mul_scalar(t))
                }
            }
        )*
    };
}

impl_const_metrics!(f32, f64);

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Largest absolute elementwise difference, for approximate comparisons.
    ///
    /// ```
    /// use vlk_common::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[1.0, 2.5], [2.0, 4.0]]);
    /// assert_eq!(a.max_abs_diff(&b), 1.0);
    /// ```
    pub fn max_abs_diff(&self, other: &Self) -> T {
        let mut max = T::zero();
        for i in 0..M {
            for j in 0..N {
                let d = (self[(i, j)] - other[(i, j)]).abs();
                if d > max {
                    max = d;
                }
            }
        }
        max
    }
}
