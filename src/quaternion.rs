use core::ops::{Mul, Neg};

use crate::math::{series, ConstEval};
use crate::matrix::aliases::{Matrix3, Matrix4};
use crate::matrix::vector::Vector3;
use crate::traits::{FloatScalar, Scalar};

/// Rotation quaternion, vector part first: `(x, y, z, w)`.
///
/// Unit length is not enforced. The axis-angle and per-axis factories
/// produce unit values, and products of unit values stay unit up to
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: Copy> Quaternion<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Vector part `v` and scalar part `w`.
    #[inline]
    pub const fn from_parts(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x(), v.y(), v.z(), w)
    }

    /// The vector part `(x, y, z)`.
    #[inline]
    pub const fn vector(&self) -> Vector3<T> {
        Vector3::from_array([self.x, self.y, self.z])
    }
}

impl<T: Scalar> Quaternion<T> {
    /// `(0, 0, 0, 1)`: no rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// Rotation of `angle` radians about a unit `axis`.
    ///
    /// ```
    /// use vlk_common::{Quaternion, Vector3};
    /// let q = Quaternion::from_axis_angle(Vector3::from_array([0.0, 0.0, 1.0]), 1.0_f64);
    /// assert!((q.norm() - 1.0).abs() < 1e-12);
    /// assert!((q.w - 0.5_f64.cos()).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn from_axis_angle(axis: Vector3<T>, angle: T) -> Self {
        let (s, c) = (angle / (T::one() + T::one())).sin_cos();
        Self::from_parts(axis * s, c)
    }

    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = (angle / (T::one() + T::one())).sin_cos();
        Self::new(s, T::zero(), T::zero(), c)
    }

    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = (angle / (T::one() + T::one())).sin_cos();
        Self::new(T::zero(), s, T::zero(), c)
    }

    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = (angle / (T::one() + T::one())).sin_cos();
        Self::new(T::zero(), T::zero(), s, c)
    }

    /// Recover the rotation from a 3×3 rotation matrix (Shepperd's method).
    ///
    /// Branches on the largest of the trace and the diagonal so the
    /// square root never sees a small argument.
    pub fn from_rotation_matrix(m: &Matrix3<T>) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
        let one = T::one();
        let half = one / (one + one);
        let quarter = half * half;

        if trace > T::zero() {
            let s = (trace + one).sqrt();
            let k = half / s;
            Self::new(
                (m[(2, 1)] - m[(1, 2)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
                (m[(1, 0)] - m[(0, 1)]) * k,
                s * half,
            )
        } else if m[(0, 0)] >= m[(1, 1)] && m[(0, 0)] >= m[(2, 2)] {
            let s = ((one + m[(0, 0)] - m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Self::new(
                s,
                (m[(0, 1)] + m[(1, 0)]) * k,
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(2, 1)] - m[(1, 2)]) * k,
            )
        } else if m[(1, 1)] >= m[(2, 2)] {
            let s = ((one - m[(0, 0)] + m[(1, 1)] - m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Self::new(
                (m[(0, 1)] + m[(1, 0)]) * k,
                s,
                (m[(1, 2)] + m[(2, 1)]) * k,
                (m[(0, 2)] - m[(2, 0)]) * k,
            )
        } else {
            let s = ((one - m[(0, 0)] - m[(1, 1)] + m[(2, 2)]) * quarter).sqrt();
            let k = quarter / s;
            Self::new(
                (m[(0, 2)] + m[(2, 0)]) * k,
                (m[(1, 2)] + m[(2, 1)]) * k,
                s,
                (m[(1, 0)] - m[(0, 1)]) * k,
            )
        }
    }

    /// Same as [`from_rotation_matrix`](Self::from_rotation_matrix) on the
    /// upper-left 3×3 block. Translation is ignored.
    pub fn from_rotation_matrix4(m: &Matrix4<T>) -> Self {
        let mut block = Matrix3::zeros();
        for c in 0..3 {
            for r in 0..3 {
                block[(r, c)] = m[(r, c)];
            }
        }
        Self::from_rotation_matrix(&block)
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// `(-x, -y, -z, w)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Scale to unit length.
    #[inline]
    pub fn normalize(&self) -> Self {
        let inv = T::one() / self.norm();
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// `conjugate / norm²`; equals the conjugate for unit quaternions.
    #[inline]
    pub fn inverse(&self) -> Self {
        let inv = T::one() / self.norm_squared();
        let c = self.conjugate();
        Self::new(c.x * inv, c.y * inv, c.z * inv, c.w * inv)
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    /// Equivalent 3×3 rotation matrix.
    pub fn to_rotation_matrix(&self) -> Matrix3<T> {
        let two = T::one() + T::one();
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Matrix3::new([
            [T::one() - two * (yy + zz), two * (xy - wz), two * (xz + wy)],
            [two * (xy + wz), T::one() - two * (xx + zz), two * (yz - wx)],
            [two * (xz - wy), two * (yz + wx), T::one() - two * (xx + yy)],
        ])
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product: (a * b) applies b first, then a.
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<T: FloatScalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        (*self).mul(*rhs)
    }
}

// Rotate a vector: q v q⁻¹ as v + 2w(u × v) + 2(u × (u × v)).
impl<T: FloatScalar> Mul<Vector3<T>> for Quaternion<T> {
    type Output = Vector3<T>;

    #[inline]
    fn mul(self, v: Vector3<T>) -> Vector3<T> {
        let u = self.vector();
        let two = T::one() + T::one();
        let uv = u.cross(&v);
        let uuv = u.cross(&uv);
        v + uv * (two * self.w) + uuv * two
    }
}

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

// ── Compile-time forms ──────────────────────────────────────────────

macro_rules! impl_const_quaternion {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::unnecessary_cast, clippy::should_implement_trait)]
            impl ConstEval<Quaternion<$t>> {
                const fn half_sin_cos(angle: $t) -> ($t, $t) {
                    let half = (angle / 2.0) as f64;
                    (series::sin(half) as $t, series::cos(half) as $t)
                }

                pub const fn from_axis_angle(axis: Vector3<$t>, angle: $t) -> Self {
                    let (s, c) = Self::half_sin_cos(angle);
                    ConstEval(Quaternion::new(axis.x() * s, axis.y() * s, axis.z() * s, c))
                }

                pub const fn rotation_x(angle: $t) -> Self {
                    let (s, c) = Self::half_sin_cos(angle);
                    ConstEval(Quaternion::new(s, 0.0, 0.0, c))
                }

                pub const fn rotation_y(angle: $t) -> Self {
                    let (s, c) = Self::half_sin_cos(angle);
                    ConstEval(Quaternion::new(0.0, s, 0.0, c))
                }

                pub const fn rotation_z(angle: $t) -> Self {
                    let (s, c) = Self::half_sin_cos(angle);
                    ConstEval(Quaternion::new(0.0, 0.0, s, c))
                }

                /// Hamilton product.
                pub const fn mul(self, rhs: Self) -> Self {
                    let (a, b) = (self.0, rhs.0);
                    ConstEval(Quaternion::new(
                        a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
                        a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
                        a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
                        a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
                    ))
                }

                pub const fn conjugate(self) -> Self {
                    let q = self.0;
                    ConstEval(Quaternion::new(-q.x, -q.y, -q.z, q.w))
                }

                pub const fn norm(self) -> $t {
                    let q = self.0;
                    let n2 = q.x * q.x + q.y * q.y + q.z * q.z + q.w * q.w;
                    series::sqrt(n2 as f64) as $t
                }

                pub const fn normalize(self) -> Self {
                    let q = self.0;
                    let inv = 1.0 / self.norm();
                    ConstEval(Quaternion::new(q.x * inv, q.y * inv, q.z * inv, q.w * inv))
                }

                pub const fn to_rotation_matrix(self) -> ConstEval<Matrix3<$t>> {
                    let (x, y, z, w) = (self.0.x, self.0.y, self.0.z, self.0.w);
                    let (xx, yy, zz) = (x * x, y * y, z * z);
                    let (xy, xz, yz) = (x * y, x * z, y * z);
                    let (wx, wy, wz) = (w * x, w * y, w * z);
                    ConstEval(Matrix3::new([
                        [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
                        [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
                        [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
                    ]))
                }

                pub const fn from_rotation_matrix(m: Matrix3<$t>) -> Self {
                    // d[col][row]
                    let d = m.data;
                    let trace = d[0][0] + d[1][1] + d[2][2];
                    let q = if trace > 0.0 {
                        let s = series::sqrt((trace + 1.0) as f64) as $t;
                        let k = 0.5 / s;
                        Quaternion::new(
                            (d[1][2] - d[2][1]) * k,
                            (d[2][0] - d[0][2]) * k,
                            (d[0][1] - d[1][0]) * k,
                            s * 0.5,
                        )
                    } else if d[0][0] >= d[1][1] && d[0][0] >= d[2][2] {
                        let s = series::sqrt(((1.0 + d[0][0] - d[1][1] - d[2][2]) * 0.25) as f64) as $t;
                        let k = 0.25 / s;
                        Quaternion::new(
                            s,
                            (d[1][0] + d[0][1]) * k,
                            (d[2][0] + d[0][2]) * k,
                            (d[1][2] - d[2][1]) * k,
                        )
                    } else if d[1][1] >= d[2][2] {
                        let s = series::sqrt(((1.0 - d[0][0] + d[1][1] - d[2][2]) * 0.25) as f64) as $t;
                        let k = 0.25 / s;
                        Quaternion::new(
                            (d[1][0] + d[0][1]) * k,
                            s,
                            (d[2][1] + d[1][2]) * k,
                            (d[2][0] - d[0][2]) * k,
                        )
                    } else {
                        let s = series::sqrt(((1.0 - d[0][0] - d[1][1] + d[2][2]) * 0.25) as f64) as $t;
                        let k = 0.25 / s;
                        Quaternion::new(
                            (d[2][0] + d[0][2]) * k,
                            (d[2][1] + d[1][2]) * k,
                            s,
                            (d[0][1] - d[1][0]) * k,
                        )
                    };
                    ConstEval(q)
                }

                /// Rotate a vector: `q v q⁻¹`.
                pub const fn rotate(self, v: Vector3<$t>) -> Vector3<$t> {
                    let u = ConstEval(self.0.vector());
                    let cv = ConstEval(v);
                    let uv = u.cross(cv);
                    let uuv = u.cross(uv);
                    cv.add(uv.mul_scalar(2.0 * self.0.w)).add(uuv.mul_scalar(2.0)).0
                }
            }
        )*
    };
}

impl_const_quaternion!(f32, f64);
