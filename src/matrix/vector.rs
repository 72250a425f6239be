use core::ops::{Index, IndexMut};

use num_traits::Signed;

use crate::math::ConstEval;
use crate::traits::Scalar;
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// Vectors support single-index access (`v[i]`), componentwise arithmetic,
/// dot products, lengths, and cross products (3-element vectors). Use
/// [`ColumnVector`] for column vectors.
///
/// # Examples
///
/// ```
/// use vlk_common::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert!((v.length() - 5.0).abs() < 1e-12);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

/// A 2-element row vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element row vector.
///
/// Adds `cross()` for cross product in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element row vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Copy, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array. Usable in `const` items.
    ///
    /// ```
    /// use vlk_common::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// The components as an array.
    #[inline]
    pub const fn to_array(&self) -> [T; N] {
        let mut out = [self.data[0][0]; N];
        let mut i = 1;
        while i < N {
            out[i] = self.data[i][0];
            i += 1;
        }
        out
    }

    /// Create a vector filled with a single value.
    #[inline]
    pub const fn fill(value: T) -> Self {
        Self::new([[value; N]])
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for the zero-length vector type.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// All components zero. Same as [`Matrix::zeros`].
    #[inline]
    pub fn zero() -> Self {
        Self::zeros()
    }

    /// All components one.
    #[inline]
    pub fn one() -> Self {
        Self::fill(T::one())
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use vlk_common::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(0, i)] * rhs[(0, i)];
        }
        sum
    }
}

// ── Named axes ──────────────────────────────────────────────────────

impl<T: Copy> Vector2<T> {
    #[inline]
    pub const fn x(&self) -> T {
        self.data[0][0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.data[1][0]
    }
}

impl<T: Copy> Vector3<T> {
    #[inline]
    pub const fn x(&self) -> T {
        self.data[0][0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.data[1][0]
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.data[2][0]
    }

    /// Append a third component to a 2-vector.
    #[inline]
    pub const fn from_vector2(v: Vector2<T>, z: T) -> Self {
        Self::from_array([v.x(), v.y(), z])
    }

    /// Drop the Z component.
    #[inline]
    pub const fn truncate(&self) -> Vector2<T> {
        Vector2::from_array([self.x(), self.y()])
    }
}

impl<T: Copy> Vector4<T> {
    #[inline]
    pub const fn x(&self) -> T {
        self.data[0][0]
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.data[1][0]
    }

    #[inline]
    pub const fn z(&self) -> T {
        self.data[2][0]
    }

    #[inline]
    pub const fn w(&self) -> T {
        self.data[3][0]
    }

    /// Append a fourth component to a 3-vector.
    #[inline]
    pub const fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::from_array([v.x(), v.y(), v.z(), w])
    }

    /// Drop the W component.
    #[inline]
    pub const fn truncate(&self) -> Vector3<T> {
        Vector3::from_array([self.x(), self.y(), self.z()])
    }
}

// ── Named directions ────────────────────────────────────────────────
// Screen convention: +Y is up, +X is right; in 3D, -Z points forward.

impl<T: Scalar + Signed> Vector2<T> {
    pub fn up() -> Self {
        Self::from_array([T::zero(), T::one()])
    }

    pub fn down() -> Self {
        Self::from_array([T::zero(), -T::one()])
    }

    pub fn left() -> Self {
        Self::from_array([-T::one(), T::zero()])
    }

    pub fn right() -> Self {
        Self::from_array([T::one(), T::zero()])
    }

    /// The vector rotated a quarter turn clockwise: `(y, -x)`.
    ///
    /// ```
    /// use vlk_common::Vector2;
    /// let v = Vector2::from_array([3, 1]);
    /// assert_eq!(v.perpendicular(), Vector2::from_array([1, -3]));
    /// ```
    pub fn perpendicular(&self) -> Self {
        Self::from_array([self.y(), -self.x()])
    }
}

impl<T: Scalar + Signed> Vector3<T> {
    pub fn up() -> Self {
        Self::from_array([T::zero(), T::one(), T::zero()])
    }

    pub fn down() -> Self {
        Self::from_array([T::zero(), -T::one(), T::zero()])
    }

    pub fn left() -> Self {
        Self::from_array([-T::one(), T::zero(), T::zero()])
    }

    pub fn right() -> Self {
        Self::from_array([T::one(), T::zero(), T::zero()])
    }

    pub fn forward() -> Self {
        Self::from_array([T::zero(), T::zero(), -T::one()])
    }

    pub fn backward() -> Self {
        Self::from_array([T::zero(), T::zero(), T::one()])
    }
}

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use vlk_common::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[(0, i)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[(0, i)]
    }
}

// ── Column vector ───────────────────────────────────────────────────

/// A column vector (N×1 matrix).
///
/// Enables natural `Matrix * ColumnVector` multiplication:
/// `(M×N) * (N×1) → (M×1)`.
///
/// Convert between row and column vectors with `.transpose()`.
/// Single-element access uses `cv[(i, 0)]`.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;

/// A 3-element column vector.
pub type ColumnVector3<T> = ColumnVector<T, 3>;
/// A 4-element column vector.
pub type ColumnVector4<T> = ColumnVector<T, 4>;

impl<T: Copy, const N: usize> ColumnVector<T, N> {
    /// Create a column vector from a 1D array.
    ///
    /// ```
    /// use vlk_common::ColumnVector;
    /// let cv = ColumnVector::from_column([1.0, 2.0, 3.0]);
    /// assert_eq!(cv[(0, 0)], 1.0);
    /// assert_eq!(cv[(2, 0)], 3.0);
    /// ```
    #[inline]
    pub const fn from_column(data: [T; N]) -> Self {
        Self::from_columns([data])
    }
}

// ── Compile-time forms ──────────────────────────────────────────────

macro_rules! impl_const_vector {
    ($($t:ty),*) => {
        $(
            impl ConstEval<Vector2<$t>> {
                /// `(y, -x)`.
                pub const fn perpendicular(self) -> Self {
                    let v = self.0;
                    ConstEval(Vector2::from_array([v.y(), 0.0 - v.x()]))
                }
            }

            impl ConstEval<Vector3<$t>> {
                pub const fn cross(self, rhs: Self) -> Self {
                    let (a, b) = (self.0, rhs.0);
                    ConstEval(Vector3::from_array([
                        a.y() * b.z() - a.z() * b.y(),
                        a.z() * b.x() - a.x() * b.z(),
                        a.x() * b.y() - a.y() * b.x(),
                    ]))
                }
            }
        )*
    };
}

impl_const_vector!(f32, f64);
