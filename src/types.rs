//! Small value types built on the vector engine: integer [`Point`]s,
//! [`Area`]s and RGBA [`Color`]s.

use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Signed;

use crate::matrix::vector::{Vector2, Vector4};
use crate::traits::{FloatScalar, Scalar};

// ── Point ───────────────────────────────────────────────────────────

/// A 2D point on an integer grid (pixels, tiles, cells).
///
/// ```
/// use vlk_common::Point;
/// let p = Point::new(6, 3) * 2 - Point::new(2, 2);
/// assert_eq!((p.x(), p.y()), (10, 4));
/// assert_eq!(-p, Point::new(-10, -4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Point<T = i32>(pub Vector2<T>);

impl<T: Copy> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self(Vector2::from_array([x, y]))
    }

    #[inline]
    pub const fn x(&self) -> T {
        self.0.x()
    }

    #[inline]
    pub const fn y(&self) -> T {
        self.0.y()
    }
}

impl<T: Scalar> Default for Point<T> {
    fn default() -> Self {
        Self(Vector2::zeros())
    }
}

impl<T> From<Vector2<T>> for Point<T> {
    fn from(v: Vector2<T>) -> Self {
        Self(v)
    }
}

impl<T> From<Point<T>> for Vector2<T> {
    fn from(p: Point<T>) -> Self {
        p.0
    }
}

impl<T> Index<usize> for Point<T> {
    type Output = T;
    fn index(&self, i: usize) -> &T {
        &self.0[i]
    }
}

impl<T> IndexMut<usize> for Point<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.0[i]
    }
}

impl<T: Scalar + Signed> Neg for Point<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> Add for Point<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Scalar> Sub for Point<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Scalar> Mul<T> for Point<T> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        Self(self.0 * k)
    }
}

/// Integer division truncates toward zero per component.
impl<T: Scalar> Div<T> for Point<T> {
    type Output = Self;
    fn div(self, k: T) -> Self {
        Self(self.0 / k)
    }
}

impl<T: Scalar> AddAssign for Point<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Point<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Point<T> {
    fn mul_assign(&mut self, k: T) {
        *self = *self * k;
    }
}

impl<T: Scalar> DivAssign<T> for Point<T> {
    fn div_assign(&mut self, k: T) {
        *self = *self / k;
    }
}

// ── Area ────────────────────────────────────────────────────────────

/// An axis-aligned rectangle: `size` anchored at `location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Area<T: Scalar = i32> {
    pub size: Point<T>,
    pub location: Point<T>,
}

impl<T: Scalar> Area<T> {
    pub fn new(size: Point<T>, location: Point<T>) -> Self {
        Self { size, location }
    }
}

// ── Color ───────────────────────────────────────────────────────────

/// Linear RGBA color. Components are nominally in `[0, 1]` but are not
/// clamped; arithmetic may leave that range.
///
/// The default is transparent black `(0, 0, 0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Color<T = f32>(pub Vector4<T>);

impl<T: Copy> Color<T> {
    #[inline]
    pub const fn rgba(r: T, g: T, b: T, a: T) -> Self {
        Self(Vector4::from_array([r, g, b, a]))
    }

    #[inline]
    pub const fn r(&self) -> T {
        self.0.x()
    }

    #[inline]
    pub const fn g(&self) -> T {
        self.0.y()
    }

    #[inline]
    pub const fn b(&self) -> T {
        self.0.z()
    }

    #[inline]
    pub const fn a(&self) -> T {
        self.0.w()
    }
}

impl<T: FloatScalar> Color<T> {
    /// Opaque color (alpha = 1).
    #[inline]
    pub fn rgb(r: T, g: T, b: T) -> Self {
        Self::rgba(r, g, b, T::one())
    }

    /// Componentwise interpolation `lhs + t·(rhs − lhs)`, alpha included.
    ///
    /// ```
    /// use vlk_common::Color;
    /// let grey = Color::mix(&Color::rgb(0.0, 0.0, 0.0), &Color::rgb(1.0, 1.0, 1.0), 0.5);
    /// assert_eq!(grey, Color::rgb(0.5, 0.5, 0.5));
    /// ```
    pub fn mix(lhs: &Self, rhs: &Self, t: T) -> Self {
        Self(lhs.0.lerp(&rhs.0, t))
    }
}

impl<T: FloatScalar> Default for Color<T> {
    fn default() -> Self {
        Self(Vector4::zeros())
    }
}

/// Inverts RGB and keeps alpha.
impl<T: FloatScalar> Neg for Color<T> {
    type Output = Self;
    fn neg(self) -> Self {
        let l = T::one();
        Self::rgba(l - self.r(), l - self.g(), l - self.b(), self.a())
    }
}

impl<T: FloatScalar> Add for Color<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: FloatScalar> Sub for Color<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: FloatScalar> Mul<T> for Color<T> {
    type Output = Self;
    fn mul(self, k: T) -> Self {
        Self(self.0 * k)
    }
}

impl<T: FloatScalar> Div<T> for Color<T> {
    type Output = Self;
    fn div(self, k: T) -> Self {
        Self(self.0 / k)
    }
}

impl<T: FloatScalar> AddAssign for Color<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: FloatScalar> SubAssign for Color<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: FloatScalar> MulAssign<T> for Color<T> {
    fn mul_assign(&mut self, k: T) {
        self.0 *= k;
    }
}

impl<T: FloatScalar> DivAssign<T> for Color<T> {
    fn div_assign(&mut self, k: T) {
        self.0 /= k;
    }
}
