use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::ConstEval;
use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Add for Matrix<T, M, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Sub for Matrix<T, M, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = T::zero() - self[(i, j)];
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Neg for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn neg(self) -> Matrix<T, M, N> {
        (*self).neg()
    }
}

impl<T: Scalar, const M: usize, const N: usize> AddAssign<&Matrix<T, M, N>> for Matrix<T, M, N> {
    fn add_assign(&mut self, rhs: &Matrix<T, M, N>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const M: usize, const N: usize> SubAssign<&Matrix<T, M, N>> for Matrix<T, M, N> {
    fn sub_assign(&mut self, rhs: &Matrix<T, M, N>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        for i in 0..M {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

// ── Scalar operations: matrix ∘ scalar, element by element ─────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] * rhs;
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar, const M: usize, const N: usize> Div<T> for Matrix<T, M, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] / rhs;
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> DivAssign<T> for Matrix<T, M, N> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar, const M: usize, const N: usize> Add<T> for Matrix<T, M, N> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] + rhs;
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> Sub<T> for Matrix<T, M, N> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let mut out = self;
        for i in 0..M {
            for j in 0..N {
                out[(i, j)] = self[(i, j)] - rhs;
            }
        }
        out
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const M: usize, const N: usize> $Op<Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(*rhs)
    }
}

// ── Reference variants for scalar multiplication and division ───────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;
    fn mul(self, rhs: T) -> Matrix<T, M, N> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Div<T> for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;
    fn div(self, rhs: T) -> Matrix<T, M, N> {
        (*self).div(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    rhs * self
                }
            }

            impl<const M: usize, const N: usize> Mul<&Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: &Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Matrix-vector product ────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Matrix-vector product: A * v → result.
    ///
    /// The vector is treated as a single column: `out[row] = Σ A[row][col] * v[col]`.
    /// Takes and returns row vectors for convenience, avoiding
    /// explicit transpose. Equivalent to `(A * v^T)^T`.
    pub fn vecmul(&self, v: &Vector<T, N>) -> Vector<T, M> {
        let mut out = Vector::<T, M>::zeros();
        for i in 0..M {
            let mut sum = T::zero();
            for j in 0..N {
                sum = sum + self[(i, j)] * v[j];
            }
            out[i] = sum;
        }
        out
    }
}

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for i in 0..M {
            for j in 0..N {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}

// ── Compile-time forms ──────────────────────────────────────────────

/// Visits every `(col, row)` of an `M×N` grid with `while` loops, which are
/// the only loops a `const fn` may use.
macro_rules! for_each_cell {
    ($m:expr, $n:expr, |$c:ident, $r:ident| $body:block) => {
        let mut $c = 0;
        while $c < $n {
            let mut $r = 0;
            while $r < $m {
                $body
                $r += 1;
            }
            $c += 1;
        }
    };
}

pub(crate) use for_each_cell;

macro_rules! impl_const_ops {
    ($($t:ty),*) => {
        $(
            #[allow(clippy::should_implement_trait)]
            impl<const M: usize, const N: usize> ConstEval<Matrix<$t, M, N>> {
                pub const fn add(self, rhs: Self) -> Self {
                    let mut out = self.0;
                    for_each_cell!(M, N, |c, r| {
                        out.data[c][r] = self.0.data[c][r] + rhs.0.data[c][r];
                    });
                    Self(out)
                }

                pub const fn sub(self, rhs: Self) -> Self {
                    let mut out = self.0;
                    for_each_cell!(M, N, |c, r| {
                        out.data[c][r] = self.0.data[c][r] - rhs.0.data[c][r];
                    });
                    Self(out)
                }

                pub const fn neg(self) -> Self {
                    let mut out = self.0;
                    for_each_cell!(M, N, |c, r| {
                        out.data[c][r] = 0.0 - self.0.data[c][r];
                    });
                    Self(out)
                }

                pub const fn mul_scalar(self, k: $t) -> Self {
                    let mut out = self.0;
                    for_each_cell!(M, N, |c, r| {
                        out.data[c][r] = self.0.data[c][r] * k;
                    });
                    Self(out)
                }

                pub const fn div_scalar(self, k: $t) -> Self {
                    let mut out = self.0;
                    for_each_cell!(M, N, |c, r| {
                        out.data[c][r] = self.0.data[c][r] / k;
                    });
                    Self(out)
                }

                /// `(M×N) * (N×P) → (M×P)`, summed in the same order as `*`.
                pub const fn mul<const P: usize>(
                    self,
                    rhs: ConstEval<Matrix<$t, N, P>>,
                ) -> ConstEval<Matrix<$t, M, P>> {
                    let mut out = Matrix { data: [[0.0; M]; P] };
                    for_each_cell!(M, P, |c, r| {
                        let mut sum = 0.0;
                        let mut k = 0;
                        while k < N {
                            sum = sum + self.0.data[k][r] * rhs.0.data[c][k];
                            k += 1;
                        }
                        out.data[c][r] = sum;
                    });
                    ConstEval(out)
                }

                pub const fn vecmul(
                    self,
                    v: ConstEval<Vector<$t, N>>,
                ) -> ConstEval<Vector<$t, M>> {
                    let mut out = Matrix { data: [[0.0; 1]; M] };
                    let mut r = 0;
                    while r < M {
                        let mut sum = 0.0;
                        let mut c = 0;
                        while c < N {
                            sum = sum + self.0.data[c][r] * v.0.data[c][0];
                            c += 1;
                        }
                        out.data[r][0] = sum;
                        r += 1;
                    }
                    ConstEval(out)
                }

                pub const fn transpose(self) -> ConstEval<Matrix<$t, N, M>> {
                    let mut out = Matrix { data: [[0.0; N]; M] };
                    for_each_cell!(M, N, |c, r| {
                        out.data[r][c] = self.0.data[c][r];
                    });
                    ConstEval(out)
                }
            }
        )*
    };
}

impl_const_ops!(f32, f64);
