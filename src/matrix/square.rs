//! Determinant and inverse by cofactor expansion.
//!
//! Both run on the column storage directly and recurse on scratch grids of
//! the same `N×N` array type, using only the leading `size×size` block. That
//! keeps the recursion free of dimension arithmetic in the type system.
//!
//! The cost is O(N!), fine for the 2×2 to 4×4 matrices used by transforms
//! and a steep cliff beyond that. No pivoting or LU shortcut is taken, so
//! results are the exact cofactor sums (up to float rounding).

use crate::math::ConstEval;
use crate::matrix::ops::for_each_cell;
use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// Copy of the leading `size×size` block of `g` with column `col` and row
/// `row` removed, packed into the top-left corner.
fn without<T: Scalar, const N: usize>(
    g: &[[T; N]; N],
    size: usize,
    col: usize,
    row: usize,
) -> [[T; N]; N] {
    let mut out = [[T::zero(); N]; N];
    let mut oc = 0;
    for c in 0..size {
        if c == col {
            continue;
        }
        let mut or = 0;
        for r in 0..size {
            if r == row {
                continue;
            }
            out[oc][or] = g[c][r];
            or += 1;
        }
        oc += 1;
    }
    out
}

/// Determinant of the leading `size×size` block of a column-major grid.
///
/// Expands along row 0: for each column `c`, drop column `c` and row 0,
/// recurse, weight by `g[c][0]` with alternating sign starting at `+`.
fn cofactor_det<T: Scalar, const N: usize>(g: &[[T; N]; N], size: usize) -> T {
    match size {
        0 => T::one(),
        1 => g[0][0],
        2 => g[0][0] * g[1][1] - g[1][0] * g[0][1],
        _ => {
            let mut det = T::zero();
            for c in 0..size {
                let term = g[c][0] * cofactor_det(&without(g, size, c, 0), size - 1);
                det = if c % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a vector.
    pub fn diag(&self) -> Vector<T, N> {
        let mut v = Vector::zeros();
        for i in 0..N {
            v[i] = self[(i, i)];
        }
        v
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Determinant by recursive cofactor expansion along the first row.
    ///
    /// ```
    /// use vlk_common::Matrix;
    /// let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
    /// assert_eq!(m.determinant(), -306);
    /// ```
    pub fn determinant(&self) -> T {
        cofactor_det(&self.data, N)
    }

    /// Determinant of the submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> T {
        cofactor_det(&without(&self.data, N, col, row), N.saturating_sub(1))
    }

    /// The minor at `(row, col)` with the checkerboard sign applied:
    /// negative when exactly one of `row`, `col` is odd.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        let m = self.minor(row, col);
        if (row + col) % 2 == 0 {
            m
        } else {
            T::zero() - m
        }
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut out = Self::zeros();
        for r in 0..N {
            for c in 0..N {
                out[(c, r)] = self.cofactor(r, c);
            }
        }
        out
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Inverse as adjugate over determinant.
    ///
    /// A singular matrix is not detected: the division by a zero
    /// determinant yields infinities and NaN.
    ///
    /// ```
    /// use vlk_common::Matrix;
    /// let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let inv = m.inverse();
    /// assert!((m * inv).max_abs_diff(&Matrix::identity()) < 1e-12);
    ///
    /// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
    /// assert!(!singular.inverse()[(0, 0)].is_finite());
    /// ```
    pub fn inverse(&self) -> Self {
        match N {
            0 => *self,
            1 => Self::from_columns([[T::one() / self.data[0][0]; N]; N]),
            2 => {
                let det = self.determinant();
                let (a, b) = (self[(0, 0)], self[(0, 1)]);
                let (c, d) = (self[(1, 0)], self[(1, 1)]);
                let mut out = *self;
                out[(0, 0)] = d / det;
                out[(0, 1)] = (T::zero() - b) / det;
                out[(1, 0)] = (T::zero() - c) / det;
                out[(1, 1)] = a / det;
                out
            }
            _ => {
                let mut cof = Self::zeros();
                for r in 0..N {
                    for c in 0..N {
                        cof[(r, c)] = self.cofactor(r, c);
                    }
                }
                // same terms, same order as determinant()
                let mut det = T::zero();
                for c in 0..N {
                    det = det + self[(0, c)] * cof[(0, c)];
                }
                let mut out = Self::zeros();
                for r in 0..N {
                    for c in 0..N {
                        out[(c, r)] = cof[(r, c)] / det;
                    }
                }
                out
            }
        }
    }
}

// ── Compile-time forms ──────────────────────────────────────────────

macro_rules! impl_const_square {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> ConstEval<Matrix<$t, N, N>> {
                const fn without(
                    g: &[[$t; N]; N],
                    size: usize,
                    col: usize,
                    row: usize,
                ) -> [[$t; N]; N] {
                    let mut out = [[0.0; N]; N];
                    let mut oc = 0;
                    let mut c = 0;
                    while c < size {
                        if c != col {
                            let mut or = 0;
                            let mut r = 0;
                            while r < size {
                                if r != row {
                                    out[oc][or] = g[c][r];
                                    or += 1;
                                }
                                r += 1;
                            }
                            oc += 1;
                        }
                        c += 1;
                    }
                    out
                }

                const fn cofactor_det(g: &[[$t; N]; N], size: usize) -> $t {
                    match size {
                        0 => 1.0,
                        1 => g[0][0],
                        2 => g[0][0] * g[1][1] - g[1][0] * g[0][1],
                        _ => {
                            let mut det = 0.0;
                            let mut c = 0;
                            while c < size {
                                let sub = Self::without(g, size, c, 0);
                                let term = g[c][0] * Self::cofactor_det(&sub, size - 1);
                                det = if c % 2 == 0 { det + term } else { det - term };
                                c += 1;
                            }
                            det
                        }
                    }
                }

                pub const fn determinant(self) -> ConstEval<$t> {
                    ConstEval(Self::cofactor_det(&self.0.data, N))
                }

                pub const fn cofactor(self, row: usize, col: usize) -> ConstEval<$t> {
                    let sub = Self::without(&self.0.data, N, col, row);
                    let m = Self::cofactor_det(&sub, N.saturating_sub(1));
                    ConstEval(if (row + col) % 2 == 0 { m } else { 0.0 - m })
                }

                pub const fn inverse(self) -> Self {
                    let g = self.0.data;
                    let mut out = self.0;
                    if N == 1 {
                        out.data[0][0] = 1.0 / g[0][0];
                    } else if N == 2 {
                        let det = self.determinant().0;
                        out.data[0][0] = g[1][1] / det;
                        out.data[1][0] = (0.0 - g[1][0]) / det;
                        out.data[0][1] = (0.0 - g[0][1]) / det;
                        out.data[1][1] = g[0][0] / det;
                    } else if N > 2 {
                        // cof[c][r] is the cofactor at (row r, col c)
                        let mut cof = [[0.0; N]; N];
                        for_each_cell!(N, N, |c, r| {
                            cof[c][r] = self.cofactor(r, c).0;
                        });
                        let mut det = 0.0;
                        let mut c = 0;
                        while c < N {
                            det = det + g[c][0] * cof[c][0];
                            c += 1;
                        }
                        for_each_cell!(N, N, |c, r| {
                            out.data[r][c] = cof[c][r] / det;
                        });
                    }
                    ConstEval(out)
                }
            }
        )*
    };
}

impl_const_square!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() < tol,
            "approx_eq failed: {a} vs {b}, diff = {}",
            (a - b).abs()
        );
    }

    fn m4() -> Matrix<f64, 4, 4> {
        Matrix::new([
            [0.0, 1.0, 2.0, -2.0],
            [9.0, 8.0, 7.0, 0.0],
            [3.0, 4.0, 5.0, 4.0],
            [2.0, 6.0, 1.0, -7.0],
        ])
    }

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);

        let id: Matrix<f64, 3, 3> = Matrix::identity();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn trace_integer() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(m.trace(), 15);
    }

    #[test]
    fn diag_and_from_diag() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let d = m.diag();
        assert_eq!(d.to_array(), [1.0, 5.0, 9.0]);

        let m2 = Matrix::from_diag(&d);
        assert_eq!(m2[(0, 0)], 1.0);
        assert_eq!(m2[(1, 1)], 5.0);
        assert_eq!(m2[(2, 2)], 9.0);
        assert_eq!(m2[(0, 1)], 0.0);
    }

    #[test]
    fn det_1x1() {
        assert_eq!(Matrix::new([[-3.5]]).determinant(), -3.5);
    }

    #[test]
    fn det_2x2() {
        let m = Matrix::new([[3.0_f64, 8.0], [4.0, 6.0]]);
        assert_eq!(m.determinant(), -14.0);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(m.determinant(), -306.0);
    }

    #[test]
    fn det_4x4() {
        approx_eq(m4().determinant(), -540.0, 1e-9);
    }

    #[test]
    fn det_identity() {
        assert_eq!(Matrix::<f64, 4, 4>::identity().determinant(), 1.0);
        assert_eq!(Matrix::<i64, 5, 5>::identity().determinant(), 1);
    }

    #[test]
    fn det_singular() {
        let m = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(m.determinant(), 0.0);

        // third row = first + second
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [5, 7, 9]]);
        assert_eq!(m.determinant(), 0);
    }

    #[test]
    fn minors_and_cofactors() {
        let m = Matrix::new([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        assert_eq!(m.minor(0, 0), 24);
        assert_eq!(m.minor(0, 1), -5);
        assert_eq!(m.cofactor(0, 1), 5);
        assert_eq!(m.cofactor(1, 0), -12);
        assert_eq!(m.cofactor(1, 1), 3);
    }

    #[test]
    fn adjugate_3x3() {
        let m = Matrix::new([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        let expected = Matrix::new([[24, -12, -2], [5, 3, -5], [-4, 2, 4]]);
        assert_eq!(m.adjugate(), expected);
        // A · adj(A) = det(A) · I
        assert_eq!(m * m.adjugate(), Matrix::<i32, 3, 3>::identity() * m.determinant());
    }

    #[test]
    fn inverse_1x1() {
        assert_eq!(Matrix::new([[4.0]]).inverse(), Matrix::new([[0.25]]));
    }

    #[test]
    fn inverse_2x2_closed_form() {
        let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
        let inv = m.inverse();
        approx_eq(inv[(0, 0)], 0.6, 1e-12);
        approx_eq(inv[(0, 1)], -0.7, 1e-12);
        approx_eq(inv[(1, 0)], -0.2, 1e-12);
        approx_eq(inv[(1, 1)], 0.4, 1e-12);
    }

    #[test]
    fn inverse_4x4() {
        let m = m4();
        let inv = m.inverse();
        let expected = [
            [-0.0963, 0.21667, -0.24259, -0.1111],
            [-0.27407, -0.13333, 0.25185, 0.2222],
            [0.43704, 0.016667, 0.024074, -0.1111],
            [-0.2, -0.05, 0.15, 0.0],
        ];
        for r in 0..4 {
            for c in 0..4 {
                approx_eq(inv[(r, c)], expected[r][c], 1e-4);
            }
        }
        assert!((m * inv).max_abs_diff(&Matrix::identity()) < 1e-4);
        assert!((inv * m).max_abs_diff(&Matrix::identity()) < 1e-4);
    }

    #[test]
    fn inverse_singular_is_not_finite() {
        let m = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [5.0, 7.0, 9.0]]);
        let inv = m.inverse();
        assert!(!inv[(0, 0)].is_finite());
    }

    #[test]
    fn const_forms_match_runtime() {
        const M: Matrix<f64, 4, 4> = Matrix::new([
            [0.0, 1.0, 2.0, -2.0],
            [9.0, 8.0, 7.0, 0.0],
            [3.0, 4.0, 5.0, 4.0],
            [2.0, 6.0, 1.0, -7.0],
        ]);
        const DET: f64 = ConstEval(M).determinant().get();
        const INV: Matrix<f64, 4, 4> = ConstEval(M).inverse().get();

        assert_eq!(DET, M.determinant());
        assert_eq!(INV, M.inverse());
        assert_eq!(ConstEval(M).cofactor(2, 1).get(), M.cofactor(2, 1));

        let m2 = Matrix::new([[4.0_f32, 7.0], [2.0, 6.0]]);
        assert_eq!(ConstEval(m2).inverse().get(), m2.inverse());
        let m1 = Matrix::new([[8.0_f32]]);
        assert_eq!(ConstEval(m1).inverse().get(), m1.inverse());
    }
}
