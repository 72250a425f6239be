use core::fmt;

use crate::Matrix;

impl<T: Copy + Default, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Build a matrix from `f(row, col)`.
    ///
    /// ```
    /// use vlk_common::Matrix;
    /// let m: Matrix<i32, 2, 3> = Matrix::from_fn(|i, j| (10 * i + j) as i32);
    /// assert_eq!(m, Matrix::new([[0, 1, 2], [10, 11, 12]]));
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = [[T::default(); M]; N];
        for (j, col) in data.iter_mut().enumerate() {
            for (i, x) in col.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        Self { data }
    }
}

/// One bracketed row per line. Width and precision flags apply to every
/// element, so `{:.3}` prints each entry with three decimals.
impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..M {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for j in 0..N {
                if j > 0 {
                    f.write_str(", ")?;
                }
                fmt::Display::fmt(&self.data[j][i], f)?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
