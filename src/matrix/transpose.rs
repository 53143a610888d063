use log::debug;

use super::{Element, Matrix};
use crate::threaded::split;

/// Writes rows `[col_start, col_end)` of `src^T` into `dst`.
///
/// `src` is `rows × cols`, row-major. Row `j` of the transpose is column `j`
/// of `src`, so `dst` must hold `(col_end - col_start) * rows` elements and
/// receives those output rows back to back.
///
/// # Example
///
/// ```
/// use rmatrix::matrix::transpose::transpose_rows;
///
/// let src = vec![1.0, 2.0, 3.0,   // 2×3 matrix
///                4.0, 5.0, 6.0];
/// let mut dst = vec![0.0; 6];      // will be 3×2
///
/// transpose_rows(&src, &mut dst, 2, 3, 0, 3);
///
/// assert_eq!(dst, vec![1.0, 4.0,   // 3×2 matrix
///                      2.0, 5.0,
///                      3.0, 6.0]);
/// ```
pub fn transpose_rows<T: Copy>(
    src: &[T],
    dst: &mut [T],
    rows: usize,
    cols: usize,
    col_start: usize,
    col_end: usize,
) {
    for (offset, j) in (col_start..col_end).enumerate() {
        let out_row = &mut dst[offset * rows..(offset + 1) * rows];
        for (i, out) in out_row.iter_mut().enumerate() {
            *out = src[i * cols + j];
        }
    }
}

impl<T: Element> Matrix<T> {
    /// New `columns × rows` matrix with `result(j, i) == self(i, j)`.
    ///
    /// Partitioned over output rows, so every thread writes a contiguous run
    /// of the result.
    pub fn transpose(&self) -> Matrix<T> {
        debug!("transpose {}x{}", self.rows, self.columns);

        let (rows, cols) = (self.rows, self.columns);
        let mut result = Matrix::zeros(cols, rows);
        let src = self.as_slice();

        split::run_mut(cols, &mut result.data, |start, end, chunk| {
            transpose_rows(src, chunk, rows, cols, start, end);
        });
        result
    }
}
