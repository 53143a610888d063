use log::debug;

use super::{Element, Matrix};
use crate::error::{MatrixError, Result};
use crate::threaded::split;

/// Matrix multiplication over a band of output rows, i-j-k loop order.
///
/// This is the textbook triple loop: every output element is accumulated in
/// a local scalar, starting from `T::zero()`, then stored once. `c` holds
/// only rows `[row_start, row_end)` of the result and is overwritten.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Output rows `row_start..row_end` of C (m × n), row-major
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive_ijk<T: Element>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    n: usize,
    k: usize,
    row_start: usize,
    row_end: usize,
) {
    for (offset, i) in (row_start..row_end).enumerate() {
        for j in 0..n {
            let mut sum = T::zero();
            for p in 0..k {
                sum += a[i * k + p] * b[p * n + j];
            }
            c[offset * n + j] = sum;
        }
    }
}

impl<T: Element> Matrix<T> {
    /// Matrix product `self * other`.
    ///
    /// `self` is m × k and `other` must be k × n; the result is m × n.
    /// Output rows are split across threads.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.columns != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "matmul",
                left: self.shape(),
                right: other.shape(),
            });
        }

        let (m, k, n) = (self.rows, self.columns, other.columns);
        debug!("matmul {}x{} * {}x{}", m, k, k, n);

        let mut result = Matrix::zeros(m, n);
        let (a, b) = (self.as_slice(), other.as_slice());

        split::run_mut(m, &mut result.data, |start, end, chunk| {
            matmul_naive_ijk(a, b, chunk, n, k, start, end);
        });
        Ok(result)
    }
}
