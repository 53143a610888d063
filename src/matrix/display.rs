//! Human-readable rendering of a matrix window.

use std::fmt;

use super::{Element, Matrix};

/// Rows and columns shown by [`Matrix::print`]'s defaults and by `Display`.
pub const DEFAULT_WINDOW: usize = 10;

impl<T: Element> Matrix<T> {
    /// Renders at most `max_rows × max_columns` elements.
    ///
    /// The header states the full shape. Every displayed cell is
    /// right-aligned to the widest displayed cell and followed by a space.
    /// A truncation line closes the output when the matrix does not fit the
    /// window.
    ///
    /// ```
    /// use rmatrix::Matrix;
    ///
    /// let m = Matrix::from(vec![1, 20, 3, 4]).resize(2).unwrap();
    /// assert_eq!(m.render(10, 10), "Matrix (2, 2):\n 1 20 \n 3  4 \n");
    /// assert_eq!(m.render(1, 10), "Matrix (2, 2):\n 1 20 \n... (matrix truncated)\n");
    /// ```
    pub fn render(&self, max_rows: usize, max_columns: usize) -> String {
        let shown_rows = self.rows.min(max_rows);
        let shown_columns = self.columns.min(max_columns);

        let cells: Vec<Vec<String>> = (0..shown_rows)
            .map(|i| {
                let row = &self.data[i * self.columns..i * self.columns + shown_columns];
                row.iter().map(|v| v.to_string()).collect()
            })
            .collect();
        let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

        let mut out = format!("Matrix ({}, {}):\n", self.rows, self.columns);
        for row in &cells {
            for cell in row {
                out.push_str(&format!("{:>width$} ", cell, width = width));
            }
            out.push('\n');
        }

        if self.rows > max_rows || self.columns > max_columns {
            out.push_str("... (matrix truncated)\n");
        }
        out
    }

    /// Writes [`render`](Self::render) to stdout.
    pub fn print(&self, max_rows: usize, max_columns: usize) {
        print!("{}", self.render(max_rows, max_columns));
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_WINDOW, DEFAULT_WINDOW))
    }
}
