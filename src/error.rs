//! Error type shared by every fallible matrix operation.

use thiserror::Error;

/// Contract violations raised by [`Matrix`](crate::Matrix) operations.
///
/// All of these are programming errors (bad indices, incompatible shapes),
/// not transient conditions. They are raised at the offending call and never
/// retried or replaced by a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("index ({row}, {column}) out of bounds for {rows}x{columns} matrix")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("cannot reshape {count} elements into {requested} {axis}")]
    InvalidReshape {
        axis: Axis,
        requested: usize,
        count: usize,
    },

    #[error("{op}: incompatible shapes {left:?} and {right:?}")]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("division by zero")]
    DivideByZero,
}

/// Which dimension a reshape targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Rows => f.write_str("rows"),
            Axis::Columns => f.write_str("columns"),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatrixError>;
