//! A small dense matrix with per-operation multi-threading.
//!
//! [`Matrix<T>`] is a row-major 2D container that owns one flat buffer. It
//! covers construction, indexing, reshaping, transpose, elementwise
//! arithmetic, scalar scaling and matrix multiplication. Anything that scales
//! with the element or row count is split across all cores on fresh scoped
//! threads, and every call joins before it returns.
//!
//! ## Usage
//!
//! ```
//! use rmatrix::Matrix;
//!
//! let m = Matrix::from(vec![0.1f32, 0., 0., 0., 1., 1., 1., 0., 1., 1., 1., 0.])
//!     .resize(4)?;
//! let gram = m.matmul(&m.transpose())?;
//!
//! assert_eq!(gram.shape(), (4, 4));
//! assert_eq!(gram[(1, 1)], 2.0);
//! # Ok::<(), rmatrix::MatrixError>(())
//! ```
//!
//! Contract violations come back as [`MatrixError`]. The `std::ops` operator
//! impls (`+`, `-`, `*`, `/` and their assigning forms) panic instead:
//!
//! ```
//! use rmatrix::{Init, Matrix};
//!
//! let a = Matrix::<f64>::new(3, 3, Init::Random);
//! let b = Matrix::<f64>::identity(3, 3);
//!
//! let c = &(&a + &b) - &b;
//! let scaled = &c * 2.0;
//! assert_eq!(scaled.shape(), (3, 3));
//! ```
//!
//! ## What's inside
//!
//! - `matrix`: the container, the i-j-k and transpose kernels, rendering
//! - `threaded`: the fan-out/join work splitter
//! - `activation`: sigmoid and ReLU

pub mod activation;
pub mod error;
pub mod matrix;
pub mod threaded;

pub use error::{MatrixError, Result};
pub use matrix::{Element, Init, Matrix};
