//! The dense row-major [`Matrix`] container.
//!
//! Storage is a single owned `Vec<T>` of length `rows * columns`; element
//! `(r, c)` lives at `data[r * columns + c]`. Operations whose cost grows with
//! the element or row count are spread over all cores via
//! [`threaded::split`](crate::threaded::split).

pub mod display;
pub mod element;
pub mod naive_ijk;
pub mod ops;
pub mod transpose;

use std::ops::{Index, IndexMut};

use log::debug;
use rand::Rng;
use rand::distributions::{Distribution, Uniform};

pub use element::Element;

use crate::error::{Axis, MatrixError, Result};

/// How a freshly allocated matrix is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// Every element is zero.
    #[default]
    Zero,
    /// Independent uniform draws from `[T::random_low(), 1]`.
    Random,
    /// Ones on the main diagonal, zeros elsewhere.
    Identity,
}

/// Dense row-major matrix that exclusively owns its storage.
///
/// The shape is fixed at construction; [`set_rows`](Self::set_rows) and
/// [`set_columns`](Self::set_columns) only reinterpret the same elements.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    data: Vec<T>,
}

impl<T: Element> Matrix<T> {
    /// Allocates a `rows × columns` matrix filled according to `init`.
    pub fn new(rows: usize, columns: usize, init: Init) -> Self {
        match init {
            Init::Zero => Self::zeros(rows, columns),
            Init::Random => Self::random(rows, columns),
            Init::Identity => Self::identity(rows, columns),
        }
    }

    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![T::zero(); rows * columns],
        }
    }

    /// Random matrix drawn from a fresh thread-local generator.
    ///
    /// Values are uniform in `[0, 1]` for unsigned element types and in
    /// `[-1, 1]` otherwise. Use [`random_with`](Self::random_with) when the
    /// result has to be reproducible.
    pub fn random(rows: usize, columns: usize) -> Self {
        Self::random_with(rows, columns, &mut rand::thread_rng())
    }

    /// Random matrix drawn from the caller's generator.
    pub fn random_with<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Self {
        debug!("random {}x{} matrix", rows, columns);

        let dist = Uniform::<T>::new_inclusive(T::random_low(), T::one());
        let data = dist.sample_iter(&mut *rng).take(rows * columns).collect();
        Self {
            rows,
            columns,
            data,
        }
    }

    /// Ones at `(i, i)` for `i < min(rows, columns)`, zeros elsewhere.
    pub fn identity(rows: usize, columns: usize) -> Self {
        let mut m = Self::zeros(rows, columns);
        for i in 0..rows.min(columns) {
            m.data[i * columns + i] = T::one();
        }
        m
    }

    /// A `1 × values.len()` matrix holding `values` in order.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self {
            rows: 1,
            columns: values.len(),
            data: values,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The row-major backing storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Element at `(row, column)`.
    ///
    /// Fails with [`MatrixError::OutOfBounds`] when either index is past the
    /// current shape.
    pub fn at(&self, row: usize, column: usize) -> Result<&T> {
        let idx = self.offset(row, column)?;
        Ok(&self.data[idx])
    }

    /// Mutable element at `(row, column)`.
    pub fn at_mut(&mut self, row: usize, column: usize) -> Result<&mut T> {
        let idx = self.offset(row, column)?;
        Ok(&mut self.data[idx])
    }

    /// Reinterprets the storage as `rows × (len / rows)` without moving any
    /// element.
    ///
    /// `rows` must be non-zero and evenly divide [`len`](Self::len), otherwise
    /// this fails with [`MatrixError::InvalidReshape`] and the shape is left
    /// untouched.
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        let columns = self.reshape_quotient(Axis::Rows, rows)?;
        debug!("reshape {}x{} -> {}x{}", self.rows, self.columns, rows, columns);
        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Column counterpart of [`set_rows`](Self::set_rows).
    pub fn set_columns(&mut self, columns: usize) -> Result<()> {
        let rows = self.reshape_quotient(Axis::Columns, columns)?;
        debug!("reshape {}x{} -> {}x{}", self.rows, self.columns, rows, columns);
        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Copy of this matrix reshaped to `rows` rows.
    pub fn resize(&self, rows: usize) -> Result<Self> {
        self.reshape_quotient(Axis::Rows, rows)?;
        let mut resized = self.clone();
        resized.set_rows(rows)?;
        Ok(resized)
    }

    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Moves the contents out, leaving `self` as an empty 0×0 matrix.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize> {
        if row >= self.rows || column >= self.columns {
            return Err(MatrixError::OutOfBounds {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(row * self.columns + column)
    }

    fn reshape_quotient(&self, axis: Axis, requested: usize) -> Result<usize> {
        let count = self.data.len();
        if requested == 0 || requested > count || count % requested != 0 {
            return Err(MatrixError::InvalidReshape {
                axis,
                requested,
                count,
            });
        }
        Ok(count / requested)
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            data: Vec::new(),
        }
    }
}

impl<T: Element> From<Vec<T>> for Matrix<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_vec(values)
    }
}

impl<T: Element> From<&[T]> for Matrix<T> {
    fn from(values: &[T]) -> Self {
        Self::from_vec(values.to_vec())
    }
}

impl<T: Element> FromIterator<T> for Matrix<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// # Panics
///
/// Panics if the index is out of bounds; use [`Matrix::at`] to get an error
/// instead.
impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        match self.at(row, column) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        match self.at_mut(row, column) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}
