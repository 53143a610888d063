//! Elementwise arithmetic, scalar scaling and the operator traits.
//!
//! The `try_*`/`checked_*` methods report contract violations as
//! [`MatrixError`]; the `std::ops` impls panic with the same message.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use super::{Element, Matrix};
use crate::error::{MatrixError, Result};
use crate::threaded::split;

impl<T: Element> Matrix<T> {
    /// `self += other`, elementwise.
    pub fn try_add_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.check_same_shape("add", other)?;
        self.zip_apply(other, |dst, src| *dst += src);
        Ok(())
    }

    /// `self -= other`, elementwise.
    pub fn try_sub_assign(&mut self, other: &Matrix<T>) -> Result<()> {
        self.check_same_shape("sub", other)?;
        self.zip_apply(other, |dst, src| *dst -= src);
        Ok(())
    }

    /// Multiplies every element by `scalar` in place.
    pub fn scale(&mut self, scalar: T) {
        self.apply(|v| v * scalar);
    }

    /// Divides every element by `scalar` in place.
    ///
    /// Fails with [`MatrixError::DivideByZero`] (leaving `self` untouched)
    /// when `scalar` is zero.
    pub fn try_div_assign(&mut self, scalar: T) -> Result<()> {
        if scalar == T::zero() {
            return Err(MatrixError::DivideByZero);
        }
        self.apply(|v| v / scalar);
        Ok(())
    }

    pub fn checked_add(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let mut result = self.clone();
        result.try_add_assign(other)?;
        Ok(result)
    }

    pub fn checked_sub(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        let mut result = self.clone();
        result.try_sub_assign(other)?;
        Ok(result)
    }

    pub fn scaled(&self, scalar: T) -> Matrix<T> {
        let mut result = self.clone();
        result.scale(scalar);
        result
    }

    pub fn checked_div(&self, scalar: T) -> Result<Matrix<T>> {
        let mut result = self.clone();
        result.try_div_assign(scalar)?;
        Ok(result)
    }

    /// Replaces every element `v` with `f(v)`, in parallel.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T + Sync,
    {
        let len = self.data.len();
        split::run_mut(len, &mut self.data, |_, _, chunk| {
            for v in chunk.iter_mut() {
                *v = f(*v);
            }
        });
    }

    /// New matrix of the same shape holding `f(v)` for every element `v`.
    ///
    /// ```
    /// use rmatrix::{Matrix, activation::relu};
    ///
    /// let m = Matrix::from(vec![-2.0, 0.5, 3.0]);
    /// assert_eq!(m.map(relu).as_slice(), &[0.0, 0.5, 3.0]);
    /// ```
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T + Sync,
    {
        let mut result = self.clone();
        result.apply(f);
        result
    }

    fn zip_apply<F>(&mut self, other: &Matrix<T>, f: F)
    where
        F: Fn(&mut T, T) + Sync,
    {
        let len = self.data.len();
        let src = other.as_slice();
        split::run_mut(len, &mut self.data, |start, end, chunk| {
            for (dst, &s) in chunk.iter_mut().zip(&src[start..end]) {
                f(dst, s);
            }
        });
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix<T>) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(())
    }
}

fn unwrap_or_panic<V>(result: Result<V>) -> V {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{}", err),
    }
}

/// # Panics
///
/// Panics on a shape mismatch; see [`Matrix::try_add_assign`].
impl<T: Element> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, other: &Matrix<T>) {
        unwrap_or_panic(self.try_add_assign(other));
    }
}

/// # Panics
///
/// Panics on a shape mismatch; see [`Matrix::try_sub_assign`].
impl<T: Element> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, other: &Matrix<T>) {
        unwrap_or_panic(self.try_sub_assign(other));
    }
}

impl<T: Element> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, scalar: T) {
        self.scale(scalar);
    }
}

/// # Panics
///
/// Panics when dividing by zero; see [`Matrix::try_div_assign`].
impl<T: Element> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, scalar: T) {
        unwrap_or_panic(self.try_div_assign(scalar));
    }
}

impl<T: Element> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, other: Self) -> Matrix<T> {
        unwrap_or_panic(self.checked_add(other))
    }
}

impl<T: Element> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, other: Self) -> Matrix<T> {
        unwrap_or_panic(self.checked_sub(other))
    }
}

impl<T: Element> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, scalar: T) -> Matrix<T> {
        self.scaled(scalar)
    }
}

impl<T: Element> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, scalar: T) -> Matrix<T> {
        unwrap_or_panic(self.checked_div(scalar))
    }
}

/// Matrix product.
///
/// # Panics
///
/// Panics if the inner dimensions differ; see [`Matrix::matmul`].
impl<T: Element> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, other: Self) -> Matrix<T> {
        unwrap_or_panic(self.matmul(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: usize, values: Vec<f64>) -> Matrix<f64> {
        Matrix::from(values).resize(rows).unwrap()
    }

    #[test]
    fn test_add_sub_in_place() {
        let mut a = grid(2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = grid(2, vec![0.5, 0.5, 0.5, 0.5]);

        a.try_add_assign(&b).unwrap();
        assert_eq!(a.as_slice(), &[1.5, 2.5, 3.5, 4.5]);

        a -= &b;
        a -= &b;
        assert_eq!(a.as_slice(), &[0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 2);

        assert_eq!(
            a.try_add_assign(&b),
            Err(MatrixError::DimensionMismatch {
                op: "add",
                left: (2, 3),
                right: (3, 2),
            })
        );
        assert!(a.checked_sub(&b).is_err());
        assert!(a.try_sub_assign(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "incompatible shapes")]
    fn test_add_operator_panics() {
        let a = Matrix::<f64>::zeros(1, 3);
        let b = Matrix::<f64>::zeros(3, 1);
        let _sum = &a + &b;
    }

    #[test]
    fn test_binary_operators_leave_operands() {
        let a = grid(2, vec![1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::<f64>::identity(2, 2);

        let sum = &a + &b;
        let diff = &a - &b;
        assert_eq!(sum.as_slice(), &[2.0, 2.0, 3.0, 5.0]);
        assert_eq!(diff.as_slice(), &[0.0, 2.0, 3.0, 3.0]);
        assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_scale_and_divide() {
        let mut m = grid(2, vec![1.0, -2.0, 4.0, 8.0]);
        m *= 2.0;
        assert_eq!(m.as_slice(), &[2.0, -4.0, 8.0, 16.0]);

        m /= 4.0;
        assert_eq!(m.as_slice(), &[0.5, -1.0, 2.0, 4.0]);

        let scaled = &m * 10.0;
        let halved = &m / 2.0;
        assert_eq!(scaled.as_slice(), &[5.0, -10.0, 20.0, 40.0]);
        assert_eq!(halved.as_slice(), &[0.25, -0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_divide_by_zero() {
        let mut m = Matrix::<f64>::identity(3, 3);
        assert_eq!(m.try_div_assign(0.0), Err(MatrixError::DivideByZero));
        assert_eq!(m, Matrix::identity(3, 3));

        let ints = Matrix::<i32>::identity(2, 2);
        assert_eq!(ints.checked_div(0), Err(MatrixError::DivideByZero));
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_divide_operator_panics() {
        let m = Matrix::<u32>::identity(2, 2);
        let _q = &m / 0;
    }

    #[test]
    fn test_integer_arithmetic() {
        let mut m: Matrix<u16> = (1..=6).collect();
        m.scale(3);
        assert_eq!(m.as_slice(), &[3, 6, 9, 12, 15, 18]);
        m.try_div_assign(3).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_matmul_operator() {
        let a = grid(2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = grid(3, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = &a * &b;
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_map_and_apply() {
        let m = grid(2, vec![1.0, 2.0, 3.0, 4.0]);
        let squared = m.map(|v| v * v);
        assert_eq!(squared.shape(), (2, 2));
        assert_eq!(squared.as_slice(), &[1.0, 4.0, 9.0, 16.0]);

        let mut n = m.clone();
        n.apply(|v| -v);
        assert_eq!(n.as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_large_elementwise() {
        let a = Matrix::<f64>::random(123, 77);
        let b = Matrix::<f64>::random(123, 77);
        let sum = a.checked_add(&b).unwrap();
        for (i, &v) in sum.as_slice().iter().enumerate() {
            assert_eq!(v, a.as_slice()[i] + b.as_slice()[i]);
        }
    }
}
