//! Scalar activation functions.
//!
//! Plain functions, meant to be passed to [`Matrix::map`](crate::Matrix::map)
//! or [`Matrix::apply`](crate::Matrix::apply).

/// Logistic function `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `max(0, x)`
pub fn relu(x: f64) -> f64 {
    x.max(0.0)
}

/// Single-precision [`sigmoid`].
pub fn sigmoidf(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Single-precision [`relu`].
pub fn reluf(x: f32) -> f32 {
    x.max(0.0)
}
