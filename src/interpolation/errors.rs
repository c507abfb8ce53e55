//! Interpolation error types.
//!
//! ┌ [`ErrorKind::InvalidInput`]   : malformed samples or parameters
//! │   ├ empty or unequal-length inputs
//! │   ├ non-finite values
//! │   ├ duplicate x-values (after sorting)
//! │   └ negative / non-finite step, center outside the table
//! │
//! └ [`ErrorKind::DivisionByZero`] : zero step passed to the Gauss formula
//!
//! Queries outside the sample span are not errors. Batch runs count them in
//! [`crate::interpolation::report::InterpolationReport::n_extrapolated`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 },

    #[error("step size h is zero")]
    DivisionByZero,

    #[error("invalid step size {got}: must be finite and > 0")]
    InvalidStep { got: f64 },

    #[error("center index {center} out of range for table of {n} samples")]
    CenterOutOfRange { center: usize, n: usize },
}

/// Coarse classification of [`InterpolationError`] variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    DivisionByZero,
}

impl InterpolationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InterpolationError::DivisionByZero => ErrorKind::DivisionByZero,
            _ => ErrorKind::InvalidInput,
        }
    }
}
