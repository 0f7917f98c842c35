//! Error type shared by all test functions

use thiserror::Error;

/// Errors raised while building or evaluating a test function
#[derive(Debug, Error)]
pub enum TestFunctionError {
    #[error("invalid dimension {0}: a test function needs at least one dimension")]
    InvalidDimension(usize),

    #[error("invalid domain: {actual} interval(s) given for a {expected}-dimensional function")]
    InvalidDomain { expected: usize, actual: usize },

    #[error("invalid bounds on axis {axis}: [{lower}, {upper}]")]
    InvalidBounds { axis: usize, lower: f64, upper: f64 },

    #[error("a polynomial needs at least one coefficient")]
    EmptyCoefficients,

    #[error("points have {actual} coordinate(s), function expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("grid of {n_per_dim} node(s) per axis in {dim} dimension(s) is too large")]
    GridTooLarge { n_per_dim: usize, dim: usize },

    #[error("unknown test function '{0}'")]
    UnknownFunction(String),

    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TestFunctionError>;
