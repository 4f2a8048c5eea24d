use thiserror::Error;

/// Problems with the `n` followed by `n` integers input format.
///
/// `index` is the position of a value in input order, starting at 0.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty, expected a value count")]
    MissingCount,

    #[error("value count {0:?} is not an integer")]
    InvalidCount(String),

    #[error("value count {0} is negative")]
    NegativeCount(i64),

    #[error("{requested} values requested but the buffer holds at most {capacity}")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error("expected {expected} values, input ended after {index}")]
    MissingValue { index: usize, expected: usize },

    #[error("value #{index} ({token:?}) is not a 32-bit integer")]
    InvalidValue { index: usize, token: String },
}
