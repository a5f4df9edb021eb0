//! Error types produced by the core library.
//!
//! Both enums are cloneable and comparable so tests can assert on exact
//! variants. Config loading lives above this layer and reports through
//! `anyhow` with file context instead.

use thiserror::Error;

/// Errors raised by the collapse operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollapseError {
    /// The caller broke the input contract, e.g. passed an empty sequence.
    ///
    /// ```rust
    /// use runfold_core::{collapse, CollapseError};
    ///
    /// let err = collapse::<i32>(&[]).unwrap_err();
    /// assert!(matches!(err, CollapseError::InvalidArgument(_)));
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid argument: sequence must contain at least one element"
    /// );
    /// ```
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CollapseError {
    pub(crate) fn empty_sequence() -> Self {
        Self::InvalidArgument("sequence must contain at least one element".to_string())
    }
}

/// Errors raised while reading integers out of free-form text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A token was not a decimal integer that fits in `i64`.
    #[error("invalid integer '{token}' at position {position}")]
    InvalidInteger {
        token: String,
        /// 1-based index of the token in the input.
        position: usize,
    },
}
