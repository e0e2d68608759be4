//! # Error Types
//!
//! This module defines the error type returned by every selection strategy.
//! Empty populations and zero-sized requests are not errors; they produce an
//! empty winners sequence. Errors are reserved for inputs on which a strategy
//! is undefined.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use genselect::error::{SelectionError, Result};
//!
//! fn winners_needed(offspring: i64) -> Result<usize> {
//!     genselect::selection::winners_count(offspring)
//! }
//!
//! assert_eq!(winners_needed(4).unwrap(), 4);
//! assert!(matches!(winners_needed(-1), Err(SelectionError::InvalidArgument(_))));
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use genselect::error::{SelectionError, OptionExt};
//!
//! fn first_weight(weights: &[f64]) -> genselect::error::Result<f64> {
//!     weights.first().copied().ok_or_else_selection(||
//!         SelectionError::InvalidWeights("no weights supplied".to_string())
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while selecting winners from a population.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The weight vector handed to proportionate selection is unusable: a
    /// negative or non-finite entry, or a total that is not positive.
    #[error("Invalid fitness weights for proportionate selection: {0}")]
    InvalidWeights(String),

    /// The caller violated an argument contract, e.g. a negative winner count.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error that occurs when a strategy is built with an invalid configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when NaN or infinity values are produced mid-computation.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),
}

/// A specialized Result type for selection operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `SelectionError`.
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use genselect::error::{SelectionError, OptionExt};
///
/// let population: Vec<u8> = Vec::new();
/// let result = population.get(0).ok_or_else_selection(|| {
///     SelectionError::InvalidArgument("index out of range".to_string())
/// });
/// assert!(result.is_err());
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, SelectionError>` using
    /// a closure to generate the error.
    fn ok_or_else_selection<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SelectionError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_selection<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> SelectionError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_weights_message() {
        let err = SelectionError::InvalidWeights("total weight is 0".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid fitness weights for proportionate selection: total weight is 0"
        );
    }

    #[test]
    fn test_option_ext() {
        let some: Option<u32> = Some(3);
        assert_eq!(
            some.ok_or_else_selection(|| SelectionError::Configuration("unused".to_string())),
            Ok(3)
        );

        let none: Option<u32> = None;
        let err = none
            .ok_or_else_selection(|| SelectionError::Configuration("missing".to_string()))
            .unwrap_err();
        assert_eq!(err, SelectionError::Configuration("missing".to_string()));
    }
}
