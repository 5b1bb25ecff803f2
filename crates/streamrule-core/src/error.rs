//! Error types for streamrule.
//!
//! Failure to match is a `Verdict`, never an error. Errors exist only for
//! contract violations that can be rejected at construction time.

use thiserror::Error;

/// Error raised when building a constraint definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    /// A value-range constraint was built with `min > max`.
    #[error("value range bounds out of order: min > max")]
    ValueBoundsOutOfOrder,

    /// A count-window constraint was built with `max < min`.
    #[error("count bounds out of order: min {min} > max {max}")]
    CountBoundsOutOfOrder { min: usize, max: usize },
}

/// Result type alias for constraint construction.
pub type Result<T> = std::result::Result<T, ConstraintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConstraintError::CountBoundsOutOfOrder { min: 3, max: 1 }.to_string(),
            "count bounds out of order: min 3 > max 1"
        );
        assert_eq!(
            ConstraintError::ValueBoundsOutOfOrder.to_string(),
            "value range bounds out of order: min > max"
        );
    }
}
