//! Error types for heatstamp

use thiserror::Error;

/// Main error type for heatstamp operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Size mismatch: expected {expected} values, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("Out of memory: failed to allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Cancelled after {completed} points")]
    Cancelled { completed: usize },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid_argument(
        name: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Error::InvalidArgument {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a cooperative cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

/// Result type alias for heatstamp operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = Error::invalid_argument("radius", 0, "stamp radius must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid argument: radius = 0 (stamp radius must be at least 1)"
        );
        assert_eq!(
            Error::SizeMismatch { expected: 9, actual: 8 }.to_string(),
            "Size mismatch: expected 9 values, got 8"
        );
        assert_eq!(
            Error::NotFound("color scheme 'x'".into()).to_string(),
            "Not found: color scheme 'x'"
        );
    }

    #[test]
    fn only_cancellation_is_cancelled() {
        assert!(Error::Cancelled { completed: 3 }.is_cancelled());
        assert!(!Error::OutOfMemory { bytes: 64 }.is_cancelled());
        assert!(!Error::NotFound(String::new()).is_cancelled());
    }
}
