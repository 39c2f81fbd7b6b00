//! Core error types (deterministic only)

use core::fmt;

/// Core errors (no I/O, no external failures)
///
/// The separator rule itself never fails; these come from misuse of the
/// string cursor's suppression bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Leaving a context that is not open
    ContextNotEntered {
        /// Name passed to `leave_context`
        name: String,
    },
    /// Suppressed range whose start lies after its end
    InvalidRange {
        /// Range start (byte offset)
        start: usize,
        /// Range end (byte offset)
        end: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::ContextNotEntered { name } => {
                write!(f, "context '{name}' was never entered")
            }
            CoreError::InvalidRange { start, end } => {
                write!(f, "invalid suppressed range {start}..{end}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_not_entered_display() {
        let error = CoreError::ContextNotEntered {
            name: "code".to_string(),
        };
        assert_eq!(error.to_string(), "context 'code' was never entered");
    }

    #[test]
    fn test_is_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(CoreError::InvalidRange { start: 2, end: 1 });
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "invalid suppressed range 2..1");
    }

    #[test]
    fn test_invalid_range_display() {
        let error = CoreError::InvalidRange { start: 9, end: 3 };
        assert_eq!(error.to_string(), "invalid suppressed range 9..3");
    }
}
