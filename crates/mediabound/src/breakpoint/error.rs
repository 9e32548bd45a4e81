//! Breakpoint resolution errors.

use thiserror::Error;

/// Error returned when a breakpoint reference cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointError {
    /// A named reference does not exist in the active table
    #[error("breakpoint '{key}' is not defined in the breakpoint table")]
    UnknownBreakpointKey { key: String },
    /// A table entry exists but does not hold a pixel value
    #[error("breakpoint '{key}' holds '{value}', which is not a valid pixel value")]
    InvalidBreakpointValue { key: String, value: String },
}

impl BreakpointError {
    /// The breakpoint name the error refers to.
    pub fn key(&self) -> &str {
        match self {
            BreakpointError::UnknownBreakpointKey { key }
            | BreakpointError::InvalidBreakpointValue { key, .. } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_error_display() {
        let err = BreakpointError::UnknownBreakpointKey {
            key: "bogus".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("bogus"));
        assert!(msg.contains("not defined"));
    }

    #[test]
    fn test_invalid_value_error_display() {
        let err = BreakpointError::InvalidBreakpointValue {
            key: "m".to_string(),
            value: "not-a-number".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'m'"));
        assert!(msg.contains("not-a-number"));
    }

    #[test]
    fn test_error_key() {
        let unknown = BreakpointError::UnknownBreakpointKey {
            key: "xl".to_string(),
        };
        let invalid = BreakpointError::InvalidBreakpointValue {
            key: "s".to_string(),
            value: "true".to_string(),
        };
        assert_eq!(unknown.key(), "xl");
        assert_eq!(invalid.key(), "s");
    }
}
