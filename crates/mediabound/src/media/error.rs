//! Errors from building media blocks.

use thiserror::Error;

use crate::breakpoint::BreakpointError;

/// Error returned by [`MediaQuery::wrap`](super::MediaQuery::wrap).
#[derive(Debug, Error)]
pub enum MediaError {
    /// A bound could not be resolved against the breakpoint table
    #[error(transparent)]
    Breakpoint(#[from] BreakpointError),
    /// The block template failed to render
    #[error("failed to render media block: {0}")]
    Template(#[from] minijinja::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_error_is_transparent() {
        let err = MediaError::from(BreakpointError::UnknownBreakpointKey {
            key: "bogus".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "breakpoint 'bogus' is not defined in the breakpoint table"
        );
    }

    #[test]
    fn test_template_error_display() {
        let err = MediaError::from(minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "block",
        ));
        assert!(err.to_string().starts_with("failed to render media block"));
    }
}
