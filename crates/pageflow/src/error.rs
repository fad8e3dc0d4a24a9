//! Error types for pageflow.

use thiserror::Error;

/// Contract violations detected while building a walkthrough.
///
/// All of these are programmer errors in the integration, not runtime
/// data failures: setup either fully succeeds or the container is never
/// constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkthroughError {
    /// No dismissal handler was supplied.
    #[error("required dismissal handler not set")]
    MissingDismissHandler,

    /// Fewer than the minimum number of screen identifiers were supplied.
    #[error("walkthrough requires at least 3 screen identifiers, got {count}")]
    TooFewScreens { count: usize },

    /// The screen factory could not resolve an identifier.
    #[error("no screen can be resolved for identifier \"{identifier}\"")]
    UnresolvedScreen { identifier: String },
}

/// Result type for walkthrough construction.
pub type WalkthroughResult<T> = Result<T, WalkthroughError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_contract() {
        let err = WalkthroughError::TooFewScreens { count: 2 };
        assert!(err.to_string().contains("at least 3"));
        assert!(err.to_string().contains('2'));

        let err = WalkthroughError::UnresolvedScreen {
            identifier: "missing_screen".into(),
        };
        assert!(err.to_string().contains("missing_screen"));
    }
}
