use thiserror::Error;

/// User-facing message shared by every page error.
pub const GENERIC_ERROR_MESSAGE: &str = "Something is wrong";

/// Failure recorded by a source when a load does not produce a value.
///
/// Page errors are state values, never raised: a source that fails moves its
/// `LoadState` to `Failed(error)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// Unclassified failure.
    #[error("Something is wrong")]
    Generic,

    /// Failure reported by a remote call.
    #[error("Something is wrong")]
    ApiError {
        /// Reason reported by the remote side. Kept for logs, not shown.
        reason: String,
    },
}

impl PageError {
    /// Create an API error with the given reason.
    pub fn api(reason: impl Into<String>) -> Self {
        PageError::ApiError {
            reason: reason.into(),
        }
    }

    /// User-friendly message for display.
    ///
    /// Every variant maps to the same message; the API reason is not surfaced.
    pub fn description(&self) -> &'static str {
        match self {
            PageError::Generic => GENERIC_ERROR_MESSAGE,
            PageError::ApiError { .. } => GENERIC_ERROR_MESSAGE,
        }
    }

    /// Technical reason, if the error carries one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            PageError::Generic => None,
            PageError::ApiError { reason } => Some(reason),
        }
    }
}
