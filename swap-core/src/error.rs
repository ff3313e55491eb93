//! # Common Error Types
//!
//! Centralized error handling for the swap application.
//!
//! Every variant is recovered locally: each one maps to a single user
//! notice and a rollback to an interactable state (`Disconnected` for
//! connection errors, `Idle` for submission errors). Nothing here is
//! retried automatically and nothing is fatal to the session.

use thiserror::Error;

use crate::notice::Notice;

/// Application-wide error type covering every failure path in the
/// connect and swap flows.
///
/// - **ProviderUnavailable**: no wallet extension is injected into the host
/// - **ConnectionRejected**: the user declined, or the provider errored,
///   while the connect request was pending
/// - **NotAuthorized**: a swap was submitted without a connected session
/// - **InvalidAmount**: the typed amount could not be converted to base units
/// - **SubmissionFailed**: the provider rejected or errored on the send
/// - **SubmissionInFlight**: a second submit arrived while one was pending;
///   this is a guard outcome, not a user-visible failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("No wallet detected. Install a browser wallet extension to continue.")]
    ProviderUnavailable,

    #[error("Wallet connection rejected: {0}")]
    ConnectionRejected(String),

    #[error("Connect a wallet before swapping")]
    NotAuthorized,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Swap failed: {0}")]
    SubmissionFailed(String),

    #[error("A swap is already in flight")]
    SubmissionInFlight,
}

impl AppError {
    /// Errors that reject a call as a no-op rather than a failure.
    /// The UI drops these instead of surfacing a notice.
    pub fn is_silent(&self) -> bool {
        matches!(self, AppError::SubmissionInFlight)
    }

    /// The user-facing notice for this error.
    pub fn notice(&self) -> Notice {
        Notice::error(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_distinct() {
        let errors = [
            AppError::ProviderUnavailable,
            AppError::ConnectionRejected("user denied".to_string()),
            AppError::NotAuthorized,
            AppError::InvalidAmount("abc".to_string()),
            AppError::SubmissionFailed("user denied signing".to_string()),
            AppError::SubmissionInFlight,
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in errors.iter().skip(i + 1) {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }

    #[test]
    fn test_only_duplicate_submit_is_silent() {
        assert!(AppError::SubmissionInFlight.is_silent());
        assert!(!AppError::NotAuthorized.is_silent());
        assert!(!AppError::ProviderUnavailable.is_silent());
    }
}
