//! Error types for the dispatch core.
//!
//! Link parsing is optional-safe and never fails; errors originate only at
//! the UI boundary (room/club joins, profile and event lookups). Lookup
//! failures on show-style calls are best-effort and swallowed by handlers;
//! join failures abort the dispatch attempt without touching the postponed
//! flag.

use thiserror::Error;

/// Failure reported by a [`crate::UiEvents`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A remote lookup (profile, event, room, club) failed.
    #[error("lookup failed for {entity} `{id}`: {reason}")]
    Lookup {
        /// What was being looked up.
        entity: &'static str,
        /// Identifier that was looked up.
        id: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The UI surface cannot be presented right now.
    #[error("ui surface unavailable: {0}")]
    Unavailable(String),
}

/// Error aborting a single dispatch attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A UI boundary call failed.
    #[error(transparent)]
    Ui(#[from] UiError),
}
