//! Client-side error types.

use thiserror::Error;

/// Result type for gateway/executor calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced from the external services.
///
/// All of these are recoverable view states, never fatal: the caller
/// re-renders an error or empty indicator and the next request starts
/// from scratch.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The query gateway refused or garbled a report query. `detail` is
    /// the server-supplied message when one came back, else a generic one.
    #[error("query failed: {detail}")]
    QueryFailed { detail: String },

    /// The migration executor refused the plan. All-or-nothing from this
    /// side; there is no partial-success state.
    #[error("migration failed: {detail}")]
    MigrationFailed { detail: String },

    /// Any other endpoint returned non-success.
    #[error("request failed ({status}): {detail}")]
    RequestFailed { status: u16, detail: String },

    /// Transport-level failure before any response arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    pub fn query_failed(detail: impl Into<String>) -> Self {
        Self::QueryFailed {
            detail: detail.into(),
        }
    }

    pub fn migration_failed(detail: impl Into<String>) -> Self {
        Self::MigrationFailed {
            detail: detail.into(),
        }
    }
}
