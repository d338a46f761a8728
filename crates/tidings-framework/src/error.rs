//! Error types for the Tidings framework.

use thiserror::Error;

use tidings_core::ApiError;

/// Errors surfaced by [`Handler::handle`](crate::Handler::handle).
#[derive(Debug, Error)]
pub enum HandleError {
    /// `handle` was called for an update that carries no callback query.
    ///
    /// This is caller misuse: the dispatch loop must only call `handle`
    /// after `check` returned `true`.
    #[error("update {update_id} reached a callback query handler without a callback query")]
    MissingCallbackQuery {
        /// The offending update.
        update_id: i64,
    },

    /// The user handler failed. The original error is kept untouched.
    #[error(transparent)]
    Handler(anyhow::Error),

    /// The acknowledgment call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HandleError {
    /// Returns `true` if the error was caused by the dispatch loop breaking
    /// the check-before-handle contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::MissingCallbackQuery { .. })
    }
}

/// Result type for handler operations.
pub type HandleResult<T> = Result<T, HandleError>;
