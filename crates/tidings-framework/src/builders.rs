//! Builder functions for common callback query handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use tidings_framework::{Dispatcher, on_callback_data, on_callback_query};
//!
//! let dispatcher = Dispatcher::new()
//!     .with(on_callback_data("settings", open_settings))
//!     .with(on_callback_query(|_env| async { "Unknown button" }));
//! ```

use std::future::Future;

use crate::callback_query::{CallbackQueryHandler, CallbackQueryHandlerEnvironment};
use crate::response::IntoCallbackQueryResponse;

/// Creates a handler for every callback query that carries data.
pub fn on_callback_query<F, Fut, R>(f: F) -> CallbackQueryHandler
where
    F: Fn(CallbackQueryHandlerEnvironment) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoCallbackQueryResponse + 'static,
{
    CallbackQueryHandler::new(f)
}

/// Creates a handler for callback queries whose first data token equals
/// `data`, ignoring case.
///
/// ```rust,ignore
/// // Matches "delete 17" and "DELETE 17", not "deleted" or "undelete"
/// let matcher = on_callback_data("delete", delete_item);
/// ```
pub fn on_callback_data<F, Fut, R>(data: impl Into<String>, f: F) -> CallbackQueryHandler
where
    F: Fn(CallbackQueryHandlerEnvironment) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoCallbackQueryResponse + 'static,
{
    CallbackQueryHandler::new(f).callback_data(data)
}
