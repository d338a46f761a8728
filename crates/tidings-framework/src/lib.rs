//! # Tidings Framework
//!
//! Handler and dispatch components for building bot applications.
//!
//! This layer provides:
//! - The [`Handler`] capability (`check` + `handle`) held by the [`Dispatcher`]
//! - [`CallbackQueryHandler`], which matches callback queries by command and
//!   answers them with the user function's [`CallbackQueryResponse`]
//! - Convenience builders ([`on_callback_query`], [`on_callback_data`])
//! - Tower integration through [`HandlerService`]

pub mod builders;
pub mod callback_query;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod response;
pub mod service;

#[cfg(test)]
mod test_support;

pub use builders::{on_callback_data, on_callback_query};
pub use callback_query::{
    CallbackQueryHandler, CallbackQueryHandlerEnvironment, HandleCallbackQuery,
};
pub use dispatcher::{DispatchReport, Dispatcher, DispatcherConfig};
pub use error::{HandleError, HandleResult};
pub use handler::{BoxedHandler, Handler};
pub use response::{CallbackQueryResponse, IntoCallbackQueryResponse};
pub use service::{HandlerRequest, HandlerService};
