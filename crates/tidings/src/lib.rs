//! # Tidings
//!
//! Callback query routing for chat-platform bots.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌──────────────────────┐
//! │ update feed  │────▶│ Dispatcher │────▶│ CallbackQueryHandler │──▶ user function
//! │ (your code)  │     │            │────▶│ CallbackQueryHandler │
//! └──────────────┘     └────────────┘     └──────────┬───────────┘
//!                                                    │ answerCallbackQuery
//!                                               ┌────▼────┐
//!                                               │   Bot   │
//!                                               └─────────┘
//! ```
//!
//! - **Runtime**: Loads configuration, sets up logging, owns the dispatcher
//! - **Dispatcher**: Checks handlers in registration order
//! - **Handlers**: Match an update and process it
//! - **Bot**: Your platform API client, implementing [`core::Bot`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tidings::prelude::*;
//!
//! async fn vote(env: CallbackQueryHandlerEnvironment) -> anyhow::Result<CallbackQueryResponse> {
//!     let choice = env.args().next().unwrap_or("nothing");
//!     Ok(CallbackQueryResponse::new().text(format!("You voted {choice}")))
//! }
//!
//! let mut runtime = TidingsRuntime::load()?;
//! runtime.init_logging();
//! runtime.register(on_callback_data("vote", vote));
//! runtime.dispatch(update, bot).await;
//! ```
//!
//! ## Features
//!
//! - `toml-config`: TOML configuration files (default)
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output

pub use tidings_core as core;
pub use tidings_framework as framework;
pub use tidings_runtime as runtime;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tidings_runtime::TidingsRuntime;

    pub use tidings_framework::{
        CallbackQueryHandler, CallbackQueryHandlerEnvironment, CallbackQueryResponse, Dispatcher,
        HandleError, Handler, on_callback_data, on_callback_query,
    };

    pub use tidings_core::{Bot, BoxedBot, CallbackQuery, Update};
}
