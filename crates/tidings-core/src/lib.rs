//! # Tidings Core
//!
//! The core types of the Tidings bot framework.
//!
//! This crate holds the pieces every other layer agrees on:
//!
//! - **Update model**: inbound platform events ([`Update`], [`CallbackQuery`])
//! - **API requests**: outbound request records ([`AnswerCallbackQuery`])
//! - **Bot capability**: the [`Bot`] trait implemented by platform API clients
//! - **Errors**: [`ApiError`] and the [`ApiResult`] alias
//!
//! ```text
//! ┌──────────────┐     ┌────────────┐     ┌───────────┐
//! │ update feed  │────▶│ Dispatcher │────▶│  Handler  │
//! └──────────────┘     └────────────┘     └─────┬─────┘
//!                                               │ answer_callback_query
//!                                         ┌─────▼─────┐
//!                                         │    Bot    │
//!                                         └───────────┘
//! ```

pub mod api;
pub mod bot;
pub mod error;
pub mod update;

pub use api::AnswerCallbackQuery;
pub use bot::{Bot, BoxedBot};
pub use error::{ApiError, ApiResult};
pub use update::{CallbackQuery, Chat, Message, Update, User};
