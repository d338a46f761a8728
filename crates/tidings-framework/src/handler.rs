//! The handler capability.
//!
//! Every routing unit implements [`Handler`]: a synchronous `check` that
//! classifies an update and an async `handle` that processes it. The
//! [`Dispatcher`](crate::Dispatcher) keeps handlers in registration order
//! and only calls `handle` after `check` passed.
//!
//! # Example
//!
//! ```rust,ignore
//! use tidings_framework::{Handler, HandleResult};
//!
//! struct LogEverything;
//!
//! #[async_trait]
//! impl Handler for LogEverything {
//!     fn check(&self, _update: &Update) -> bool {
//!         true
//!     }
//!
//!     async fn handle(&self, _bot: BoxedBot, update: Arc<Update>) -> HandleResult<()> {
//!         tracing::info!(update_id = update.update_id, "seen");
//!         Ok(())
//!     }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandleResult;
use tidings_core::{BoxedBot, Update};

/// A routing unit that decides whether it wants an update and processes it.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    /// Name used in log fields.
    fn name(&self) -> &str {
        "unnamed"
    }

    /// Returns `true` if this handler wants the update. Must be pure.
    fn check(&self, update: &Update) -> bool;

    /// Processes an update for which [`check`](Handler::check) returned `true`.
    async fn handle(&self, bot: BoxedBot, update: Arc<Update>) -> HandleResult<()>;
}

/// A type-erased handler that can be stored in collections.
pub type BoxedHandler = Arc<dyn Handler>;
