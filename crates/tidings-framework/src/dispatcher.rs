//! Update dispatcher for the Tidings framework.
//!
//! This module provides the [`Dispatcher`], which receives updates and
//! distributes them to registered handlers.
//!
//! When an update is dispatched:
//!
//! 1. Handlers are checked in registration order
//! 2. For each handler whose check passes, `handle` is awaited
//! 3. A failing handler is logged and counted; the next handlers still run
//! 4. With `stop_on_first_match`, dispatch ends after the first match
//!
//! ```rust,ignore
//! use tidings_framework::{Dispatcher, on_callback_data, on_callback_query};
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.add(on_callback_data("vote", vote));
//! dispatcher.add(on_callback_query(fallback));
//!
//! let report = dispatcher.dispatch(update, bot).await;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{Instrument, Level, debug, error, span, trace};

use crate::handler::{BoxedHandler, Handler};
use tidings_core::{BoxedBot, Update};

/// Dispatcher settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    /// Stop after the first handler whose check passed.
    #[serde(default)]
    pub stop_on_first_match: bool,
}

/// Outcome of dispatching one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Handlers whose check passed.
    pub matched: usize,
    /// Matched handlers whose `handle` returned an error.
    pub failed: usize,
}

impl DispatchReport {
    /// Returns true if any handler took the update.
    pub fn any_matched(&self) -> bool {
        self.matched > 0
    }
}

/// The central update dispatcher.
///
/// # Thread Safety
///
/// `Dispatcher` is `Send + Sync` and can be shared across tasks; each
/// `dispatch` call works on its own update.
#[derive(Default, Clone)]
pub struct Dispatcher {
    handlers: Vec<BoxedHandler>,
    config: DispatcherConfig,
}

impl Dispatcher {
    /// Creates a new, empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty dispatcher with the given settings.
    pub fn with_config(config: DispatcherConfig) -> Self {
        Self {
            handlers: Vec::new(),
            config,
        }
    }

    /// Adds a handler. Handlers are checked in the order they are added.
    pub fn add<H: Handler>(&mut self, handler: H) {
        self.handlers.push(Arc::new(handler));
    }

    /// Adds a pre-built boxed handler.
    pub fn add_boxed(&mut self, handler: BoxedHandler) {
        self.handlers.push(handler);
    }

    /// Adds a handler (builder pattern).
    pub fn with<H: Handler>(mut self, handler: H) -> Self {
        self.add(handler);
        self
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Clears all registered handlers.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }

    /// Returns the active settings.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Dispatches an update to the registered handlers.
    pub async fn dispatch(&self, update: impl Into<Arc<Update>>, bot: BoxedBot) -> DispatchReport {
        let update = update.into();
        let span = span!(
            Level::DEBUG,
            "dispatch",
            update_id = update.update_id,
            kind = update.kind()
        );

        self.run(update, bot).instrument(span).await
    }

    async fn run(&self, update: Arc<Update>, bot: BoxedBot) -> DispatchReport {
        let mut report = DispatchReport::default();

        for handler in &self.handlers {
            if !handler.check(&update) {
                trace!(handler = handler.name(), "Handler did not match, skipping");
                continue;
            }

            report.matched += 1;
            debug!(handler = handler.name(), "Handler matched, handling update");

            if let Err(e) = handler.handle(Arc::clone(&bot), Arc::clone(&update)).await {
                report.failed += 1;
                error!(handler = handler.name(), error = %e, "Handler failed");
            }

            if self.config.stop_on_first_match {
                debug!(handler = handler.name(), "Stopping dispatch after first match");
                break;
            }
        }

        report
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handler_count", &self.handlers.len())
            .field("config", &self.config)
            .finish()
    }
}
