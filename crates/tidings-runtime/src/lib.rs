//! Tidings Runtime - configuration and logging for the Tidings bot framework.
//!
//! This crate provides:
//! - Layered configuration loading (`ConfigLoader`, `TidingsConfig`)
//! - Logging setup (`LoggingBuilder`)
//! - A runtime that wires both to a [`Dispatcher`](tidings_framework::Dispatcher)
//!   (`TidingsRuntime`)

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

pub use config::{ConfigError, ConfigLoader, ConfigResult, LoggingConfig, Profile, TidingsConfig};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{LoggingBuilder, SpanEvents};
pub use runtime::TidingsRuntime;

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
