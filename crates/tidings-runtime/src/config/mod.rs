//! Configuration module for the Tidings runtime.
//!
//! This module provides layered configuration loading and validation for
//! logging and dispatch settings.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile};
pub use schema::{
    LogFormat, LogLevel, LogOutput, LogRotation, LoggingConfig, SpanEventConfig, TidingsConfig,
};
pub use validation::validate_config;
