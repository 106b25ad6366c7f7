//! Infrastructure layer: configuration loading and persistence.

/// Application configuration.
pub mod config;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigNotice, LogLevel, StorageManager};
