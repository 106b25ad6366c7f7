//! Application configuration.

/// Configuration model.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Config file loading.
pub mod storage;

pub use app_config::{AppConfig, KioskConfig, LogLevel, ThemeConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigNotice, StorageManager};
