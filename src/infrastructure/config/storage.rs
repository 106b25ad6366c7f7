use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "kiosk";
const APP_NAME: &str = "kiosk";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform config directory.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Reading or writing the file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The default config could not be serialized.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Something worth reporting about how the configuration was obtained.
///
/// Config is loaded before logging is up, so the caller logs it afterwards.
#[derive(Debug)]
pub enum ConfigNotice {
    /// No file existed, so defaults were written.
    CreatedDefault {
        /// Where the file was written.
        path: PathBuf,
    },
    /// The file was unreadable as TOML; defaults are in use.
    ParseFailed {
        /// The offending file.
        path: PathBuf,
        /// What the parser rejected.
        error: toml::de::Error,
    },
}

impl ConfigNotice {
    /// Emits the notice through `tracing`.
    pub fn log(&self) {
        match self {
            Self::CreatedDefault { path } => {
                info!(path = %path.display(), "Config file not found, created default");
            }
            Self::ParseFailed { path, error } => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse config file, using defaults"
                );
            }
        }
    }
}

/// Locates and loads `config.toml`.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Directory holding `config.toml`.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration, writing defaults on first run.
    ///
    /// A file that fails to parse is left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, Option<ConfigNotice>), ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            let notice = ConfigNotice::CreatedDefault { path: config_path };
            return Ok((default_config, Some(notice)));
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok((config, None)),
            Err(error) => {
                let notice = ConfigNotice::ParseFailed {
                    path: config_path,
                    error,
                };
                Ok((AppConfig::default(), Some(notice)))
            }
        }
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::with_dir(dir.path().join("nested"));

        let (config, notice) = storage.load_config(None).unwrap();

        assert_eq!(config.kiosk.tax_rate, dec!(0.05));
        assert!(storage.config_dir().join(CONFIG_FILE_NAME).exists());
        assert!(matches!(
            notice,
            Some(ConfigNotice::CreatedDefault { path }) if path.ends_with(CONFIG_FILE_NAME)
        ));
    }

    #[test]
    fn test_reads_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[kiosk]\nnotification_dismiss_ms = 1000\n").unwrap();

        let (config, notice) = StorageManager::with_dir(dir.path().to_path_buf())
            .load_config(Some(&path))
            .unwrap();

        assert!(notice.is_none());
        assert_eq!(config.kiosk.notification_dismiss_ms, 1000);
        assert_eq!(config.kiosk.processing_delay_ms, 2000);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "kiosk = [not valid").unwrap();

        let (config, notice) = StorageManager::with_dir(dir.path().to_path_buf())
            .load_config(None)
            .unwrap();

        assert!(config.mouse);
        match notice {
            Some(ConfigNotice::ParseFailed { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a parse failure notice, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "kiosk = [not valid");
    }
}
