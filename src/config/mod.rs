// src/config/mod.rs
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{debug, info, warn};

pub use schema::{Settings, OutputSettings};

use crate::error::{WordforgeError, WordforgeResult};

const DEFAULT_SETTINGS: &str = include_str!("../../config/default.toml");

/// Prefix for environment overrides, e.g. `WORDFORGE_GENERATION__MIN_LENGTH`
pub const ENV_PREFIX: &str = "WORDFORGE";

/// Centralized settings handling
impl Settings {
    /// Load settings from built-in defaults, a settings file and the environment
    pub fn load(settings_path: Option<&Path>) -> WordforgeResult<Self> {
        debug!("Loading settings");

        let mut builder = ConfigLoader::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        // User-provided settings
        if let Some(path) = settings_path {
            if path.exists() {
                builder = builder.add_source(config::File::from(path));
                info!("Loading user settings from: {}", path.display());
            } else {
                warn!("Specified settings file not found: {}", path.display());
            }
        } else {
            let default_path = Self::default_path();
            if default_path.exists() {
                builder = builder.add_source(config::File::from(default_path.as_path()));
                debug!("Loading default settings from: {}", default_path.display());
            } else {
                debug!("No settings file found, using built-in defaults");
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
        );

        let settings: Settings = builder
            .build()
            .map_err(|e| WordforgeError::ConfigError(format!("Failed to build settings: {}", e)))?
            .try_deserialize()
            .map_err(|e| WordforgeError::ConfigError(format!("Failed to parse settings: {}", e)))?;

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wordforge/config.toml")
    }

    /// Write default settings to `path`, or the default location
    pub fn init(path: Option<&Path>, force: bool) -> WordforgeResult<PathBuf> {
        let settings_path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if let Some(parent) = settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| WordforgeError::FileError {
                        path: parent.to_path_buf(),
                        message: format!("Failed to create directory: {}", e),
                    })?;
            }
        }

        if settings_path.exists() && !force {
            return Err(WordforgeError::ConfigError(format!(
                "Settings already exist at {}. Use --force to overwrite.",
                settings_path.display()
            )));
        }

        Settings::default().save(&settings_path)?;

        Ok(settings_path)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> WordforgeResult<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WordforgeError::SerializationError(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WordforgeError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write settings: {}", e),
            })?;

        info!("Settings saved to {}", path.display());
        Ok(())
    }
}
