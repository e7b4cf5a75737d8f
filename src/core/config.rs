//! Configuration module for the palette tool
//!
//! Supports loading configuration from a TOML file.
//! Configuration is stored in a standard location:
//! - Windows: %APPDATA%\palette_studio\config.toml
//! - Linux: ~/.config/palette_studio/config.toml
//! - macOS: ~/Library/Application Support/palette_studio/config.toml

use crate::color::ColorFormat;
use crate::core::error::{PaletteError, Result as PaletteResult};
use crate::export::ExportFormat;
use crate::generator::PaletteKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for config and data directories
pub const APP_NAME: &str = "palette_studio";

/// Default config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config file name looked up in the current directory
const LOCAL_CONFIG_FILE_NAME: &str = "palette_studio.toml";

/// Storage key holding the saved palette collection
pub const DEFAULT_STORAGE_KEY: &str = "saved_palettes";

/// Get the standard configuration directory for the application.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}

/// Get the standard configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Get the default directory where saved palettes live.
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_NAME))
}

/// Ensure the configuration directory exists.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = get_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::WriteError(config_dir.clone(), e.to_string()))?;
    }

    Ok(config_dir)
}

/// Initialize the configuration file if it doesn't exist.
///
/// Writes the commented default template and returns the path to it.
pub fn init_config() -> Result<PathBuf, ConfigError> {
    let config_dir = ensure_config_dir()?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        fs::write(&config_path, Config::generate_default_config())
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e.to_string()))?;
    }

    Ok(config_path)
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where saved palettes are persisted
    pub storage: StorageConfig,

    /// Palette generation defaults
    pub generation: GenerationConfig,

    /// Export defaults
    pub export: ExportConfig,

    /// Terminal display settings
    pub display: DisplayConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the storage files (empty = platform data dir)
    pub data_dir: PathBuf,

    /// Key the palette collection is stored under
    pub storage_key: String,
}

/// Generation defaults and bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Number of colors generated when `--count` is not given
    pub default_count: usize,

    /// Smallest palette the tool will generate
    pub min_count: usize,

    /// Largest palette the tool will generate
    pub max_count: usize,

    /// Strategy used when `--kind` is not given
    pub default_kind: PaletteKind,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when `--format` is not given
    pub default_format: ExportFormat,

    /// Variable name prefix for CSS/SCSS output
    pub variable_prefix: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// How colors are written in listings
    pub color_format: ColorFormat,

    /// Print ANSI truecolor swatches next to each color
    pub swatches: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log to file
    pub log_to_file: bool,

    /// Log file path
    pub log_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(), // Empty = platform default
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_count: 5,
            min_count: 1,
            max_count: 10,
            default_kind: PaletteKind::Random,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Css,
            variable_prefix: "color".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_format: ColorFormat::Hex,
            swatches: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_to_file: false,
            log_file: PathBuf::from("./palette_studio.log"),
        }
    }
}

impl StorageConfig {
    /// Resolve the directory palettes are stored in
    ///
    /// Falls back to the platform data directory, then to the current
    /// directory when no platform directory can be determined.
    pub fn effective_data_dir(&self) -> PathBuf {
        if !self.data_dir.as_os_str().is_empty() {
            return self.data_dir.clone();
        }
        get_data_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl GenerationConfig {
    /// Check a requested palette size against the configured bounds
    pub fn validate_count(&self, count: usize) -> PaletteResult<usize> {
        let min = self.min_count.max(1);
        if count < min || count > self.max_count {
            return Err(PaletteError::InvalidCount {
                count,
                min,
                max: self.max_count,
            });
        }
        Ok(count)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./palette_studio.toml (current directory override)
    /// 2. Standard config location
    ///
    /// If no config file is found, returns default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        let local = PathBuf::from(".").join(LOCAL_CONFIG_FILE_NAME);
        if local.exists() {
            return Self::load(&local);
        }

        if let Some(config_path) = get_config_path() {
            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Get the path where the config file is (or would be) located.
    pub fn get_active_config_path() -> PathBuf {
        let local = PathBuf::from(".").join(LOCAL_CONFIG_FILE_NAME);
        if local.exists() {
            return local;
        }

        get_config_path().unwrap_or_else(|| PathBuf::from(".").join(LOCAL_CONFIG_FILE_NAME))
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::WriteError(path.as_ref().to_path_buf(), e.to_string()))?;

        Ok(())
    }

    /// Generate a default config file with comments
    pub fn generate_default_config() -> String {
        include_str!("../../config.example.toml").to_string()
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path
    FileNotFound(PathBuf),
    /// Failed to read the configuration file
    ReadError(PathBuf, String),
    /// Failed to parse the configuration file (invalid TOML)
    ParseError(PathBuf, String),
    /// Failed to serialize configuration to TOML
    SerializeError(String),
    /// Failed to write configuration file
    WriteError(PathBuf, String),
    /// Could not determine config directory
    ConfigDirNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ReadError(path, err) => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    err
                )
            }
            ConfigError::ParseError(path, err) => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    err
                )
            }
            ConfigError::SerializeError(err) => {
                write!(f, "Failed to serialize configuration: {}", err)
            }
            ConfigError::WriteError(path, err) => {
                write!(
                    f,
                    "Failed to write config file '{}': {}",
                    path.display(),
                    err
                )
            }
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not determine configuration directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.storage.storage_key, "saved_palettes");
        assert!(config.storage.data_dir.as_os_str().is_empty());
        assert_eq!(config.generation.default_count, 5);
        assert_eq!(config.generation.default_kind, PaletteKind::Random);
        assert_eq!(config.export.default_format, ExportFormat::Css);
        assert_eq!(config.display.color_format, ColorFormat::Hex);
    }

    #[test]
    fn test_validate_count_bounds() {
        let generation = GenerationConfig::default();
        assert_eq!(generation.validate_count(1).unwrap(), 1);
        assert_eq!(generation.validate_count(10).unwrap(), 10);
        assert!(generation.validate_count(0).is_err());
        assert!(generation.validate_count(11).is_err());
    }

    #[test]
    fn test_validate_count_never_allows_zero() {
        let generation = GenerationConfig {
            min_count: 0,
            ..GenerationConfig::default()
        };
        assert!(generation.validate_count(0).is_err());
    }

    #[test]
    fn test_effective_data_dir_override() {
        let storage = StorageConfig {
            data_dir: PathBuf::from("/tmp/palettes"),
            ..StorageConfig::default()
        };
        assert_eq!(storage.effective_data_dir(), PathBuf::from("/tmp/palettes"));
    }

    #[test]
    fn test_load_partial_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[generation]
default_count = 7
default_kind = "triadic"

[export]
default_format = "tailwind"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.generation.default_count, 7);
        assert_eq!(config.generation.default_kind, PaletteKind::Triadic);
        assert_eq!(config.generation.max_count, 10);
        assert_eq!(config.export.default_format, ExportFormat::Tailwind);
        assert_eq!(config.storage.storage_key, "saved_palettes");
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load(temp_dir.path().join("nope.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[generation\ndefault_count = ").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ConfigError::ParseError(_, _))
        ));
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.display.color_format = ColorFormat::Rgb;
        config.export.variable_prefix = "brand".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.display.color_format, ColorFormat::Rgb);
        assert_eq!(loaded.export.variable_prefix, "brand");
    }

    #[test]
    fn test_default_template_parses() {
        let config: Config = toml::from_str(&Config::generate_default_config()).unwrap();
        assert_eq!(config.storage.storage_key, "saved_palettes");
        assert_eq!(config.generation.max_count, 10);
    }
}
