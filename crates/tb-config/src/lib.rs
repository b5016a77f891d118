//! Configuration management for tab block rendering.
//!
//! Parses `tb.toml` configuration files with serde. When no path is given,
//! the file is searched for in the current directory and its parents.
//!
//! ```toml
//! [tabs]
//! namespace = "tabs"
//! shortcode = "tabs"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "tb.toml";

/// Default prefix of generated tab block ids.
pub const DEFAULT_NAMESPACE: &str = "tabs";

/// Default element name marking a tab block in rendered HTML.
pub const DEFAULT_SHORTCODE: &str = "tabs";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tab block settings.
    pub tabs: TabsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Tab block settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Prefix of every generated base id: `{namespace}__{token}`.
    pub namespace: String,
    /// Element name that wraps a tab block in rendered page HTML.
    pub shortcode: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            shortcode: DEFAULT_SHORTCODE.to_owned(),
        }
    }
}

impl TabsConfig {
    /// Validate that names are usable as id prefixes and element names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a field is empty, does not start
    /// with an ASCII letter, or contains characters outside `[A-Za-z0-9_-]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name(&self.namespace, "tabs.namespace")?;
        validate_name(&self.shortcode, "tabs.shortcode")?;
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a name that is safe as an XML name and an HTML id prefix.
///
/// `field` is used in the error message.
///
/// # Errors
///
/// Returns `ConfigError::Validation` if `value` is empty, does not start with
/// an ASCII letter, or contains characters outside `[A-Za-z0-9_-]`.
pub fn validate_name(value: &str, field: &str) -> Result<(), ConfigError> {
    let Some(first) = value.chars().next() else {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    };
    if !first.is_ascii_alphabetic() {
        return Err(ConfigError::Validation(format!(
            "{field} must start with an ASCII letter"
        )));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "{field} may only contain letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `tb.toml` in the current directory and parents, falling back to
    /// defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if reading,
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tabs.validate()
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }
}

/// Search for the config file in `start` and its parents.
fn discover_config_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
