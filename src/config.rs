//! Catalog runner configuration, read from an optional TOML file.
//!
//! ```toml
//! color = false
//! platform = "windows"
//! log_filter = "design_patterns=debug"
//! ```

use crate::error::{PatternError, Result};
use crate::platform::Platform;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Environment variable consulted when no `--config` path is given.
pub const CONFIG_ENV_VAR: &str = "PATTERNS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Colored section headers in demo transcripts.
    pub color: bool,
    /// Overrides host detection for the factory demos.
    pub platform: Option<String>,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            color: true,
            platform: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Explicit path first, then `PATTERNS_CONFIG`, then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// The platform the factory demos build for.
    pub fn platform(&self) -> Result<Platform> {
        match &self.platform {
            Some(name) => name.parse(),
            None => Ok(Platform::current()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert!(config.color);
        assert_eq!(config.platform, None);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CatalogConfig::from_toml_str("color = false").unwrap();
        assert!(!config.color);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_platform_override() {
        let config = CatalogConfig::from_toml_str("platform = \"Windows\"").unwrap();
        assert_eq!(config.platform().unwrap(), Platform::Windows);
    }

    #[test]
    fn test_bad_platform_override() {
        let config = CatalogConfig::from_toml_str("platform = \"amiga\"").unwrap();
        assert!(matches!(
            config.platform(),
            Err(PatternError::UnsupportedPlatform(name)) if name == "amiga"
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = CatalogConfig::from_toml_str("colour = true");
        assert!(matches!(result, Err(PatternError::ConfigParse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false\nlog_filter = \"debug\"").unwrap();

        let config = CatalogConfig::load(Some(file.path())).unwrap();
        assert!(!config.color);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_missing_file() {
        let result = CatalogConfig::from_file(Path::new("/nonexistent/catalog.toml"));
        assert!(matches!(result, Err(PatternError::ConfigRead { .. })));
    }
}
