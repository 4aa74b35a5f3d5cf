//! File-based configuration loading.

use std::path::Path;

use serde::de::DeserializeOwned;

use super::RematchConfig;
use crate::error::{RematchError, Result};

/// Configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format.
    Toml,
    /// JSON format.
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Detect format from path.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Parse a document in the given format.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: ConfigFormat) -> Result<T> {
    match format {
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| RematchError::config(e.message().to_string()))
        }
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| RematchError::config(e.to_string()))
        }
    }
}

/// Read and parse a document, choosing the format from the extension.
///
/// Files without a recognised extension are read as TOML.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RematchError::io_context(format!("reading {}", path.display()), e))?;

    let format = ConfigFormat::from_path(path).unwrap_or(ConfigFormat::Toml);
    tracing::debug!(path = %path.display(), ?format, "loading document");

    parse_document(&content, format).map_err(|err| match err {
        RematchError::Config { message } => {
            RematchError::config(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

/// Parse configuration content.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<RematchConfig> {
    parse_document(content, format)
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<RematchConfig> {
    load_document(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use crate::matcher::PatternFlags;

    #[test]
    fn format_detection() {
        assert_eq!(ConfigFormat::from_extension("TOML"), Some(ConfigFormat::Toml));
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/rematch.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("rematch.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("rematch")), None);
    }

    #[test]
    fn parse_toml() {
        let config = parse_config(
            r#"
            [compile]
            flags = ["IGNORECASE", "m"]
            size_limit = 65536

            [cache]
            capacity = 16

            [logging]
            level = "debug"
            format = "compact"
            "#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(
            config.compile.flags,
            PatternFlags::CASE_INSENSITIVE | PatternFlags::MULTI_LINE
        );
        assert_eq!(config.compile.size_limit, Some(65536));
        assert_eq!(config.cache.capacity, 16);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn parse_json_partial() {
        let config =
            parse_config(r#"{"cache": {"capacity": 4}}"#, ConfigFormat::Json).unwrap();
        assert_eq!(config.cache.capacity, 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = parse_config("[cache]\nsize = 3\n", ConfigFormat::Toml).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/rematch.toml")).unwrap_err();
        assert!(matches!(err, RematchError::IoWithContext { .. }));
    }
}
