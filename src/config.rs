use camino::Utf8Path;

use crate::error::ConfigError;

#[non_exhaustive]
#[derive(Clone, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// How in-memory images are inspected for metadata.
    pub metadata: MetadataConfig,
}

impl Config {
    pub fn new(metadata: MetadataConfig) -> Self {
        Self { metadata }
    }

    /// Parses a `Config` from TOML text.
    ///
    /// Missing tables and keys fall back to their defaults, so an empty
    /// string is a valid config.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s)
            .inspect_err(|e| tracing::warn!("Failed to parse config! err: {e}"))
            .map_err(ConfigError::ParseFailed)
    }

    /// Attempts to read a `Config` from the TOML file at `path`.
    #[tracing::instrument]
    pub async fn from_disk(path: &Utf8Path) -> Result<Self, ConfigError> {
        // read the config from disk
        let s = tokio::fs::read_to_string(path)
            .await
            .inspect_err(|e| tracing::error!("Failed to read config file! err: {e}"))
            .map_err(|err| ConfigError::ReadFailed {
                path: path.to_string(),
                err,
            })?;

        // parse with `toml` crate
        let config = Self::from_toml_str(s.as_str())?;
        tracing::debug!("loaded config from disk!");

        Ok(config)
    }
}

/// Settings for [`MetadataBuilder`](crate::models::metadata::builder::MetadataBuilder).
#[derive(Clone, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MetadataConfig {
    /// Whether to look for EXIF data (currently only used for pixel density).
    pub read_exif: bool,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self { read_exif: true }
    }
}
