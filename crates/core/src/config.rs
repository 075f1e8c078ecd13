//! Codec configuration
//!
//! The protocol layer needs very little configuration: which client release a
//! listener speaks, and whether decoded payloads are hex-dumped at `trace`
//! level. Both are loaded from the server's JSON config file.
//!
//! ```json
//! { "client_version": "ZZ", "trace_payloads": false }
//! ```

use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{HunterError, Result};
use crate::version::{ClientContext, ClientVersion};

/// Protocol configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProtocolConfig {
    /// Client release spoken by connections on this listener
    ///
    /// # Default
    /// `ZZ`, the newest known release
    #[serde(deserialize_with = "deserialize_version")]
    pub client_version: ClientVersion,

    /// Hex-dump every decoded payload at `trace` level
    ///
    /// # Default
    /// `false`
    pub trace_payloads: bool,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            client_version: ClientVersion::LATEST,
            trace_payloads: false,
        }
    }
}

impl ProtocolConfig {
    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            HunterError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// Per-connection context for this configuration
    pub fn context(&self) -> ClientContext {
        ClientContext::new(self.client_version)
    }

    /// Log the effective configuration
    pub fn display(&self) {
        info!("Protocol configuration:");
        info!("  Client version: {}", self.client_version);
        info!("  Trace payloads: {}", self.trace_payloads);
    }
}

impl From<&ProtocolConfig> for ClientContext {
    fn from(config: &ProtocolConfig) -> Self {
        config.context()
    }
}

fn deserialize_version<'de, D>(deserializer: D) -> std::result::Result<ClientVersion, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ProtocolConfig::from_json("{}").unwrap();
        assert_eq!(config, ProtocolConfig::default());
        assert_eq!(config.context().version, ClientVersion::ZZ);
    }

    #[test]
    fn test_parse_lenient_version_name() {
        let config = ProtocolConfig::from_json(r#"{"client_version": "g10.1", "trace_payloads": true}"#).unwrap();
        assert_eq!(config.client_version, ClientVersion::G101);
        assert!(config.trace_payloads);
        assert_eq!(ClientContext::from(&config).version, ClientVersion::G101);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let err = ProtocolConfig::from_json(r#"{"client_version": "X9"}"#).unwrap_err();
        assert!(matches!(err, HunterError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"client_version": "FW5"}}"#).unwrap();

        let config = ProtocolConfig::load(file.path()).unwrap();
        assert_eq!(config.client_version, ClientVersion::FW5);
        assert!(!config.trace_payloads);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = ProtocolConfig::load("/nonexistent/hunterd/config.json").unwrap_err();
        assert!(matches!(err, HunterError::Config(_)));
    }
}
