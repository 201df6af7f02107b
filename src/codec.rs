//! # Document Codec
//!
//! Reads and writes schema documents as JSON or YAML. The transcoder works on
//! typed values; this module is the only place bytes are turned into them.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::error::{TranscoderError, TranscoderResult};

/// Supported document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> TranscoderResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(TranscoderError::unsupported_format(path.display().to_string())),
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = TranscoderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(TranscoderError::unsupported_format(other)),
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parse a document.
pub fn decode<T: DeserializeOwned>(text: &str, format: DocumentFormat) -> TranscoderResult<T> {
    let value = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(value)
}

/// Render a document. `pretty` only affects JSON; YAML is always block style.
pub fn encode<T: Serialize>(value: &T, format: DocumentFormat, pretty: bool) -> TranscoderResult<String> {
    let text = match format {
        DocumentFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        DocumentFormat::Json => serde_json::to_string(value)?,
        DocumentFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

/// Read and parse a document, inferring the format from the extension.
pub async fn read_document<T, P>(path: P) -> TranscoderResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path)?;
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| TranscoderError::io(format!("Failed to read {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), %format, bytes = text.len(), "read document");
    decode(&text, format)
}

/// Render and write a document.
pub async fn write_document<T, P>(
    value: &T,
    path: P,
    format: DocumentFormat,
    pretty: bool,
) -> TranscoderResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let text = encode(value, format, pretty)?;
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|e| TranscoderError::io(format!("Failed to write {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), %format, bytes = text.len(), "wrote document");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::ApiDefinition;
    use crate::oas::Authentication;

    #[test]
    fn test_format_from_path() {
        assert_eq!(DocumentFormat::from_path("api.json").unwrap(), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path("api.YML").unwrap(), DocumentFormat::Yaml);
        assert!(DocumentFormat::from_path("api.toml").is_err());
        assert!(DocumentFormat::from_path("api").is_err());
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("yaml".parse::<DocumentFormat>().unwrap(), DocumentFormat::Yaml);
        assert!("xml".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn test_decode_yaml_authentication() {
        let yaml = r#"
enabled: true
token:
  enabled: true
  header:
    name: Authorization
  param:
    enabled: true
    name: token
"#;
        let authentication: Authentication = decode(yaml, DocumentFormat::Yaml).unwrap();
        let token = authentication.token.expect("token should be present");
        assert_eq!(token.auth_sources.header.name, "Authorization");
        assert_eq!(token.auth_sources.param.map(|p| p.name), Some("token".to_string()));
    }

    #[test]
    fn test_decode_error_is_typed() {
        let err = decode::<ApiDefinition>("{not json", DocumentFormat::Json).unwrap_err();
        assert_eq!(err.error_type(), "json_error");
    }

    #[test]
    fn test_encode_compact_json() {
        let text = encode(&Authentication::default(), DocumentFormat::Json, false).unwrap();
        assert_eq!(text, r#"{"enabled":false}"#);
    }
}
