//! Document codecs: bytes on disk to [`Document`] and back.

use crate::document::Document;
use crate::error::ConfigError;
use std::fmt;
use std::path::Path;

/// Serialization format of a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Pick the format from the file extension; unknown extensions fall back to YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Format::Json,
            Some("toml") => Format::Toml,
            _ => Format::Yaml,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Format::Yaml => "yaml",
            Format::Json => "json",
            Format::Toml => "toml",
        }
    }

    /// Decode raw bytes. The error is a human-readable message.
    pub fn decode(self, bytes: &[u8]) -> Result<Document, String> {
        match self {
            Format::Yaml => {
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Document::Null);
                }
                serde_yaml::from_slice(bytes).map_err(|e| e.to_string())
            }
            Format::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
            Format::Toml => {
                let text = std::str::from_utf8(bytes).map_err(|e| e.to_string())?;
                toml::from_str(text).map_err(|e| e.to_string())
            }
        }
    }

    pub fn encode(self, document: &Document) -> Result<Vec<u8>, ConfigError> {
        let encoded = match self {
            Format::Yaml => serde_yaml::to_string(document).map_err(|e| e.to_string()),
            Format::Json => serde_json::to_string_pretty(document)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| e.to_string()),
            Format::Toml => {
                if !document.is_mapping() {
                    return Err(ConfigError::Encode {
                        format: self.name(),
                        message: format!("top-level value must be a mapping, found {}", document.kind()),
                    });
                }
                toml::to_string_pretty(document).map_err(|e| e.to_string())
            }
        };
        encoded
            .map(String::into_bytes)
            .map_err(|message| ConfigError::Encode {
                format: self.name(),
                message,
            })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read and decode a document from disk.
pub fn read_document(path: &Path, format: Format) -> Result<Document, ConfigError> {
    let bytes = std::fs::read(path).map_err(|e| ConfigError::io(path, e))?;
    format.decode(&bytes).map_err(|message| ConfigError::Decode {
        path: path.to_path_buf(),
        message,
    })
}

/// Encode a document and overwrite the file at `path`.
pub fn write_document(path: &Path, format: Format, document: &Document) -> Result<(), ConfigError> {
    let bytes = format.encode(document)?;
    std::fs::write(path, bytes).map_err(|e| ConfigError::io(path, e))
}
