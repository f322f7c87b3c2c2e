//! CLI output: document rendering and error mapping to a stable CLI surface.

use crate::codec::Format;
use crate::document::Document;
use crate::error::ConfigError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &ConfigError) -> String {
    match e {
        ConfigError::TypeMismatch { .. } => {
            format!("{} (the patch or template does not match the stored shape)", e)
        }
        _ => e.to_string(),
    }
}

/// Parse a `--format` value.
pub fn parse_format(name: &str) -> Result<Format, ConfigError> {
    match name {
        "yaml" | "yml" => Ok(Format::Yaml),
        "json" => Ok(Format::Json),
        "toml" => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(format!(
            "'{}' (use yaml, json or toml)",
            other
        ))),
    }
}

/// Render a document as text without a trailing newline.
pub fn render_document(document: &Document, format: Format) -> Result<String, ConfigError> {
    let bytes = format.encode(document)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.trim_end().to_string())
}

/// Render a single value: bare scalars print as-is, containers as YAML.
pub fn render_value(value: &Document) -> Result<String, ConfigError> {
    match value {
        Document::Null => Ok("null".to_string()),
        Document::Bool(b) => Ok(b.to_string()),
        Document::Integer(i) => Ok(i.to_string()),
        Document::Float(f) => Ok(f.to_string()),
        Document::String(s) => Ok(s.clone()),
        _ => render_document(value, Format::Yaml),
    }
}
