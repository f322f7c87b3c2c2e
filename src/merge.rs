//! Merge engine: recursive reconciliation of a source document into a destination.
//!
//! Semantics, by the shape of the destination:
//! - Mapping: every source key is visited. Missing keys are seeded with an empty
//!   container matching the source value's shape, or with a copy of the source value
//!   when it is a primitive. Integer and string source values overwrite the destination
//!   unconditionally. Present keys are then merged recursively. Destination keys absent
//!   from the source are never touched.
//! - Sequence: source elements not already present (deep equality) are appended in
//!   source order. Existing order is preserved.
//! - Anything else: no-op.
//!
//! A mapping or sequence destination paired with a source of a different shape is a
//! [`ConfigError::TypeMismatch`].

use crate::document::{Document, DocumentKind};
use crate::error::ConfigError;

const ROOT: &str = "$";

/// Merge `source` into `destination` in place.
///
/// The source is never modified. On error the destination may be partially merged.
pub fn merge(source: &Document, destination: &mut Document) -> Result<(), ConfigError> {
    merge_at(source, destination, ROOT)
}

/// Merge `source` into a copy of `destination` and return the result.
pub fn merged(source: &Document, destination: &Document) -> Result<Document, ConfigError> {
    let mut result = destination.clone();
    merge(source, &mut result)?;
    Ok(result)
}

fn merge_at(source: &Document, destination: &mut Document, path: &str) -> Result<(), ConfigError> {
    match destination {
        Document::Mapping(dest_map) => {
            let source_map = match source {
                Document::Mapping(map) => map,
                other => return Err(mismatch(path, DocumentKind::Mapping, other)),
            };
            for (key, value) in source_map {
                if !dest_map.contains_key(key) {
                    let seed = value.empty_like().unwrap_or_else(|| value.clone());
                    dest_map.insert(key.clone(), seed);
                }
                // Only integers and strings replace a value that is already there.
                if value.is_overwriting_scalar() {
                    dest_map.insert(key.clone(), value.clone());
                }
                if let Some(slot) = dest_map.get_mut(key) {
                    merge_at(value, slot, &child_path(path, key))?;
                }
            }
            Ok(())
        }
        Document::Sequence(dest_seq) => {
            let source_seq = match source {
                Document::Sequence(seq) => seq,
                other => return Err(mismatch(path, DocumentKind::Sequence, other)),
            };
            for element in source_seq {
                if !dest_seq.contains(element) {
                    dest_seq.push(element.clone());
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn mismatch(path: &str, destination: DocumentKind, source: &Document) -> ConfigError {
    ConfigError::TypeMismatch {
        path: path.to_string(),
        destination,
        incoming: source.kind(),
    }
}

fn child_path(parent: &str, key: &str) -> String {
    if parent == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}
