//! Generic Config Document
//!
//! A format-independent tree value produced by every codec: mappings with string keys,
//! ordered sequences and primitive leaves. Serde is implemented by hand so that YAML,
//! JSON and TOML all decode into the same shape.

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping node type. Keys are emitted sorted.
pub type Mapping = BTreeMap<String, Document>;

/// A generic nested configuration value
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Document>),
    Mapping(Mapping),
}

/// Dynamic shape of a [`Document`], used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Sequence,
    Mapping,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::Null => "null",
            DocumentKind::Bool => "bool",
            DocumentKind::Integer => "integer",
            DocumentKind::Float => "float",
            DocumentKind::String => "string",
            DocumentKind::Sequence => "sequence",
            DocumentKind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document::Mapping(Mapping::new())
    }
}

impl Document {
    /// Empty mapping
    pub fn mapping() -> Self {
        Document::Mapping(Mapping::new())
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Null => DocumentKind::Null,
            Document::Bool(_) => DocumentKind::Bool,
            Document::Integer(_) => DocumentKind::Integer,
            Document::Float(_) => DocumentKind::Float,
            Document::String(_) => DocumentKind::String,
            Document::Sequence(_) => DocumentKind::Sequence,
            Document::Mapping(_) => DocumentKind::Mapping,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Document::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Document::Sequence(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    /// Scalars that unconditionally replace the destination value during a merge.
    ///
    /// Only integers and strings qualify; floats, booleans and null do not.
    pub fn is_overwriting_scalar(&self) -> bool {
        matches!(self, Document::Integer(_) | Document::String(_))
    }

    /// Empty container of the same shape, or `None` for leaves.
    pub fn empty_like(&self) -> Option<Document> {
        match self {
            Document::Mapping(_) => Some(Document::Mapping(Mapping::new())),
            Document::Sequence(_) => Some(Document::Sequence(Vec::new())),
            _ => None,
        }
    }

    /// Null, or a mapping/sequence with no entries
    pub fn is_empty(&self) -> bool {
        match self {
            Document::Null => true,
            Document::Mapping(map) => map.is_empty(),
            Document::Sequence(seq) => seq.is_empty(),
            _ => false,
        }
    }

    /// Top-level lookup on a mapping. Non-mappings have no keys.
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Document::Mapping(map) => map.get(key),
            _ => None,
        }
    }

    /// Dotted lookup through nested mappings, e.g. `"server.ports"`.
    pub fn get_path(&self, path: &str) -> Option<&Document> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.get(segment))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Document::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Document]> {
        match self {
            Document::Sequence(seq) => Some(seq.as_slice()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Document::Integer(value)
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Float(value)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl<T: Into<Document>> From<Vec<T>> for Document {
    fn from(values: Vec<T>) -> Self {
        Document::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping> for Document {
    fn from(map: Mapping) -> Self {
        Document::Mapping(map)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Integer(i) => serializer.serialize_i64(*i),
            Document::Float(f) => serializer.serialize_f64(*f),
            Document::String(s) => serializer.serialize_str(s),
            Document::Sequence(seq) => serializer.collect_seq(seq),
            Document::Mapping(map) => serializer.collect_map(map),
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping, sequence, string, number, boolean or null")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Document, E> {
        Ok(Document::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Document, E> {
        Ok(Document::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Document, E> {
        i64::try_from(v)
            .map(Document::Integer)
            .map_err(|_| E::custom(format!("integer {} is out of range", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Document, E> {
        Ok(Document::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Document, E> {
        Ok(Document::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Document, E> {
        Ok(Document::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Document, E> {
        Ok(Document::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Document, D::Error> {
        Document::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Document, A::Error> {
        let mut seq = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            seq.push(item);
        }
        Ok(Document::Sequence(seq))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Document, A::Error> {
        let mut map = Mapping::new();
        while let Some(key) = access.next_key::<Document>()? {
            let key = mapping_key(key).map_err(de::Error::custom)?;
            let value = access.next_value()?;
            map.insert(key, value);
        }
        Ok(Document::Mapping(map))
    }
}

/// YAML allows non-string keys; scalar keys are stringified, containers are rejected.
fn mapping_key(key: Document) -> Result<String, String> {
    match key {
        Document::String(s) => Ok(s),
        Document::Integer(i) => Ok(i.to_string()),
        Document::Float(f) => Ok(f.to_string()),
        Document::Bool(b) => Ok(b.to_string()),
        Document::Null => Ok("null".to_string()),
        other => Err(format!("unsupported {} mapping key", other.kind())),
    }
}
