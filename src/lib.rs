//! Homevar: Per-User Application Settings
//!
//! Keeps one configuration document per application under `~/var/<app-id>/`, seeds it
//! from a bundled template when absent, and merges template defaults into existing
//! user configuration without deleting user keys.

pub mod cli;
pub mod codec;
pub mod document;
pub mod error;
pub mod logging;
pub mod merge;
pub mod paths;
pub mod store;

pub use codec::Format;
pub use document::{Document, DocumentKind, Mapping};
pub use error::ConfigError;
pub use merge::{merge, merged};
pub use store::{ConfigStore, LoadOutcome, SharedDocument};
