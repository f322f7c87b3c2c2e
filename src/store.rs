//! Config Store
//!
//! Owns one live configuration document backed by a file under a per-user,
//! per-application directory, plus the location of the bundled template used to seed
//! and patch it.
//!
//! Loading follows a fallback cascade. Missing, unreadable or empty files are treated
//! as absent. When both the live file and the template exist, the live document is
//! merged into a copy of the template. When only the template exists, it becomes the
//! live document and is written to disk immediately.

use crate::codec::{read_document, write_document, Format};
use crate::document::Document;
use crate::error::ConfigError;
use crate::merge::merge;
use crate::paths;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared handle to a store's live document
pub type SharedDocument = Arc<RwLock<Document>>;

/// Where the live document came from on the last load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Live file merged into the template
    Merged,
    /// Live file only, no template
    LiveOnly,
    /// Template only; the live file was written from it
    Bootstrapped,
    /// Neither file available; the document is an empty mapping
    Empty,
}

/// Per-application settings store
pub struct ConfigStore {
    document: SharedDocument,
    template_path: Option<PathBuf>,
    directory: PathBuf,
    path: PathBuf,
    format: Format,
    last_load: LoadOutcome,
}

impl ConfigStore {
    /// Open the store for `app_id` under `<home>/var/<app_id>`, creating the directory
    /// if needed, and load the document.
    pub fn open(
        app_id: &str,
        template: Option<&Path>,
        file_name: &str,
    ) -> Result<Self, ConfigError> {
        let directory = paths::app_dir(app_id)?;
        Self::open_in(directory, template, file_name)
    }

    /// Open the store against an explicit directory instead of the per-user one.
    pub fn open_in(
        directory: impl Into<PathBuf>,
        template: Option<&Path>,
        file_name: &str,
    ) -> Result<Self, ConfigError> {
        paths::validate_name("file name", file_name)?;
        let directory = directory.into();
        paths::ensure_dir(&directory)?;

        let path = directory.join(file_name);
        let mut store = Self {
            document: Arc::new(RwLock::new(Document::mapping())),
            template_path: template.map(Path::to_path_buf),
            format: Format::from_path(&path),
            directory,
            path,
            last_load: LoadOutcome::Empty,
        };
        store.load()?;
        Ok(store)
    }

    /// Re-run the load cascade, discarding in-memory changes.
    ///
    /// The shared handle is kept, so references from [`get_reference`](Self::get_reference)
    /// observe the reloaded document.
    pub fn refresh(&mut self) -> Result<(), ConfigError> {
        self.load()
    }

    fn load(&mut self) -> Result<(), ConfigError> {
        let template = self
            .template_path
            .as_deref()
            .and_then(|path| read_optional(path, Format::from_path(path), "template"))
            .filter(|doc| !doc.is_empty());
        let live = read_optional(&self.path, self.format, "config")
            .filter(|doc| !doc.is_empty());

        let (document, outcome) = match (live, template) {
            (Some(live), Some(mut template)) => {
                merge(&live, &mut template)?;
                (template, LoadOutcome::Merged)
            }
            (Some(live), None) => (live, LoadOutcome::LiveOnly),
            (None, Some(template)) => (template, LoadOutcome::Bootstrapped),
            (None, None) => (Document::mapping(), LoadOutcome::Empty),
        };

        debug!(path = %self.path.display(), outcome = ?outcome, "Loaded config");
        *self.document.write() = document;
        self.last_load = outcome;

        if outcome == LoadOutcome::Bootstrapped {
            info!(path = %self.path.display(), "Seeding config from template");
            self.write();
        }
        Ok(())
    }

    /// Deep copy of the current document.
    pub fn get(&self) -> Document {
        self.document.read().clone()
    }

    /// The live document itself; changes made through it are visible to the store.
    pub fn get_reference(&self) -> SharedDocument {
        Arc::clone(&self.document)
    }

    /// Copy of a top-level value, `None` when missing.
    pub fn value(&self, key: &str) -> Option<Document> {
        self.document.read().get(key).cloned()
    }

    /// Copy of a nested value addressed by a dotted path such as `server.port`.
    pub fn value_at(&self, path: &str) -> Option<Document> {
        self.document.read().get_path(path).cloned()
    }

    /// Merge `patch` into the live document.
    pub fn update(&self, patch: &Document) -> Result<(), ConfigError> {
        merge(patch, &mut self.document.write())
    }

    /// Replace the live document wholesale.
    pub fn replace(&self, document: Document) {
        *self.document.write() = document;
    }

    /// Persist the live document. Failures are logged and ignored.
    pub fn write(&self) {
        if let Err(e) = self.try_write() {
            warn!(path = %self.path.display(), error = %e, "Failed to write config");
        }
    }

    /// Persist the live document, reporting failures.
    pub fn try_write(&self) -> Result<(), ConfigError> {
        let document = self.document.read();
        write_document(&self.path, self.format, &document)?;
        debug!(path = %self.path.display(), "Wrote config");
        Ok(())
    }

    /// Remove the on-disk file. Failures, including a missing file, are ignored.
    pub fn delete(&self) {
        match self.try_delete() {
            Ok(()) => debug!(path = %self.path.display(), "Deleted config"),
            Err(e) if e.is_not_found() => {
                debug!(path = %self.path.display(), "No config file to delete")
            }
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to delete config"),
        }
    }

    /// Remove the on-disk file, reporting failures.
    pub fn try_delete(&self) -> Result<(), ConfigError> {
        std::fs::remove_file(&self.path).map_err(|e| ConfigError::io(&self.path, e))
    }

    /// Path of the live file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Per-application directory holding the live file
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn template_path(&self) -> Option<&Path> {
        self.template_path.as_deref()
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn last_load(&self) -> LoadOutcome {
        self.last_load
    }
}

/// Read a document, logging and swallowing any failure.
fn read_optional(path: &Path, format: Format, what: &str) -> Option<Document> {
    match read_document(path, format) {
        Ok(document) => Some(document),
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), "No {} file", what);
            None
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Ignoring unreadable {} file", what);
            None
        }
    }
}
