//! Per-user data directory layout: `<home>/var/<app-id>/<file-name>`.

use crate::error::ConfigError;
use directories::BaseDirs;
use std::path::{Component, Path, PathBuf};

/// Home directory of the invoking user (honors `HOME` on Unix).
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

/// `<home>/var/<app_id>`. Pure path construction; nothing is created.
pub fn app_dir(app_id: &str) -> Result<PathBuf, ConfigError> {
    validate_name("application id", app_id)?;
    Ok(home_dir()?.join("var").join(app_id))
}

/// `<home>/var/<app_id>/<file_name>`
pub fn config_path(app_id: &str, file_name: &str) -> Result<PathBuf, ConfigError> {
    validate_name("file name", file_name)?;
    Ok(app_dir(app_id)?.join(file_name))
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<(), ConfigError> {
    if !dir.is_dir() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;
        tracing::debug!(dir = %dir.display(), "Created config directory");
    }
    Ok(())
}

/// Names must be a single normal path component.
pub(crate) fn validate_name(what: &str, name: &str) -> Result<(), ConfigError> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => Ok(()),
        _ => Err(ConfigError::InvalidName(format!(
            "{} must be a single path component, got {:?}",
            what, name
        ))),
    }
}
