//! JSON file store with backup-on-write.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info};

use crate::document::ConfigDocument;
use crate::error::ConfigError;
use crate::ConfigResult;

/// Prefix prepended to the file name for the write-time backup.
const BACKUP_PREFIX: &str = "backup_";

/// Load a configuration document from `path`.
///
/// The file may hold either the document object itself or a one-element
/// array wrapping it; older deployments wrote the array form.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<ConfigDocument> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;

    let value = match value {
        Value::Array(mut docs) => {
            if docs.is_empty() {
                return Err(ConfigError::EmptyDocument);
            }
            docs.swap_remove(0)
        }
        other => other,
    };

    let document = serde_json::from_value(value)?;
    debug!(path = %path.display(), "Config loaded");
    Ok(document)
}

/// Save a configuration document to `path`.
///
/// If the file already exists its current content is copied to the backup
/// location first, then the document is written pretty-printed in the
/// one-element-array layout.
pub fn save(path: impl AsRef<Path>, document: &ConfigDocument) -> ConfigResult<()> {
    let path = path.as_ref();

    if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup)?;
        info!(backup = %backup.display(), "Previous config backed up");
    }

    let rendered = serde_json::to_string_pretty(&[document])?;
    fs::write(path, rendered)?;
    info!(path = %path.display(), "Config saved");
    Ok(())
}

/// The backup location for a config path: `backup_<filename>` in the same
/// directory.
pub fn backup_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{BACKUP_PREFIX}{name}"))
}
