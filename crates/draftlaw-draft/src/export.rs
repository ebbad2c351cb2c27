//! Write drafts and records to disk.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write `content` as UTF-8 text, creating parent directories.
pub fn write_txt(content: &str, path: &Path) -> Result<(), ExportError> {
    write_bytes(content.as_bytes(), path)
}

/// Write `value` as pretty-printed JSON, creating parent directories.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), ExportError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    write_bytes(json.as_bytes(), path)
}

fn write_bytes(bytes: &[u8], path: &Path) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    info!(path = %path.display(), bytes = bytes.len(), "exported");
    Ok(())
}
