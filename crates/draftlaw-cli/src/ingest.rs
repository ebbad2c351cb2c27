//! Read input documents as plain text.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use draftlaw_core::{SourceDocument, normalize_lines};

/// Extensions read as UTF-8 text. Files without an extension are read too.
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "eml"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error(
        "unsupported file type: {} (only .txt, .md, .eml, or extensionless text files can be read)",
        path.display()
    )]
    Unsupported { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Read one file. The document's source is its file name.
pub fn read_document(path: &Path) -> Result<SourceDocument, IngestError> {
    if let Some(ext) = path.extension() {
        let ext = ext.to_string_lossy().to_ascii_lowercase();
        if !TEXT_EXTENSIONS.contains(&ext.as_str()) {
            return Err(IngestError::Unsupported {
                path: path.to_path_buf(),
            });
        }
    }
    let text = std::fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let source = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(source = %source, bytes = text.len(), "read document");
    Ok(SourceDocument::new(source, normalize_lines(&text)))
}

/// Read every file in order, then the inline text (if not blank) as
/// manual input.
pub fn read_documents(
    paths: &[PathBuf],
    inline: Option<&str>,
) -> Result<Vec<SourceDocument>, IngestError> {
    let mut documents = paths
        .iter()
        .map(|p| read_document(p))
        .collect::<Result<Vec<_>, _>>()?;
    if let Some(text) = inline.map(normalize_lines).filter(|t| !t.is_empty()) {
        documents.push(SourceDocument::manual(text));
    }
    info!(count = documents.len(), "loaded documents");
    Ok(documents)
}
