//! Source documents and the chunks cut from them.

use serde::{Deserialize, Serialize};

/// Source label used for text pasted directly rather than read from a file.
pub const MANUAL_INPUT_SOURCE: &str = "manual input";

/// One decoded input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDocument {
    /// File name, or [`MANUAL_INPUT_SOURCE`].
    pub source: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }

    /// Document built from pasted text.
    pub fn manual(text: impl Into<String>) -> Self {
        Self::new(MANUAL_INPUT_SOURCE, text)
    }
}

/// A span of document text under one article/clause/section heading.
///
/// Headingless chunks (text before the first heading) carry an empty
/// `heading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub heading: String,
    pub body: String,
    pub source: String,
}

impl DocumentChunk {
    /// Citation pointing back at this chunk.
    pub fn citation(&self) -> Citation {
        Citation {
            heading: self.heading.clone(),
            source: self.source.clone(),
        }
    }
}

/// Reference from an extracted record back to a source chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub heading: String,
    pub source: String,
}

impl Citation {
    /// Human-readable form used in drafts, e.g. `Article 4 Shareholders (aoa.txt)`.
    pub fn display_label(&self) -> String {
        let heading = if self.heading.is_empty() {
            "Section"
        } else {
            self.heading.as_str()
        };
        format!("{heading} ({})", self.source)
    }
}

/// Which chunk a matched field value was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProvenance {
    /// Field label, one of the constants in [`crate::field`].
    pub field: String,
    pub heading: String,
    pub source: String,
}
