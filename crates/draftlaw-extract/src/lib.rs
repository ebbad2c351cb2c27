//! Chunking and field extraction: raw document text in, [`ExtractionResult`] out.
//!
//! [`ExtractionResult`]: draftlaw_core::ExtractionResult

pub mod chunker;
pub mod extractor;
pub mod rules;

pub use chunker::{chunk_articles, heading_of};
pub use extractor::{
    Extractor, correspondents, detect_document_type, extract, governance_notes, key_clauses,
    key_dates, objects,
};
pub use rules::{Capture, Extracted, FieldRule, Pattern, RULES, RuleSet};
