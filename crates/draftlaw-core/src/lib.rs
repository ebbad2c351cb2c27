//! Core types, text normalisation, and configuration shared by every draftlaw stage.

pub mod config;
pub mod document;
pub mod reasoning;
pub mod record;
pub mod resolution;
pub mod text;

pub use config::{ConfigError, PipelineConfig};
pub use document::{Citation, DocumentChunk, FieldProvenance, MANUAL_INPUT_SOURCE, SourceDocument};
pub use reasoning::{AuthorityChecks, MeetingDetails, ReasoningResult};
pub use record::{
    AuthorityProfile, CompanyRecord, Correspondent, CorrespondentRole, DocumentType,
    ExtractionResult, Formalities, Party, PartyRole, QuorumRules, field,
};
pub use resolution::{AuthorityThreshold, Override, ParseOverrideError, ResolutionType};
pub use text::{Sentences, normalize_lines, normalize_text, split_sentences};
