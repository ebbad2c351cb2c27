//! One drafting session: documents → extraction → reasoning → draft.
//!
//! The session owns the extraction and reasoning records between stages.
//! Editing the extraction refreshes its aggregates and discards any
//! reasoning built on the old values.

use std::str::FromStr;

use thiserror::Error;

use draftlaw_core::{
    ExtractionResult, MeetingDetails, PipelineConfig, ReasoningResult, SourceDocument,
};
use draftlaw_draft::draft_resolution;
use draftlaw_extract::{Extractor, chunk_articles};
use draftlaw_reason::{Overrides, Reasoner};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no documents have been parsed")]
    NoExtraction,
    #[error("instructions have not been analyzed against the current extraction")]
    NoReasoning,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("expected FIELD=VALUE, got {0:?}")]
    Malformed(String),
    #[error("unknown field {0:?}; editable fields: {fields}", fields = EditableField::KEYS.join(", "))]
    UnknownField(String),
}

/// Scalar record fields an operator can correct by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    CompanyName,
    LegalForm,
    Jurisdiction,
    RegisteredAddress,
    CommercialLicense,
    ShareCapital,
    BoardQuorum,
    ShareholderQuorum,
    MajorityThreshold,
    FinancialThresholds,
    NoticePeriod,
    MeetingLocation,
    Chairperson,
    Language,
}

impl EditableField {
    const ALL: [Self; 14] = [
        Self::CompanyName,
        Self::LegalForm,
        Self::Jurisdiction,
        Self::RegisteredAddress,
        Self::CommercialLicense,
        Self::ShareCapital,
        Self::BoardQuorum,
        Self::ShareholderQuorum,
        Self::MajorityThreshold,
        Self::FinancialThresholds,
        Self::NoticePeriod,
        Self::MeetingLocation,
        Self::Chairperson,
        Self::Language,
    ];

    const KEYS: [&'static str; 14] = [
        "companyName",
        "legalForm",
        "jurisdiction",
        "registeredAddress",
        "commercialLicense",
        "shareCapital",
        "boardQuorum",
        "shareholderQuorum",
        "majorityThreshold",
        "financialThresholds",
        "noticePeriod",
        "meetingLocation",
        "chairperson",
        "language",
    ];

    fn slot(self, e: &mut ExtractionResult) -> &mut Option<String> {
        match self {
            Self::CompanyName => &mut e.company.name,
            Self::LegalForm => &mut e.company.form,
            Self::Jurisdiction => &mut e.company.jurisdiction,
            Self::RegisteredAddress => &mut e.company.registered_address,
            Self::CommercialLicense => &mut e.company.commercial_license,
            Self::ShareCapital => &mut e.company.share_capital,
            Self::BoardQuorum => &mut e.quorum.board,
            Self::ShareholderQuorum => &mut e.quorum.shareholder,
            Self::MajorityThreshold => &mut e.quorum.majority,
            Self::FinancialThresholds => &mut e.authority.financial_thresholds,
            Self::NoticePeriod => &mut e.formalities.notice_period,
            Self::MeetingLocation => &mut e.formalities.meeting_location,
            Self::Chairperson => &mut e.formalities.chairperson,
            Self::Language => &mut e.formalities.language,
        }
    }
}

impl FromStr for EditableField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::KEYS
            .iter()
            .position(|k| k.eq_ignore_ascii_case(key))
            .map(|i| Self::ALL[i])
            .ok_or_else(|| EditError::UnknownField(key.to_string()))
    }
}

/// One `FIELD=VALUE` correction. A blank value clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: EditableField,
    pub value: Option<String>,
}

impl FieldEdit {
    pub fn apply(&self, extraction: &mut ExtractionResult) {
        *self.field.slot(extraction) = self.value.clone();
    }
}

impl FromStr for FieldEdit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| EditError::Malformed(s.to_string()))?;
        let value = value.trim();
        Ok(Self {
            field: key.parse()?,
            value: (!value.is_empty()).then(|| value.to_string()),
        })
    }
}

#[derive(Debug, Default)]
pub struct Session {
    extractor: Extractor,
    reasoner: Reasoner,
    extraction: Option<ExtractionResult>,
    reasoning: Option<ReasoningResult>,
}

impl Session {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            extractor: Extractor::new(config.clone()),
            reasoner: Reasoner::new(config),
            extraction: None,
            reasoning: None,
        }
    }

    /// Chunk and extract `documents`, replacing any earlier extraction.
    pub fn parse(&mut self, documents: &[SourceDocument]) -> &ExtractionResult {
        let chunks = chunk_articles(documents);
        self.reasoning = None;
        self.extraction.insert(self.extractor.extract(&chunks))
    }

    /// Adopt an extraction produced elsewhere, e.g. a hand-corrected JSON file.
    pub fn load_extraction(&mut self, mut extraction: ExtractionResult) -> &ExtractionResult {
        extraction.refresh();
        self.reasoning = None;
        self.extraction.insert(extraction)
    }

    /// Apply a hand edit to the current extraction.
    pub fn edit_extraction(
        &mut self,
        edit: impl FnOnce(&mut ExtractionResult),
    ) -> Result<&ExtractionResult, SessionError> {
        let extraction = self.extraction.as_mut().ok_or(SessionError::NoExtraction)?;
        edit(extraction);
        extraction.refresh();
        self.reasoning = None;
        Ok(extraction)
    }

    pub fn analyze(
        &mut self,
        instructions: &str,
        overrides: Overrides,
    ) -> Result<&ReasoningResult, SessionError> {
        let extraction = self.extraction.as_ref().ok_or(SessionError::NoExtraction)?;
        let reasoning = self.reasoner.analyze(instructions, extraction, overrides);
        Ok(self.reasoning.insert(reasoning))
    }

    pub fn draft(&self, meeting: &MeetingDetails) -> Result<String, SessionError> {
        let extraction = self.extraction.as_ref().ok_or(SessionError::NoExtraction)?;
        let reasoning = self.reasoning.as_ref().ok_or(SessionError::NoReasoning)?;
        Ok(draft_resolution(extraction, reasoning, meeting))
    }

    pub fn extraction(&self) -> Option<&ExtractionResult> {
        self.extraction.as_ref()
    }

    pub fn reasoning(&self) -> Option<&ReasoningResult> {
        self.reasoning.as_ref()
    }
}
