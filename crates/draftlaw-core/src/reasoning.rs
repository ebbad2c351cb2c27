//! Reasoning output and meeting metadata consumed by the drafter.

use serde::{Deserialize, Serialize};

use crate::document::Citation;
use crate::resolution::{AuthorityThreshold, ResolutionType};

/// Authority material the drafter cites in the recitals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorityChecks {
    pub board_powers: Vec<String>,
    pub shareholder_matters: Vec<String>,
    pub financial_thresholds: Option<String>,
    pub prohibited_actions: Vec<String>,
    pub required_authority: AuthorityThreshold,
}

/// Classification of one instruction text against one extraction record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningResult {
    pub resolution_type: ResolutionType,
    pub required_authority: AuthorityThreshold,
    /// Formal resolution clauses, one per instruction sentence.
    pub actions: Vec<String>,
    /// The instruction sentences the actions were derived from.
    pub instruction_sentences: Vec<String>,
    pub warnings: Vec<String>,
    pub authority_checks: AuthorityChecks,
    pub references: Vec<Citation>,
    pub legal_framework: String,
    /// Statutory provisions suggested by the kind of document parsed.
    #[serde(default)]
    pub suggested_authorities: Vec<String>,
}

/// Details of the meeting that passes the resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeetingDetails {
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date: Option<String>,
    pub location: Option<String>,
    pub chairperson: Option<String>,
}
