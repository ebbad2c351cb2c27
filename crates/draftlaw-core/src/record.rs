//! Extracted company, party, and authority records.
//!
//! An [`ExtractionResult`] is produced once per parse and then treated as an
//! editable draft: the operator may correct any field by hand before the
//! reasoning and drafting stages run. Unmatched values are `None` or empty,
//! never errors. After any edit, call [`ExtractionResult::refresh`] so the
//! missing-field and note lists agree with the fields again.

use serde::{Deserialize, Serialize};

use crate::document::{Citation, FieldProvenance};

/// Field labels used in missing-field lists, notes, and provenance.
pub mod field {
    // Required: reported in `missing_fields`.
    pub const COMPANY_NAME: &str = "Company name";
    pub const LEGAL_FORM: &str = "Legal form";
    pub const JURISDICTION: &str = "Jurisdiction";
    pub const REGISTERED_ADDRESS: &str = "Registered address";
    pub const COMMERCIAL_LICENSE: &str = "Commercial license number";
    pub const DIRECTORS: &str = "Director/manager names";
    pub const SHAREHOLDERS: &str = "Shareholder names and ownership";

    // Optional: reported in `notes`.
    pub const BOARD_QUORUM: &str = "Board quorum";
    pub const SHAREHOLDER_QUORUM: &str = "Shareholder quorum";
    pub const MAJORITY_THRESHOLD: &str = "Majority threshold";
    pub const CASTING_VOTE: &str = "Casting vote";
    pub const FINANCIAL_THRESHOLDS: &str = "Financial thresholds";
    pub const NOTICE_PERIOD: &str = "Notice period";
    pub const MEETING_LOCATION: &str = "Meeting location";
    pub const CHAIRPERSON: &str = "Chairperson";
    pub const LANGUAGE: &str = "Language";
    pub const SHARE_CAPITAL: &str = "Share capital";
    pub const OBJECTS: &str = "Objects";
}

/// Which party list a [`Party`] belongs to. Hand-written JSON may omit it;
/// [`ExtractionResult::refresh`] sets it from the list the party sits in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    #[default]
    Director,
    Shareholder,
}

/// A director/manager or shareholder/member named in the documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Party {
    pub role: PartyRole,
    pub name: Option<String>,
    pub id_number: Option<String>,
    pub nationality: Option<String>,
    /// Shareholding, e.g. `60%`.
    pub ownership: Option<String>,
    pub appointment_method: Option<String>,
    pub signing_authority: Option<String>,
    pub power_of_attorney: Option<String>,
    /// The sentence the party was read from.
    pub source_sentence: String,
}

impl Party {
    /// A party with only a role and name; every other field unresolved.
    pub fn named(role: PartyRole, name: impl Into<String>) -> Self {
        Self {
            role,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// The name, if present and not blank.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyRecord {
    pub name: Option<String>,
    pub form: Option<String>,
    pub jurisdiction: Option<String>,
    pub registered_address: Option<String>,
    pub commercial_license: Option<String>,
    pub share_capital: Option<String>,
    /// Business objects, as listed in the objects clause.
    pub objects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuorumRules {
    pub board: Option<String>,
    pub shareholder: Option<String>,
    pub majority: Option<String>,
    pub casting_vote: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Formalities {
    pub notice_period: Option<String>,
    pub meeting_location: Option<String>,
    pub chairperson: Option<String>,
    pub language: Option<String>,
}

/// Sentences from the governing documents that bear on who may approve what.
///
/// The lists are filled by independent keyword tests, so one sentence can
/// appear in more than one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorityProfile {
    pub board_powers: Vec<String>,
    pub shareholder_matters: Vec<String>,
    pub financial_thresholds: Option<String>,
    pub prohibited_actions: Vec<String>,
}

/// Kind of constitutional document detected in the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "Articles of Association")]
    Articles,
    #[serde(rename = "Memorandum of Association")]
    Memorandum,
    #[serde(rename = "Articles + Memorandum of Association")]
    ArticlesAndMemorandum,
    #[default]
    #[serde(rename = "AOA/MOA")]
    Unclassified,
}

impl DocumentType {
    pub fn mentions_articles(&self) -> bool {
        matches!(self, Self::Articles | Self::ArticlesAndMemorandum)
    }

    pub fn mentions_memorandum(&self) -> bool {
        matches!(self, Self::Memorandum | Self::ArticlesAndMemorandum)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Articles => "Articles of Association",
            Self::Memorandum => "Memorandum of Association",
            Self::ArticlesAndMemorandum => "Articles + Memorandum of Association",
            Self::Unclassified => "AOA/MOA",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrespondentRole {
    #[default]
    Sender,
    Recipient,
}

impl CorrespondentRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sender => "Sender",
            Self::Recipient => "Recipient",
        }
    }
}

/// Someone named in an email `From:` or `To:` header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Correspondent {
    pub name: String,
    pub role: CorrespondentRole,
}

/// Everything the extractor pulled out of one set of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtractionResult {
    pub document_type: DocumentType,
    pub company: CompanyRecord,
    pub directors: Vec<Party>,
    pub shareholders: Vec<Party>,
    pub quorum: QuorumRules,
    pub authority: AuthorityProfile,
    pub formalities: Formalities,
    /// Dates mentioned in the documents, de-duplicated and sorted.
    pub key_dates: Vec<String>,
    /// Article, clause, and section headings in document order.
    pub key_clauses: Vec<String>,
    /// Governance topics the documents touch on.
    pub governance_notes: Vec<String>,
    pub correspondents: Vec<Correspondent>,
    /// One label per absent required field.
    pub missing_fields: Vec<String>,
    /// One label per absent optional field.
    pub notes: Vec<String>,
    /// One citation per source chunk, in document order.
    pub citations: Vec<Citation>,
    pub provenance: Vec<FieldProvenance>,
}

impl ExtractionResult {
    /// Labels of required fields that currently have no value.
    pub fn missing_required(&self) -> Vec<String> {
        let c = &self.company;
        let checks = [
            (field::COMPANY_NAME, is_present(&c.name)),
            (field::LEGAL_FORM, is_present(&c.form)),
            (field::JURISDICTION, is_present(&c.jurisdiction)),
            (field::REGISTERED_ADDRESS, is_present(&c.registered_address)),
            (field::COMMERCIAL_LICENSE, is_present(&c.commercial_license)),
            (field::DIRECTORS, has_named(&self.directors)),
            (field::SHAREHOLDERS, has_named(&self.shareholders)),
        ];
        absent_labels(&checks)
    }

    /// Labels of optional fields that currently have no value.
    pub fn missing_optional(&self) -> Vec<String> {
        let q = &self.quorum;
        let f = &self.formalities;
        let checks = [
            (field::BOARD_QUORUM, is_present(&q.board)),
            (field::SHAREHOLDER_QUORUM, is_present(&q.shareholder)),
            (field::MAJORITY_THRESHOLD, is_present(&q.majority)),
            (field::CASTING_VOTE, is_present(&q.casting_vote)),
            (
                field::FINANCIAL_THRESHOLDS,
                is_present(&self.authority.financial_thresholds),
            ),
            (field::NOTICE_PERIOD, is_present(&f.notice_period)),
            (field::MEETING_LOCATION, is_present(&f.meeting_location)),
            (field::CHAIRPERSON, is_present(&f.chairperson)),
            (field::LANGUAGE, is_present(&f.language)),
            (field::SHARE_CAPITAL, is_present(&self.company.share_capital)),
            (
                field::OBJECTS,
                self.company.objects.iter().any(|o| !o.trim().is_empty()),
            ),
        ];
        absent_labels(&checks)
    }

    /// Recompute `missing_fields` and `notes` from the current field values,
    /// and set each party's role from the list it sits in.
    pub fn refresh(&mut self) {
        for party in &mut self.directors {
            party.role = PartyRole::Director;
        }
        for party in &mut self.shareholders {
            party.role = PartyRole::Shareholder;
        }
        self.missing_fields = self.missing_required();
        self.notes = self.missing_optional();
        tracing::debug!(
            missing = self.missing_fields.len(),
            notes = self.notes.len(),
            "refreshed extraction aggregates"
        );
    }

    /// Names of directors, skipping blank entries.
    pub fn director_names(&self) -> Vec<&str> {
        self.directors.iter().filter_map(Party::display_name).collect()
    }

    /// Names of shareholders, skipping blank entries.
    pub fn shareholder_names(&self) -> Vec<&str> {
        self.shareholders.iter().filter_map(Party::display_name).collect()
    }
}

// ── Helpers ──

fn is_present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn has_named(parties: &[Party]) -> bool {
    parties.iter().any(|p| p.display_name().is_some())
}

fn absent_labels(checks: &[(&str, bool)]) -> Vec<String> {
    checks
        .iter()
        .filter(|(_, present)| !present)
        .map(|(label, _)| label.to_string())
        .collect()
}
