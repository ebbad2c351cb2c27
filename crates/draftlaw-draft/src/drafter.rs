//! Render the resolution text.
//!
//! The draft always has the same five sections in the same order:
//! preamble, recitals, resolution body (with authority and compliance),
//! execution, and signatures. A value that is missing renders as a
//! bracketed placeholder, so a reviewer can see every gap at a glance.

use chrono::NaiveDate;
use tracing::debug;

use draftlaw_core::{ExtractionResult, MeetingDetails, ReasoningResult};

/// Recital lines quoted from the board-powers list.
const MAX_POWER_RECITALS: usize = 3;
/// Citations listed in the compliance section.
const MAX_REFERENCES: usize = 4;
const MAX_OBJECT_RECITALS: usize = 3;

pub const DATE_PLACEHOLDER: &str = "[Date]";
const SIGNATURE_LINE: &str = "____________________________";
const ESCALATION_NOTE: &str = "Note: If any ambiguity remains, escalate for shareholder approval or seek external legal confirmation.";

/// Render the full draft. Pure template substitution; never fails.
pub fn draft_resolution(
    extraction: &ExtractionResult,
    reasoning: &ReasoningResult,
    meeting: &MeetingDetails,
) -> String {
    let attendees = attendees(extraction, reasoning);
    debug!(
        resolution_type = reasoning.resolution_type.as_str(),
        attendees = attendees.len(),
        "rendering draft"
    );

    [
        preamble(extraction, reasoning),
        recitals(extraction, reasoning),
        resolution_body(reasoning),
        execution(extraction, meeting, &attendees),
        signatures(&attendees),
    ]
    .join("\n\n")
}

/// `2025-07-18` renders as `18 July 2025`; blank renders as [`DATE_PLACEHOLDER`].
/// Anything that is not an ISO date is kept as written.
pub fn format_meeting_date(date: Option<&str>) -> String {
    let Some(raw) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return DATE_PLACEHOLDER.to_string();
    };
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d %B %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Shareholders for a shareholder-type resolution, directors otherwise.
fn attendees<'a>(extraction: &'a ExtractionResult, reasoning: &ReasoningResult) -> Vec<&'a str> {
    let label = reasoning.resolution_type.as_str().to_lowercase();
    if label.contains("shareholder") {
        extraction.shareholder_names()
    } else {
        extraction.director_names()
    }
}

// ── Sections ──

fn preamble(extraction: &ExtractionResult, reasoning: &ReasoningResult) -> String {
    let company = &extraction.company;
    format!(
        "RESOLUTION OF THE {}\nOF {}\n(incorporated in the {})",
        reasoning.resolution_type.as_str().to_uppercase(),
        or_placeholder(&company.name, "Company name"),
        or_placeholder(&company.jurisdiction, "Jurisdiction"),
    )
}

fn recitals(extraction: &ExtractionResult, reasoning: &ReasoningResult) -> String {
    let company = &extraction.company;
    let powers = &reasoning.authority_checks.board_powers;
    let powers = if powers.is_empty() {
        "- [Authority references to be inserted]".to_string()
    } else {
        bullets(powers.iter().take(MAX_POWER_RECITALS).map(String::as_str))
    };

    let mut constitution = String::new();
    if let Some(capital) = present(&company.share_capital) {
        constitution.push_str(&format!("\n- The share capital of the Company is {capital}."));
    }
    if !company.objects.is_empty() {
        let objects = company
            .objects
            .iter()
            .take(MAX_OBJECT_RECITALS)
            .map(|o| o.trim().trim_end_matches('.'))
            .collect::<Vec<_>>()
            .join("; ");
        constitution.push_str(&format!("\n- The objects of the Company include: {objects}."));
    }

    format!(
        "WHEREAS:\n\
         - The Company is a {} holding Commercial License {} with registered address at {}.{constitution}\n\
         - The governing documents authorize the following:\n{powers}\n\
         - The meeting has been duly convened in accordance with notice and quorum requirements set out in the Articles of Association.",
        or_placeholder(&company.form, "Legal form"),
        or_placeholder(&company.commercial_license, "License number"),
        or_placeholder(&company.registered_address, "Registered address"),
    )
}

fn resolution_body(reasoning: &ReasoningResult) -> String {
    let references = reasoning
        .references
        .iter()
        .take(MAX_REFERENCES)
        .map(|c| c.display_label())
        .collect::<Vec<_>>()
        .join("; ");
    let references = if references.is_empty() {
        "[Insert Article references]".to_string()
    } else {
        references
    };
    let suggested = if reasoning.suggested_authorities.is_empty() {
        String::new()
    } else {
        format!(
            "\n- Suggested authorities: {}",
            reasoning.suggested_authorities.join(" ")
        )
    };

    format!(
        "IT IS RESOLVED THAT:\n{}\n\n\
         AUTHORITY & COMPLIANCE:\n\
         - Required authority: {}.\n\
         - Applicable legal framework: {}.{suggested}\n\
         - References: {references}.",
        bullets(reasoning.actions.iter().map(String::as_str)),
        reasoning.required_authority,
        reasoning.legal_framework,
    )
}

/// Meeting details fall back to the formalities found in the documents.
fn execution(extraction: &ExtractionResult, meeting: &MeetingDetails, attendees: &[&str]) -> String {
    let formalities = &extraction.formalities;
    let location = first_present(&meeting.location, &formalities.meeting_location)
        .unwrap_or("[Location]");
    let chairperson =
        first_present(&meeting.chairperson, &formalities.chairperson).unwrap_or("[Name]");
    let attendees = if attendees.is_empty() {
        "- [No attendees detected]".to_string()
    } else {
        bullets(attendees.iter().copied())
    };

    format!(
        "EXECUTION:\nSigned on {} at {location}.\nChairperson: {chairperson}\n\nAttendees:\n{attendees}",
        format_meeting_date(meeting.date.as_deref()),
    )
}

fn signatures(attendees: &[&str]) -> String {
    let lines = if attendees.is_empty() {
        format!("- [Name] {SIGNATURE_LINE}")
    } else {
        bullets(attendees.iter().map(|name| format!("{name} {SIGNATURE_LINE}")))
    };
    format!("SIGNATURES:\n{lines}\n\n{ESCALATION_NOTE}")
}

// ── Helpers ──

fn bullets<S: AsRef<str>>(items: impl Iterator<Item = S>) -> String {
    items
        .filter(|item| !item.as_ref().trim().is_empty())
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn first_present<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> Option<&'a str> {
    present(primary).or_else(|| present(fallback))
}

fn or_placeholder(value: &Option<String>, label: &str) -> String {
    present(value).map_or_else(|| format!("[{label} not provided]"), str::to_string)
}
