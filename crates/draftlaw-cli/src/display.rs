//! Vertical card display for extraction and reasoning records.
//!
//! Renders a record as grouped `label  value` rows. Sections with no
//! values are skipped entirely.

use draftlaw_core::{Correspondent, ExtractionResult, Party, ReasoningResult};

const MAX_LIST_ITEMS: usize = 10;

/// A titled group of rows; `None` values are left out.
struct Section<'a> {
    header: &'a str,
    rows: Vec<(&'a str, Option<String>)>,
}

impl<'a> Section<'a> {
    fn new(header: &'a str) -> Self {
        Self {
            header,
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: &'a str, value: Option<&str>) -> Self {
        self.rows.push((label, value.map(str::to_string)));
        self
    }

    fn list(mut self, label: &'a str, items: &[String]) -> Self {
        self.rows.push((label, join_list(items)));
        self
    }

    fn render(&self) -> Option<String> {
        let lines: Vec<String> = self
            .rows
            .iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| format!("  {label:<26} {v}")))
            .collect();
        if lines.is_empty() {
            return None;
        }
        Some(format!("{}\n{}\n", self.header, lines.join("\n")))
    }
}

// ── Public API ──

/// Print an extraction record as a card grouped by section.
pub fn print_extraction_card(extraction: &ExtractionResult) {
    print!("{}", extraction_card(extraction));
}

/// Print the classification summary and advisory warnings.
pub fn print_reasoning_card(reasoning: &ReasoningResult) {
    print!("{}", reasoning_card(reasoning));
}

/// Advisory lines for stderr, one per warning.
pub fn warning_lines(warnings: &[String]) -> Vec<String> {
    warnings.iter().map(|w| format!("  warning: {w}")).collect()
}

// ── Rendering ──

fn extraction_card(e: &ExtractionResult) -> String {
    let name = e.company.name.as_deref().unwrap_or("(unnamed company)");
    let mut out = format!("=== {name} ===\n{}\n\n", e.document_type.as_str());

    let c = &e.company;
    let q = &e.quorum;
    let f = &e.formalities;
    let a = &e.authority;
    let sections = [
        Section::new("Company")
            .row("legal form", c.form.as_deref())
            .row("jurisdiction", c.jurisdiction.as_deref())
            .row("registered address", c.registered_address.as_deref())
            .row("commercial license", c.commercial_license.as_deref())
            .row("share capital", c.share_capital.as_deref())
            .list("objects", &c.objects),
        party_section("Directors / Managers", &e.directors),
        party_section("Shareholders", &e.shareholders),
        Section::new("Quorum & Voting")
            .row("board quorum", q.board.as_deref())
            .row("shareholder quorum", q.shareholder.as_deref())
            .row("majority threshold", q.majority.as_deref())
            .row("casting vote", q.casting_vote.as_deref()),
        Section::new("Authority")
            .list("board powers", &a.board_powers)
            .list("shareholder matters", &a.shareholder_matters)
            .row("financial thresholds", a.financial_thresholds.as_deref())
            .list("prohibited actions", &a.prohibited_actions),
        Section::new("Formalities")
            .row("notice period", f.notice_period.as_deref())
            .row("meeting location", f.meeting_location.as_deref())
            .row("chairperson", f.chairperson.as_deref())
            .row("language", f.language.as_deref()),
        Section::new("Clauses & Governance")
            .list("key clauses", &e.key_clauses)
            .list("governance notes", &e.governance_notes),
        correspondence_section(&e.correspondents),
        Section::new("Review")
            .list("key dates", &e.key_dates)
            .list("missing fields", &e.missing_fields)
            .list("not found (optional)", &e.notes),
    ];
    for section in &sections {
        if let Some(text) = section.render() {
            out.push_str(&text);
            out.push('\n');
        }
    }
    out
}

fn party_section<'a>(header: &'a str, parties: &'a [Party]) -> Section<'a> {
    parties.iter().fold(Section::new(header), |section, p| {
        let mut details: Vec<String> = Vec::new();
        let fields = [
            ("ownership", &p.ownership),
            ("nationality", &p.nationality),
            ("id", &p.id_number),
            ("appointment", &p.appointment_method),
            ("signing", &p.signing_authority),
            ("poa", &p.power_of_attorney),
        ];
        for (label, value) in fields {
            if let Some(v) = value {
                details.push(format!("{label}: {v}"));
            }
        }
        let name = p.display_name().unwrap_or("(unnamed)");
        let value = if details.is_empty() {
            name.to_string()
        } else {
            format!("{name} ({})", details.join(", "))
        };
        section.row("name", Some(value.as_str()))
    })
}

fn correspondence_section(correspondents: &[Correspondent]) -> Section<'_> {
    correspondents.iter().fold(Section::new("Correspondence"), |section, c| {
        section.row(c.role.as_str(), Some(c.name.as_str()))
    })
}

fn reasoning_card(r: &ReasoningResult) -> String {
    let summary = Section::new("Classification")
        .row("resolution type", Some(r.resolution_type.as_str()))
        .row("required authority", Some(r.required_authority.as_str()))
        .row("legal framework", Some(r.legal_framework.as_str()))
        .list("suggested authorities", &r.suggested_authorities);
    let actions = Section::new("Actions").list("clauses", &r.actions);
    let warnings = Section::new("Warnings").list("warnings", &r.warnings);

    [summary, actions, warnings]
        .iter()
        .filter_map(Section::render)
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_list(items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let shown: Vec<&str> = items.iter().take(MAX_LIST_ITEMS).map(String::as_str).collect();
    // Continuation lines start in the value column.
    let mut text = shown.join(&format!("\n{:29}", ""));
    if items.len() > MAX_LIST_ITEMS {
        text.push_str(&format!(" (+{} more)", items.len() - MAX_LIST_ITEMS));
    }
    Some(text)
}
