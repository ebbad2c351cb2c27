//! Instruction analysis: resolution type, authority, actions, warnings.

use tracing::info;

use draftlaw_core::{
    AuthorityChecks, AuthorityThreshold, ExtractionResult, Override, PipelineConfig,
    ReasoningResult, ResolutionType, normalize_text, split_sentences,
};

use crate::actions::{ACTION_PLACEHOLDER, formalize_action};
use crate::authorities::suggest_authorities;
use crate::rules::{AUTHORITY, RESOLUTION_TYPE};

/// Advisory messages surfaced to the operator.
pub mod warning {
    pub const NO_INSTRUCTIONS: &str =
        "No instructions provided. Please input meeting minutes or instructions.";
    pub const NO_SHAREHOLDERS: &str =
        "Shareholder resolution requested but no shareholders detected in documents.";
    pub const NO_DIRECTORS: &str =
        "Board resolution requested but no directors/managers detected in documents.";
    pub const PROHIBITED_ACTIONS: &str = "Check prohibited actions clauses for potential conflict.";

    pub fn missing_field(label: &str) -> String {
        format!("{label} not detected; confirm manually.")
    }
}

/// Operator overrides; both default to automatic classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub resolution_type: Override<ResolutionType>,
    pub authority: Override<AuthorityThreshold>,
}

#[derive(Debug, Clone, Default)]
pub struct Reasoner {
    config: PipelineConfig,
}

impl Reasoner {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Classify `instructions` against the extracted record.
    ///
    /// Missing-field warnings are recomputed from the record's current
    /// values, so hand edits made after extraction are honoured even if
    /// [`ExtractionResult::refresh`] was not called.
    pub fn analyze(
        &self,
        instructions: &str,
        extraction: &ExtractionResult,
        overrides: Overrides,
    ) -> ReasoningResult {
        let normalized = normalize_text(instructions);
        let sentences: Vec<String> = split_sentences(&normalized).map(str::to_string).collect();

        let actions = if sentences.is_empty() {
            vec![ACTION_PLACEHOLDER.to_string()]
        } else {
            sentences.iter().map(|s| formalize_action(s)).collect()
        };

        let resolution_type = overrides
            .resolution_type
            .resolve(|| RESOLUTION_TYPE.classify(&normalized, extraction));
        let required_authority = overrides
            .authority
            .resolve(|| AUTHORITY.classify(&normalized, extraction));

        let warnings = warnings(&normalized, resolution_type, extraction);

        let authority = &extraction.authority;
        let authority_checks = AuthorityChecks {
            board_powers: authority.board_powers.clone(),
            shareholder_matters: authority.shareholder_matters.clone(),
            financial_thresholds: authority.financial_thresholds.clone(),
            prohibited_actions: authority.prohibited_actions.clone(),
            required_authority,
        };

        info!(
            resolution_type = resolution_type.as_str(),
            required_authority = required_authority.as_str(),
            actions = actions.len(),
            warnings = warnings.len(),
            "instructions analyzed"
        );

        ReasoningResult {
            resolution_type,
            required_authority,
            actions,
            instruction_sentences: sentences,
            warnings,
            authority_checks,
            references: extraction.citations.clone(),
            legal_framework: self.config.legal_framework.clone(),
            suggested_authorities: suggest_authorities(
                extraction.document_type,
                &self.config.legal_framework,
            ),
        }
    }
}

/// Analyze with the default configuration.
pub fn analyze(
    instructions: &str,
    extraction: &ExtractionResult,
    overrides: Overrides,
) -> ReasoningResult {
    Reasoner::default().analyze(instructions, extraction, overrides)
}

/// Independent checks, each appending at most one entry except the
/// per-field ones.
fn warnings(
    normalized: &str,
    resolution_type: ResolutionType,
    extraction: &ExtractionResult,
) -> Vec<String> {
    let mut warnings = Vec::new();
    if normalized.is_empty() {
        warnings.push(warning::NO_INSTRUCTIONS.to_string());
    }
    if resolution_type.requires_shareholders() && extraction.shareholder_names().is_empty() {
        warnings.push(warning::NO_SHAREHOLDERS.to_string());
    }
    if resolution_type.requires_directors() && extraction.director_names().is_empty() {
        warnings.push(warning::NO_DIRECTORS.to_string());
    }
    warnings.extend(
        extraction
            .missing_required()
            .iter()
            .map(|label| warning::missing_field(label)),
    );
    if !extraction.authority.prohibited_actions.is_empty() {
        warnings.push(warning::PROHIBITED_ACTIONS.to_string());
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftlaw_core::{CompanyRecord, Party, PartyRole, field};

    fn complete_record() -> ExtractionResult {
        let mut record = ExtractionResult {
            company: CompanyRecord {
                name: Some("Al Noor Technologies".into()),
                form: Some("Limited Liability Company".into()),
                jurisdiction: Some("Dubai".into()),
                registered_address: Some("Office 1204, Marina Plaza".into()),
                commercial_license: Some("784512".into()),
                ..CompanyRecord::default()
            },
            directors: vec![Party::named(PartyRole::Director, "Mrs. Layla Haddad")],
            shareholders: vec![Party::named(PartyRole::Shareholder, "Mr. Ahmed Al Farsi")],
            ..ExtractionResult::default()
        };
        record.refresh();
        record
    }

    fn fixed_type(t: ResolutionType) -> Overrides {
        Overrides {
            resolution_type: Override::Fixed(t),
            ..Overrides::default()
        }
    }

    // ── Scenarios ──

    #[test]
    fn empty_instructions_yield_placeholder_action() {
        let result = analyze("", &complete_record(), Overrides::default());
        assert_eq!(result.actions, vec![ACTION_PLACEHOLDER]);
        assert!(result.instruction_sentences.is_empty());
        assert!(result.warnings.iter().any(|w| w == warning::NO_INSTRUCTIONS));
    }

    #[test]
    fn appoint_director_and_open_branch_is_board_business() {
        let result = analyze(
            "appoint director and open branch",
            &complete_record(),
            Overrides {
                resolution_type: "auto".parse().unwrap(),
                authority: "auto".parse().unwrap(),
            },
        );
        assert_eq!(result.resolution_type, ResolutionType::Board);
        assert_eq!(result.required_authority, AuthorityThreshold::StandardMajority);
        assert_eq!(result.actions.len(), 1);
        assert!(result.actions[0].contains("proposed branch"));
    }

    // ── Warnings ──

    #[test]
    fn shareholder_types_without_shareholders_warn() {
        let mut record = complete_record();
        record.shareholders.clear();

        for t in [ResolutionType::Shareholder, ResolutionType::SpecialShareholder] {
            let result = analyze("Approve the budget.", &record, fixed_type(t));
            assert!(result.warnings.iter().any(|w| w == warning::NO_SHAREHOLDERS), "{t}");
        }

        let board = analyze("Approve the budget.", &record, fixed_type(ResolutionType::Board));
        assert!(!board.warnings.iter().any(|w| w == warning::NO_SHAREHOLDERS));
    }

    #[test]
    fn board_type_without_directors_warns() {
        let mut record = complete_record();
        record.directors = vec![Party::named(PartyRole::Director, "  ")];
        let result = analyze("Approve the budget.", &record, fixed_type(ResolutionType::Board));
        assert!(result.warnings.iter().any(|w| w == warning::NO_DIRECTORS));
    }

    #[test]
    fn warnings_follow_check_order() {
        let mut record = ExtractionResult::default();
        record
            .authority
            .prohibited_actions
            .push("The manager shall not pledge assets.".into());

        let result = analyze(
            "  ",
            &record,
            fixed_type(ResolutionType::SpecialShareholder),
        );
        assert_eq!(result.warnings[0], warning::NO_INSTRUCTIONS);
        assert_eq!(result.warnings[1], warning::NO_SHAREHOLDERS);
        assert_eq!(result.warnings[2], warning::missing_field(field::COMPANY_NAME));
        assert_eq!(result.warnings.last().unwrap(), warning::PROHIBITED_ACTIONS);
        // 2 + 7 missing required fields + prohibited.
        assert_eq!(result.warnings.len(), 10);
    }

    #[test]
    fn missing_field_warnings_track_hand_edits() {
        let mut record = complete_record();
        record.company.commercial_license = None;
        // No refresh: the stale aggregate still says nothing is missing.
        assert!(record.missing_fields.is_empty());

        let result = analyze("Approve the budget.", &record, Overrides::default());
        assert_eq!(
            result.warnings,
            vec![warning::missing_field(field::COMMERCIAL_LICENSE)]
        );
    }

    #[test]
    fn complete_record_with_clear_instructions_has_no_warnings() {
        let result = analyze("Open a bank account.", &complete_record(), Overrides::default());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    // ── Overrides and output ──

    #[test]
    fn fixed_overrides_skip_classification() {
        let overrides = Overrides {
            resolution_type: Override::Fixed(ResolutionType::Shareholder),
            authority: Override::Fixed(AuthorityThreshold::Unanimous),
        };
        let result = analyze("Amend the articles by special resolution.", &complete_record(), overrides);
        assert_eq!(result.resolution_type, ResolutionType::Shareholder);
        assert_eq!(result.required_authority, AuthorityThreshold::Unanimous);
        assert_eq!(result.authority_checks.required_authority, AuthorityThreshold::Unanimous);
    }

    #[test]
    fn one_action_per_sentence() {
        let result = analyze(
            "Open a bank account.  Approve the 2024 accounts!",
            &complete_record(),
            Overrides::default(),
        );
        assert_eq!(
            result.instruction_sentences,
            vec!["Open a bank account.", "Approve the 2024 accounts!"]
        );
        assert_eq!(result.actions.len(), 2);
        assert_eq!(
            result.actions[1],
            "Approve the following action: Approve the 2024 accounts."
        );
    }

    #[test]
    fn legal_framework_comes_from_config() {
        let reasoner = Reasoner::new(PipelineConfig {
            legal_framework: "DIFC Companies Law No. 5 of 2018".into(),
            ..PipelineConfig::default()
        });
        let result = reasoner.analyze("Approve.", &complete_record(), Overrides::default());
        assert_eq!(result.legal_framework, "DIFC Companies Law No. 5 of 2018");
        assert_eq!(
            analyze("Approve.", &complete_record(), Overrides::default()).legal_framework,
            draftlaw_core::config::DEFAULT_LEGAL_FRAMEWORK
        );
    }

    #[test]
    fn references_are_extraction_citations() {
        let mut record = complete_record();
        record.citations.push(draftlaw_core::Citation {
            heading: "Article 6 Board".into(),
            source: "aoa.txt".into(),
        });
        let result = analyze("Approve.", &record, Overrides::default());
        assert_eq!(result.references, record.citations);
    }

    #[test]
    fn suggested_authorities_follow_document_type() {
        let mut record = complete_record();
        record.document_type = draftlaw_core::DocumentType::Articles;
        let result = analyze("Approve.", &record, Overrides::default());
        assert_eq!(result.suggested_authorities.len(), 1);
        assert!(result.suggested_authorities[0].starts_with(&result.legal_framework));
        assert!(result.suggested_authorities[0].contains("Articles provisions"));
    }
}
