//! Structured extraction over chunked company documents.
//!
//! Scalar fields come from [`RULES`] applied to the chunk bodies joined
//! with single spaces. Parties and authority clauses are read sentence by
//! sentence from the same text. Email `From:`/`To:` headers yield
//! correspondents, and chunk headings yield the key clause list.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use draftlaw_core::{
    AuthorityProfile, CompanyRecord, Correspondent, CorrespondentRole, DocumentChunk,
    DocumentType, ExtractionResult, FieldProvenance, Formalities, Party, PartyRole,
    PipelineConfig, QuorumRules, split_sentences,
};

use crate::rules::{FieldRule, RULES};

static DIRECTOR_ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:directors?|managers?|authori[sz]ed signator(?:y|ies))\b")
        .expect("director role pattern is valid")
});

static SHAREHOLDER_ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:shareholders?|members?)\b").expect("shareholder role pattern is valid")
});

static BOARD_POWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:board|directors?|managers?)\b.*\b(?:powers?|authority|approve|authori[sz]e)")
        .expect("board power pattern is valid")
});

/// Board members are not shareholders, so bare "members" does not count.
static SHAREHOLDER_MATTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:shareholders?|general assembly|members'? (?:meetings?|resolutions?))\b.*\b(?:reserved|approval|approve|authority|consent)",
    )
    .expect("shareholder matter pattern is valid")
});

static PROHIBITED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:prohibited|shall not|may not)\b").expect("prohibited pattern is valid")
});

static ARTICLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\barticles\b").expect("articles pattern is valid"));

static MEMORANDUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bmemorandum\b").expect("memorandum pattern is valid"));

static OBJECTS_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bobject(?:s|ives?)\b").expect("objects heading pattern is valid"));

/// Header keywords a correspondent name can run into once lines are joined.
const HEADER_WORDS: &[&str] = &["From", "To", "Cc", "Bcc", "Subject", "Date", "Sent", "Re"];

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:\d{1,2}(?:st|nd|rd|th)?\s+(?:january|february|march|april|may|june|july|august|september|october|november|december),?\s+\d{4}|\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{4})\b",
    )
    .expect("date pattern is valid")
});

/// Rule-based extractor. Stateless apart from its configuration, so one
/// instance can serve any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: PipelineConfig,
}

impl Extractor {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Build an [`ExtractionResult`] from chunks. Never fails: anything not
    /// found is left empty and listed in `missing_fields` or `notes`.
    pub fn extract(&self, chunks: &[DocumentChunk]) -> ExtractionResult {
        let corpus = Corpus::new(chunks);
        let rules = &*RULES;
        let mut provenance = Vec::new();
        let mut find = |rule: &FieldRule| corpus.find(rule, &mut provenance);

        let company = CompanyRecord {
            name: find(&rules.company_name),
            form: find(&rules.legal_form),
            jurisdiction: find(&rules.jurisdiction),
            registered_address: find(&rules.registered_address),
            commercial_license: find(&rules.commercial_license),
            share_capital: find(&rules.share_capital),
            objects: objects(chunks, &corpus.text),
        };
        let quorum = QuorumRules {
            board: find(&rules.board_quorum),
            shareholder: find(&rules.shareholder_quorum),
            majority: find(&rules.majority_threshold),
            casting_vote: find(&rules.casting_vote),
        };
        let formalities = Formalities {
            notice_period: find(&rules.notice_period),
            meeting_location: find(&rules.meeting_location),
            chairperson: find(&rules.chairperson),
            language: find(&rules.language),
        };
        let financial_thresholds = find(&rules.financial_thresholds);

        let (directors, shareholders) = self.read_parties(&corpus.text);
        let authority = AuthorityProfile {
            financial_thresholds,
            ..self.classify_authority(&corpus.text)
        };

        let mut result = ExtractionResult {
            document_type: detect_document_type(&corpus.text),
            company,
            directors,
            shareholders,
            quorum,
            authority,
            formalities,
            key_dates: key_dates(&corpus.text),
            key_clauses: key_clauses(chunks),
            governance_notes: governance_notes(&corpus.text),
            correspondents: correspondents(&corpus.text),
            missing_fields: Vec::new(),
            notes: Vec::new(),
            citations: chunks.iter().map(DocumentChunk::citation).collect(),
            provenance,
        };
        result.refresh();

        info!(
            chunks = chunks.len(),
            directors = result.directors.len(),
            shareholders = result.shareholders.len(),
            correspondents = result.correspondents.len(),
            missing = result.missing_fields.len(),
            document_type = result.document_type.as_str(),
            "extraction complete"
        );
        result
    }

    /// Directors and shareholders, one per qualifying sentence.
    ///
    /// A sentence qualifies for a role if it mentions the role and names a
    /// titled person. Each list stops at `party_cap` distinct names.
    fn read_parties(&self, text: &str) -> (Vec<Party>, Vec<Party>) {
        let cap = self.config.party_cap;
        let mut directors: Vec<Party> = Vec::new();
        let mut shareholders: Vec<Party> = Vec::new();

        for sentence in split_sentences(text) {
            let is_director = DIRECTOR_ROLE.is_match(sentence);
            let is_shareholder = SHAREHOLDER_ROLE.is_match(sentence);
            if !is_director && !is_shareholder {
                continue;
            }
            let Some(name) = RULES.party_name.find(sentence) else {
                debug!(sentence, "role sentence without a titled name");
                continue;
            };
            if is_director && directors.len() < cap && !is_listed(&directors, &name) {
                directors.push(read_party(PartyRole::Director, &name, sentence));
            }
            if is_shareholder && shareholders.len() < cap && !is_listed(&shareholders, &name) {
                shareholders.push(read_party(PartyRole::Shareholder, &name, sentence));
            }
        }
        (directors, shareholders)
    }

    /// Board powers, shareholder matters, and prohibitions by keyword.
    fn classify_authority(&self, text: &str) -> AuthorityProfile {
        let c = &self.config;
        let mut profile = AuthorityProfile::default();
        for sentence in split_sentences(text) {
            push_capped(&mut profile.board_powers, c.board_power_cap, &BOARD_POWER, sentence);
            push_capped(
                &mut profile.shareholder_matters,
                c.shareholder_matter_cap,
                &SHAREHOLDER_MATTER,
                sentence,
            );
            push_capped(
                &mut profile.prohibited_actions,
                c.prohibited_action_cap,
                &PROHIBITED,
                sentence,
            );
        }
        profile
    }
}

/// Extract with the default configuration.
pub fn extract(chunks: &[DocumentChunk]) -> ExtractionResult {
    Extractor::default().extract(chunks)
}

/// Classify the documents by which constitutional instruments they mention.
pub fn detect_document_type(text: &str) -> DocumentType {
    match (ARTICLES.is_match(text), MEMORANDUM.is_match(text)) {
        (true, true) => DocumentType::ArticlesAndMemorandum,
        (true, false) => DocumentType::Articles,
        (false, true) => DocumentType::Memorandum,
        (false, false) => DocumentType::Unclassified,
    }
}

/// Dates mentioned anywhere, de-duplicated and sorted.
pub fn key_dates(text: &str) -> Vec<String> {
    DATE.find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Business objects from labelled lists, or else the sentences of an
/// objects article.
pub fn objects(chunks: &[DocumentChunk], text: &str) -> Vec<String> {
    let labelled: Vec<String> = RULES.objects.all_matches(text).into_iter().map(|e| e.value).collect();
    if !labelled.is_empty() {
        return labelled;
    }
    let mut objects: Vec<String> = Vec::new();
    for chunk in chunks.iter().filter(|c| OBJECTS_HEADING.is_match(&c.heading)) {
        for sentence in split_sentences(&chunk.body) {
            let object = sentence.trim_end_matches(['.', ';']).trim();
            if !object.is_empty() && !objects.iter().any(|o| o == object) {
                objects.push(object.to_string());
            }
        }
    }
    objects
}

/// Chunk headings in document order, each listed once.
pub fn key_clauses(chunks: &[DocumentChunk]) -> Vec<String> {
    let mut clauses: Vec<String> = Vec::new();
    for heading in chunks.iter().map(|c| c.heading.as_str()).filter(|h| !h.is_empty()) {
        if !clauses.iter().any(|c| c == heading) {
            clauses.push(heading.to_string());
        }
    }
    clauses
}

/// One note per governance topic the text mentions.
pub fn governance_notes(text: &str) -> Vec<String> {
    RULES.governance.iter().filter_map(|rule| rule.find(text)).collect()
}

/// Senders and recipients from email headers, in the order they appear.
pub fn correspondents(text: &str) -> Vec<Correspondent> {
    let rules = &*RULES;
    let mut found: Vec<(usize, Correspondent)> = Vec::new();
    for (rule, role) in [
        (&rules.sender, CorrespondentRole::Sender),
        (&rules.recipient, CorrespondentRole::Recipient),
    ] {
        for m in rule.all_matches(text) {
            let name = strip_header_tail(&m.value);
            let listed = found.iter().any(|(_, c)| c.name == name && c.role == role);
            if !name.is_empty() && !listed {
                found.push((m.offset, Correspondent { name, role }));
            }
        }
    }
    found.sort_by_key(|(offset, _)| *offset);
    found.into_iter().map(|(_, c)| c).collect()
}

// ── Helpers ──

fn strip_header_tail(value: &str) -> String {
    let mut words: Vec<&str> = value.split_whitespace().collect();
    while words.last().is_some_and(|w| HEADER_WORDS.contains(w)) {
        words.pop();
    }
    words.join(" ")
}

/// Chunk bodies joined into one searchable text, with the offset each
/// chunk starts at.
struct Corpus<'a> {
    chunks: &'a [DocumentChunk],
    text: String,
    starts: Vec<usize>,
}

impl<'a> Corpus<'a> {
    fn new(chunks: &'a [DocumentChunk]) -> Self {
        let mut text = String::new();
        let mut starts = Vec::with_capacity(chunks.len());
        for (i, chunk) in chunks.iter().enumerate() {
            if i > 0 {
                text.push(' ');
            }
            starts.push(text.len());
            text.push_str(&chunk.body);
        }
        Self {
            chunks,
            text,
            starts,
        }
    }

    fn chunk_at(&self, offset: usize) -> Option<&'a DocumentChunk> {
        let idx = self.starts.partition_point(|&s| s <= offset).checked_sub(1)?;
        self.chunks.get(idx)
    }

    /// Apply `rule` and record which chunk the value came from.
    fn find(&self, rule: &FieldRule, provenance: &mut Vec<FieldProvenance>) -> Option<String> {
        let found = rule.first_match(&self.text)?;
        if let Some(chunk) = self.chunk_at(found.offset) {
            provenance.push(FieldProvenance {
                field: rule.label.to_string(),
                heading: chunk.heading.clone(),
                source: chunk.source.clone(),
            });
        }
        debug!(field = rule.label, value = %found.value, "matched field");
        Some(found.value)
    }
}

fn read_party(role: PartyRole, name: &str, sentence: &str) -> Party {
    let rules = &*RULES;
    let mut party = Party::named(role, name);
    party.id_number = rules.id_number.find(sentence);
    party.nationality = rules.nationality.find(sentence);
    party.power_of_attorney = rules.power_of_attorney.find(sentence);
    party.source_sentence = sentence.to_string();
    match role {
        PartyRole::Shareholder => {
            party.ownership = rules.ownership.find(sentence);
        }
        PartyRole::Director => {
            party.appointment_method = rules.appointment_method.find(sentence);
            party.signing_authority = rules.signing_authority.find(sentence);
        }
    }
    party
}

fn is_listed(parties: &[Party], name: &str) -> bool {
    parties.iter().any(|p| p.name.as_deref() == Some(name))
}

fn push_capped(list: &mut Vec<String>, cap: usize, test: &Regex, sentence: &str) {
    if list.len() < cap && test.is_match(sentence) {
        list.push(sentence.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk_articles;
    use draftlaw_core::{SourceDocument, field};

    const AOA: &str = "\
Articles of Association of Al Noor Technologies L.L.C.
Article 1 - Name
Company Name: Al Noor Technologies.
Article 2 - Legal Form
The Company is a Limited Liability Company incorporated in the Emirate of Dubai.
Article 3 - Registered Office
Registered address: Office 1204, Marina Plaza, Dubai Marina. Commercial License No. 784512.
Article 4 - Shareholders
Shareholders: Mr. Ahmed Al Farsi (UAE nationality, Emirates ID 784-1987-1234567-1, 60%).
Dr. Sara Khan, nationality: Indian, passport no. Z1234567, holds 40% as a member.
Article 5 - Management
The Company shall be managed by a manager.
Manager: Mrs. Layla Haddad, appointed by the general assembly, sole signatory.
Article 6 - Board
The board has authority to approve contracts exceeding AED 500,000 only with shareholder approval.
Board quorum: two directors present. The chairperson has a casting vote.
Article 7 - Reserved Matters
The following matters are reserved for shareholder approval: amendment of these Articles.
The manager shall not pledge company assets.
Dated 18 July 2025.";

    fn chunk(body: &str) -> DocumentChunk {
        DocumentChunk {
            heading: String::new(),
            body: body.to_string(),
            source: "manual input".into(),
        }
    }

    fn aoa_chunks() -> Vec<DocumentChunk> {
        chunk_articles(&[SourceDocument::new("aoa.txt", AOA)])
    }

    // ── Scenarios ──

    #[test]
    fn shareholder_read_from_article_sentence() {
        let result = extract(&[chunk(
            "Article 4 - Shareholders: Mr. Ahmed Al Farsi (UAE nationality, Emirates ID 784-1987-1234567-1, 60%).",
        )]);

        assert_eq!(result.shareholders.len(), 1);
        assert!(result.directors.is_empty());
        let holder = &result.shareholders[0];
        assert_eq!(holder.role, PartyRole::Shareholder);
        assert!(holder.name.as_deref().unwrap().starts_with("Mr. Ahmed Al Farsi"));
        assert_eq!(holder.ownership.as_deref(), Some("60%"));
        assert!(holder.nationality.as_deref().unwrap().contains("UAE nationality"));
        assert_eq!(holder.id_number.as_deref(), Some("784-1987-1234567-1"));
    }

    #[test]
    fn full_articles_populate_the_record() {
        let result = extract(&aoa_chunks());

        assert_eq!(result.document_type, DocumentType::Articles);
        let c = &result.company;
        assert_eq!(c.name.as_deref(), Some("Al Noor Technologies"));
        assert_eq!(c.form.as_deref(), Some("Limited Liability Company"));
        assert_eq!(c.jurisdiction.as_deref(), Some("Emirate of Dubai"));
        assert_eq!(
            c.registered_address.as_deref(),
            Some("Office 1204, Marina Plaza, Dubai Marina")
        );
        assert_eq!(c.commercial_license.as_deref(), Some("784512"));

        assert_eq!(result.shareholder_names(), vec!["Mr. Ahmed Al Farsi", "Dr. Sara Khan"]);
        assert_eq!(result.shareholders[1].nationality.as_deref(), Some("Indian"));
        assert_eq!(result.shareholders[1].id_number.as_deref(), Some("Z1234567"));
        assert_eq!(result.shareholders[1].ownership.as_deref(), Some("40%"));

        assert_eq!(result.director_names(), vec!["Mrs. Layla Haddad"]);
        let manager = &result.directors[0];
        assert_eq!(manager.appointment_method.as_deref(), Some("Appointed by shareholders"));
        assert_eq!(manager.signing_authority.as_deref(), Some("sole signatory"));
        assert_eq!(manager.ownership, None);

        assert_eq!(result.quorum.board.as_deref(), Some("two directors present"));
        assert_eq!(
            result.quorum.casting_vote.as_deref(),
            Some("Chairperson has casting vote")
        );
        assert_eq!(result.authority.financial_thresholds.as_deref(), Some("AED 500,000"));
        assert_eq!(result.key_dates, vec!["18 July 2025"]);
        assert!(result.missing_fields.is_empty(), "{:?}", result.missing_fields);
    }

    #[test]
    fn authority_lists_are_independent() {
        let result = extract(&aoa_chunks());
        let a = &result.authority;

        let approval = "The board has authority to approve contracts exceeding AED 500,000 only with shareholder approval.";
        assert_eq!(a.board_powers, vec![approval]);
        assert!(a.shareholder_matters.iter().any(|s| s == approval));
        assert!(
            a.shareholder_matters
                .iter()
                .any(|s| s.starts_with("The following matters are reserved"))
        );
        assert_eq!(a.prohibited_actions, vec!["The manager shall not pledge company assets."]);
    }

    // ── Properties ──

    #[test]
    fn extraction_is_deterministic() {
        let chunks = aoa_chunks();
        assert_eq!(extract(&chunks), extract(&chunks));
    }

    #[test]
    fn every_absent_required_field_reported_once() {
        let result = extract(&[]);
        assert_eq!(
            result.missing_fields,
            vec![
                field::COMPANY_NAME,
                field::LEGAL_FORM,
                field::JURISDICTION,
                field::REGISTERED_ADDRESS,
                field::COMMERCIAL_LICENSE,
                field::DIRECTORS,
                field::SHAREHOLDERS,
            ]
        );
        assert_eq!(result.notes.len(), 11);

        let partial = extract(&[chunk("Company Name: Al Noor Technologies.")]);
        assert!(!partial.missing_fields.iter().any(|f| f == field::COMPANY_NAME));
        assert_eq!(partial.missing_fields.len(), 6);
    }

    #[test]
    fn authority_lists_only_grow_with_more_sentences() {
        let base = "The board may approve budgets. Shareholder approval is reserved for mergers.";
        let more = format!("{base} The board has power to open branches. Directors shall not borrow.");

        let before = extract(&[chunk(base)]).authority;
        let after = extract(&[chunk(&more)]).authority;

        for (small, large) in [
            (&before.board_powers, &after.board_powers),
            (&before.shareholder_matters, &after.shareholder_matters),
            (&before.prohibited_actions, &after.prohibited_actions),
        ] {
            assert!(small.iter().all(|s| large.contains(s)));
            assert!(large.len() >= small.len());
        }
        assert_eq!(after.board_powers.len(), 2);
    }

    #[test]
    fn authority_lists_respect_caps() {
        let text = (1..=10)
            .map(|n| format!("The board has power number {n}."))
            .collect::<Vec<_>>()
            .join(" ");
        let result = extract(&[chunk(&text)]);
        assert_eq!(result.authority.board_powers.len(), 6);
        assert_eq!(result.authority.board_powers[0], "The board has power number 1.");
    }

    // ── Parties ──

    #[test]
    fn role_sentence_without_titled_name_is_dropped() {
        let result = extract(&[chunk(
            "The manager shall be appointed by the shareholders. Director: ahmed al farsi.",
        )]);
        assert!(result.directors.is_empty());
        assert!(result.shareholders.is_empty());
    }

    #[test]
    fn party_cap_is_configurable() {
        let text = ["Ahmed", "Bilal", "Karim", "Omar", "Rashid", "Samir", "Tariq", "Yousef"]
            .iter()
            .map(|n| format!("Director: Mr. {n} Haddad."))
            .collect::<Vec<_>>()
            .join(" ");
        let chunks = [chunk(&text)];

        assert_eq!(extract(&chunks).directors.len(), 6);

        let narrow = Extractor::new(PipelineConfig {
            party_cap: 2,
            ..PipelineConfig::default()
        });
        assert_eq!(narrow.extract(&chunks).director_names(), vec!["Mr. Ahmed Haddad", "Mr. Bilal Haddad"]);
    }

    #[test]
    fn repeated_names_are_listed_once() {
        let result = extract(&[chunk(
            "Manager: Mr. Omar Haddad. The manager Mr. Omar Haddad holds a power of attorney.",
        )]);
        assert_eq!(result.director_names(), vec!["Mr. Omar Haddad"]);
    }

    #[test]
    fn power_of_attorney_marked_on_file() {
        let result = extract(&[chunk("Mr. Omar Haddad, manager, acts under a power of attorney.")]);
        assert_eq!(result.directors[0].power_of_attorney.as_deref(), Some("On file"));
    }

    // ── Provenance and supplements ──

    #[test]
    fn provenance_points_at_source_chunk() {
        let result = extract(&aoa_chunks());
        let name = result
            .provenance
            .iter()
            .find(|p| p.field == field::COMPANY_NAME)
            .unwrap();
        assert_eq!(name.heading, "Article 1 Name");
        assert_eq!(name.source, "aoa.txt");

        let license = result
            .provenance
            .iter()
            .find(|p| p.field == field::COMMERCIAL_LICENSE)
            .unwrap();
        assert_eq!(license.heading, "Article 3 Registered Office");
    }

    #[test]
    fn one_citation_per_chunk() {
        let chunks = aoa_chunks();
        let result = extract(&chunks);
        assert_eq!(result.citations.len(), chunks.len());
        assert_eq!(result.citations[1].heading, "Article 1 Name");
    }

    #[test]
    fn document_type_detection() {
        assert_eq!(detect_document_type("Memorandum of Association"), DocumentType::Memorandum);
        assert_eq!(
            detect_document_type("These Articles and the Memorandum"),
            DocumentType::ArticlesAndMemorandum
        );
        assert_eq!(detect_document_type("Board minutes"), DocumentType::Unclassified);
    }

    #[test]
    fn board_members_are_not_shareholder_matters() {
        let result = extract(&[chunk("The board members have authority to approve the annual budget.")]);
        assert!(result.authority.shareholder_matters.is_empty());
        assert_eq!(result.authority.board_powers.len(), 1);

        let meeting = extract(&[chunk("A members' meeting must approve any merger.")]);
        assert_eq!(meeting.authority.shareholder_matters.len(), 1);
    }

    #[test]
    fn share_capital_and_objects_from_articles() {
        let result = extract(&chunk_articles(&[SourceDocument::new(
            "moa.txt",
            "Memorandum of Association\n\
             Article 2 - Objects\n\
             Trading in computer software. Information technology consultancy.\n\
             Article 3 - Capital\n\
             The share capital of the Company is AED 300,000 divided into 300 shares.",
        )]));
        assert_eq!(result.company.share_capital.as_deref(), Some("AED 300,000"));
        assert_eq!(
            result.company.objects,
            vec!["Trading in computer software", "Information technology consultancy"]
        );
        assert!(result.provenance.iter().any(|p| p.field == field::SHARE_CAPITAL
            && p.heading == "Article 3 Capital"));
        assert!(!result.notes.iter().any(|n| n == field::SHARE_CAPITAL || n == field::OBJECTS));
    }

    #[test]
    fn labelled_objects_take_precedence() {
        let chunks = [DocumentChunk {
            heading: "Article 2 Objects".into(),
            body: "Objects: real estate brokerage. Other text.".into(),
            source: "aoa.txt".into(),
        }];
        assert_eq!(objects(&chunks, &chunks[0].body), vec!["real estate brokerage"]);
    }

    #[test]
    fn key_clauses_list_headings_once() {
        let clauses = extract(&aoa_chunks()).key_clauses;
        assert_eq!(clauses.first().map(String::as_str), Some("Article 1 Name"));
        assert_eq!(clauses.len(), 7);
        assert_eq!(key_clauses(&[chunk("No heading here.")]), Vec::<String>::new());
    }

    #[test]
    fn governance_notes_follow_keywords() {
        let result = extract(&aoa_chunks());
        assert_eq!(
            result.governance_notes,
            vec![
                "Quorum requirements mentioned.",
                "Director appointment/removal provisions present.",
            ]
        );
        assert!(governance_notes("Company Name: Al Noor.").is_empty());
    }

    #[test]
    fn email_headers_become_correspondents() {
        let result = extract(&[chunk(
            "From: Ahmed Al Farsi <ahmed@alnoor.ae> To: Mrs. Layla Haddad Subject: Branch opening \
             Please open a branch in Abu Dhabi. From: Ahmed Al Farsi <ahmed@alnoor.ae>",
        )]);
        assert_eq!(
            result.correspondents,
            vec![
                Correspondent {
                    name: "Ahmed Al Farsi <ahmed@alnoor.ae>".into(),
                    role: CorrespondentRole::Sender,
                },
                Correspondent {
                    name: "Mrs. Layla Haddad".into(),
                    role: CorrespondentRole::Recipient,
                },
            ]
        );
    }

    #[test]
    fn key_dates_are_sorted_and_unique() {
        let dates = key_dates("Signed 2025-07-18 and 3 March 2024; again on 2025-07-18.");
        assert_eq!(dates, vec!["2025-07-18", "3 March 2024"]);
    }
}
