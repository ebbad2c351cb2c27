//! Named extraction rules.
//!
//! A [`FieldRule`] is an ordered list of patterns for one field. The first
//! pattern that matches anywhere in the text wins, and each pattern states
//! what it yields through [`Capture`]. Patterns are case-insensitive unless
//! built with [`Pattern::case_sensitive`] (needed where capitalisation is
//! the signal, e.g. personal names). List-valued fields use
//! [`FieldRule::all_matches`] instead.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

use draftlaw_core::field;

/// What a matching pattern yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// The text of capture group `n`.
    Group(usize),
    /// The whole matched text.
    WholeMatch,
    /// A fixed value: the pattern is a presence test.
    Literal(&'static str),
}

#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    capture: Capture,
}

/// A value produced by a rule, with the byte offset it was found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub value: String,
    pub offset: usize,
}

impl Pattern {
    /// Case-insensitive pattern.
    ///
    /// # Panics
    ///
    /// If `pattern` is not a valid regex. Rules are built from literals, so
    /// this only fires on a programming error.
    pub fn new(pattern: &str, capture: Capture) -> Self {
        Self::build(pattern, true, capture)
    }

    /// Case-sensitive pattern.
    pub fn case_sensitive(pattern: &str, capture: Capture) -> Self {
        Self::build(pattern, false, capture)
    }

    fn build(pattern: &str, case_insensitive: bool, capture: Capture) -> Self {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .build()
            .unwrap_or_else(|e| panic!("invalid extraction pattern {pattern:?}: {e}"));
        Self { regex, capture }
    }

    /// Apply to `text`. Blank captures count as no match.
    pub fn apply(&self, text: &str) -> Option<Extracted> {
        self.regex.captures(text).and_then(|caps| self.extracted(&caps))
    }

    /// Every non-overlapping match in `text`, in order.
    pub fn apply_all(&self, text: &str) -> Vec<Extracted> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| self.extracted(&caps))
            .collect()
    }

    fn extracted(&self, caps: &Captures<'_>) -> Option<Extracted> {
        let (value, offset) = match self.capture {
            Capture::Group(n) => {
                let m = caps.get(n)?;
                (m.as_str(), m.start())
            }
            Capture::WholeMatch => {
                let m = caps.get(0)?;
                (m.as_str(), m.start())
            }
            Capture::Literal(value) => (value, caps.get(0)?.start()),
        };
        let value = clean_value(value);
        if value.is_empty() {
            return None;
        }
        Some(Extracted {
            value: value.to_string(),
            offset,
        })
    }
}

/// Ordered patterns for one field; first match wins.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Field label from [`draftlaw_core::field`].
    pub label: &'static str,
    patterns: Vec<Pattern>,
}

impl FieldRule {
    pub fn new(label: &'static str, patterns: Vec<Pattern>) -> Self {
        Self { label, patterns }
    }

    pub fn first_match(&self, text: &str) -> Option<Extracted> {
        self.patterns.iter().find_map(|p| p.apply(text))
    }

    pub fn find(&self, text: &str) -> Option<String> {
        self.first_match(text).map(|e| e.value)
    }

    /// Matches of every pattern, ordered by offset, each value kept once.
    pub fn all_matches(&self, text: &str) -> Vec<Extracted> {
        let mut found: Vec<Extracted> = self.patterns.iter().flat_map(|p| p.apply_all(text)).collect();
        found.sort_by_key(|e| e.offset);
        let mut seen = HashSet::new();
        found.retain(|e| seen.insert(e.value.clone()));
        found
    }
}

/// Every rule the extractor applies.
#[derive(Debug, Clone)]
pub struct RuleSet {
    // Company record, applied to the combined document text.
    pub company_name: FieldRule,
    pub legal_form: FieldRule,
    pub jurisdiction: FieldRule,
    pub registered_address: FieldRule,
    pub commercial_license: FieldRule,
    pub share_capital: FieldRule,
    /// List-valued: use [`FieldRule::all_matches`].
    pub objects: FieldRule,

    // Quorum, thresholds, and formalities.
    pub board_quorum: FieldRule,
    pub shareholder_quorum: FieldRule,
    pub majority_threshold: FieldRule,
    pub casting_vote: FieldRule,
    pub financial_thresholds: FieldRule,
    pub notice_period: FieldRule,
    pub meeting_location: FieldRule,
    pub chairperson: FieldRule,
    pub language: FieldRule,

    // Party details, applied to a single sentence.
    pub party_name: FieldRule,
    pub nationality: FieldRule,
    pub id_number: FieldRule,
    pub ownership: FieldRule,
    pub appointment_method: FieldRule,
    pub signing_authority: FieldRule,
    pub power_of_attorney: FieldRule,

    // Email headers, list-valued.
    pub sender: FieldRule,
    pub recipient: FieldRule,

    /// Presence tests, each yielding a fixed governance note.
    pub governance: Vec<FieldRule>,
}

/// Shared compiled rule set.
pub static RULES: Lazy<RuleSet> = Lazy::new(RuleSet::standard);

/// Free-text value: runs to the next full stop, semicolon, or line break.
const VALUE: &str = r"([^\n.;]+)";
const SEP: &str = r"[:\-\s]+";

/// Email address, `Name <address>`, or a capitalised name.
const CORRESPONDENT: &str = r"([^<>:\n]*?<[^<>\s]+@[^<>\s]+>|[\w.+\-]+@[\w\-]+(?:\.[\w\-]+)+|(?:(?:Mrs|Mr|Ms|Dr)\.?\s+)?[A-Z][\w'\-]*(?:\s+[A-Z][\w'\-]*)*)";

fn labelled(prefix: &str) -> Pattern {
    Pattern::new(&format!("{prefix}{SEP}{VALUE}"), Capture::Group(1))
}

fn header(name: &str) -> Pattern {
    Pattern::case_sensitive(&format!(r"\b(?i:{name})\s*:\s*{CORRESPONDENT}"), Capture::Group(1))
}

impl RuleSet {
    pub fn standard() -> Self {
        use Capture::{Group, Literal, WholeMatch};

        Self {
            company_name: FieldRule::new(
                field::COMPANY_NAME,
                vec![
                    labelled(r"company name"),
                    labelled(r"name of the company(?:\s+(?:is|shall be))?"),
                    Pattern::case_sensitive(
                        r"\b([A-Z][A-Za-z0-9&'\-]*(?:\s+[A-Z][A-Za-z0-9&'\-]*)*\s+(?:L\.L\.C|LLC|FZ-LLC|FZE|PJSC|Limited Liability Company|Private Limited|Limited|Ltd|LLP|Inc|Corporation))\b",
                        Group(1),
                    ),
                ],
            ),
            legal_form: FieldRule::new(
                field::LEGAL_FORM,
                vec![
                    Pattern::new(
                        r"\b(?:limited liability company|private joint stock company|public joint stock company|sole establishment|free zone (?:company|establishment)|fz-?llc|fze|llc)\b",
                        WholeMatch,
                    ),
                    Pattern::new(r"\bl\.l\.c\b", WholeMatch),
                ],
            ),
            jurisdiction: FieldRule::new(
                field::JURISDICTION,
                vec![
                    Pattern::new(
                        r"\b(?:jurisdiction|incorporated in(?: the)?|registered in(?: the)?)[:\-\s]+([^\n.;,]+)",
                        Group(1),
                    ),
                    Pattern::new(
                        r"\b(?:united arab emirates|uae|dubai|abu dhabi|sharjah|ajman|ras al khaimah|fujairah|umm al quwain)\b",
                        WholeMatch,
                    ),
                ],
            ),
            registered_address: FieldRule::new(
                field::REGISTERED_ADDRESS,
                vec![
                    labelled(r"registered (?:address|office)(?:\s+(?:is|shall be))?(?:\s+at)?"),
                    labelled(r"principal (?:office|place of business)(?:\s+(?:is|shall be))?(?:\s+at)?"),
                ],
            ),
            commercial_license: FieldRule::new(
                field::COMMERCIAL_LICENSE,
                vec![
                    Pattern::new(
                        r"(?:commercial|trade) licen[cs]e(?:\s+(?:no\.?|number))?[:\-\s#]*([A-Z0-9\-/]*\d[A-Z0-9\-/]*)",
                        Group(1),
                    ),
                    Pattern::new(
                        r"licen[cs]e (?:no\.?|number)[:\-\s#]*([A-Z0-9\-/]*\d[A-Z0-9\-/]*)",
                        Group(1),
                    ),
                ],
            ),
            share_capital: FieldRule::new(
                field::SHARE_CAPITAL,
                vec![
                    Pattern::new(
                        r"(?:share|authori[sz]ed|issued|paid[\- ]up) capital[^.;\n]{0,40}?((?:AED|USD|EUR|GBP|\$)\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|thousand))?)",
                        Group(1),
                    ),
                    labelled(r"(?:share|authori[sz]ed|issued) capital(?: of the company)?(?:\s+(?:is|shall be))?"),
                ],
            ),
            objects: FieldRule::new(
                field::OBJECTS,
                vec![Pattern::new(
                    r"\b(?:main objects|objectives|objects)(?: of the company)?\s*(?:[:\-]|\b(?:are|is|shall be|includes?)\b)\s*([^\n.;]+)",
                    Group(1),
                )],
            ),

            board_quorum: FieldRule::new(
                field::BOARD_QUORUM,
                vec![
                    labelled(r"board quorum"),
                    labelled(r"quorum (?:for|of) (?:the )?board(?: meetings?)?(?:\s+(?:is|shall be))?"),
                ],
            ),
            shareholder_quorum: FieldRule::new(
                field::SHAREHOLDER_QUORUM,
                vec![
                    labelled(r"(?:shareholder|general assembly) quorum"),
                    labelled(
                        r"quorum (?:for|of) (?:the )?(?:shareholders?|general assembly)(?: meetings?)?(?:\s+(?:is|shall be))?",
                    ),
                ],
            ),
            majority_threshold: FieldRule::new(
                field::MAJORITY_THRESHOLD,
                vec![
                    labelled(r"majority threshold"),
                    Pattern::new(
                        r"passed by (?:a |an )?((?:simple |absolute |special )?majority[^\n.;]*)",
                        Group(1),
                    ),
                ],
            ),
            casting_vote: FieldRule::new(
                field::CASTING_VOTE,
                vec![Pattern::new(
                    r"\bcasting vote\b",
                    Literal("Chairperson has casting vote"),
                )],
            ),
            financial_thresholds: FieldRule::new(
                field::FINANCIAL_THRESHOLDS,
                vec![
                    labelled(r"(?:financial|spending|expenditure|transaction) (?:threshold|limit)s?"),
                    Pattern::new(
                        r"(?:exceeding|in excess of|above|over) ((?:AED|USD|EUR|GBP|\$)\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|thousand))?)",
                        Group(1),
                    ),
                    labelled(r"threshold"),
                ],
            ),
            notice_period: FieldRule::new(
                field::NOTICE_PERIOD,
                vec![
                    labelled(r"notice period"),
                    Pattern::new(
                        r"(?:not less than|at least) (\d+ (?:clear )?(?:business |working |calendar )?days?)'?\s+(?:prior )?(?:written )?notice",
                        Group(1),
                    ),
                ],
            ),
            meeting_location: FieldRule::new(
                field::MEETING_LOCATION,
                vec![
                    labelled(r"meeting location"),
                    Pattern::new(r"meetings? (?:shall|will|may) be held (?:at|in) ([^\n.;]+)", Group(1)),
                ],
            ),
            chairperson: FieldRule::new(
                field::CHAIRPERSON,
                vec![Pattern::new(
                    r"\bchair(?:person|man|woman)?\s*[:\-]\s*((?:(?:mrs|mr|ms|dr)\.\s*)?[^\n.;]+)",
                    Group(1),
                )],
            ),
            language: FieldRule::new(
                field::LANGUAGE,
                vec![
                    Pattern::new(r"\blanguage\s*[:\-]\s*([^\n.;]+)", Group(1)),
                    Pattern::new(
                        r"\b(?:in|the) ((?:english|arabic)(?:\s+and\s+(?:english|arabic))?) languages?\b",
                        Group(1),
                    ),
                    Pattern::new(
                        r"\blanguage (?:of [^.;]+? )?(?:shall be|is) (english|arabic)\b",
                        Group(1),
                    ),
                ],
            ),

            party_name: FieldRule::new(
                "Party name",
                vec![Pattern::case_sensitive(
                    r"\b(?:Mrs|Mr|Ms|Dr)\.?\s+[A-Z][A-Za-z'\-]*(?:\s+[A-Z][A-Za-z'\-]*)*",
                    WholeMatch,
                )],
            ),
            nationality: FieldRule::new(
                "Nationality",
                vec![
                    Pattern::new(r"nationality[:\-\s]+([^,;()]+)", Group(1)),
                    Pattern::new(r"\b([a-z]+ nationality)\b", Group(1)),
                    Pattern::new(r"\b(?:a|an) ([a-z]+) national\b", Group(1)),
                ],
            ),
            id_number: FieldRule::new(
                "ID number",
                vec![Pattern::new(
                    r"\b(?:emirates id|passport|id)\b(?:\s+(?:no\.?|number))?[:\-\s#]*([A-Z0-9][A-Z0-9\-]*\d[A-Z0-9\-]*)",
                    Group(1),
                )],
            ),
            ownership: FieldRule::new(
                "Ownership",
                vec![
                    Pattern::new(r"(\d{1,3}(?:\.\d+)?\s?%)", Group(1)),
                    Pattern::new(r"(\d{1,3}(?:\.\d+)?\s?per\s?cent)", Group(1)),
                ],
            ),
            appointment_method: FieldRule::new(
                "Appointment method",
                vec![
                    Pattern::new(
                        r"appointed by (?:the )?(?:shareholders|members|general assembly)",
                        Literal("Appointed by shareholders"),
                    ),
                    Pattern::new(r"appointed by (?:the )?board", Literal("Appointed by the board")),
                    Pattern::new(
                        r"(?:named|appointed) in (?:these|the) articles",
                        Literal("Named in the Articles"),
                    ),
                ],
            ),
            signing_authority: FieldRule::new(
                "Signing authority",
                vec![
                    Pattern::new(r"\b(?:sole|joint|authori[sz]ed) signatory\b", WholeMatch),
                    Pattern::new(r"signing authority (?:up to|not exceeding) [^,;.]+", WholeMatch),
                ],
            ),
            power_of_attorney: FieldRule::new(
                "Power of attorney",
                vec![Pattern::new(r"power of attorney|\bpoa\b", Literal("On file"))],
            ),

            sender: FieldRule::new("Sender", vec![header("from")]),
            recipient: FieldRule::new("Recipient", vec![header("to")]),

            governance: vec![
                FieldRule::new(
                    "Quorum",
                    vec![Pattern::new(r"\bquorum\b", Literal("Quorum requirements mentioned."))],
                ),
                FieldRule::new(
                    "Directors",
                    vec![Pattern::new(
                        r"\b(?:directors?|managers?)\b",
                        Literal("Director appointment/removal provisions present."),
                    )],
                ),
                FieldRule::new(
                    "Meetings",
                    vec![Pattern::new(r"\bmeetings?\b", Literal("Meeting procedures referenced."))],
                ),
            ],
        }
    }
}

// ── Helpers ──

/// Trim whitespace and dangling separators from a captured value.
fn clean_value(value: &str) -> &str {
    value
        .trim()
        .trim_end_matches([',', ':', ';', '-'])
        .trim_start_matches([',', ':', ';', '-'])
        .trim()
}
