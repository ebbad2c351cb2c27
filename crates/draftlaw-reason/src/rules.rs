//! Ordered classification rules: first match wins, else the default.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use draftlaw_core::{AuthorityThreshold, ExtractionResult, ResolutionType};

/// What a rule tests.
#[derive(Debug, Clone)]
pub enum Condition {
    /// The instruction text matches the pattern.
    Mentions(Regex),
    /// The governing documents reserve at least one matter to shareholders.
    ShareholderMattersRecorded,
}

impl Condition {
    /// Case-insensitive [`Condition::Mentions`].
    ///
    /// # Panics
    ///
    /// If `pattern` is not a valid regex.
    pub fn mentions(pattern: &str) -> Self {
        let regex = Regex::new(&format!("(?i){pattern}"))
            .unwrap_or_else(|e| panic!("invalid rule pattern {pattern:?}: {e}"));
        Self::Mentions(regex)
    }

    pub fn holds(&self, instructions: &str, extraction: &ExtractionResult) -> bool {
        match self {
            Self::Mentions(regex) => regex.is_match(instructions),
            Self::ShareholderMattersRecorded => !extraction.authority.shareholder_matters.is_empty(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Rule<T> {
    pub name: &'static str,
    pub when: Condition,
    pub then: T,
}

/// Rules evaluated top to bottom.
#[derive(Debug, Clone)]
pub struct Cascade<T> {
    rules: Vec<Rule<T>>,
    default: T,
}

impl<T: Copy + std::fmt::Debug> Cascade<T> {
    pub fn new(rules: Vec<Rule<T>>, default: T) -> Self {
        Self { rules, default }
    }

    pub fn classify(&self, instructions: &str, extraction: &ExtractionResult) -> T {
        match self.rules.iter().find(|r| r.when.holds(instructions, extraction)) {
            Some(rule) => {
                debug!(rule = rule.name, result = ?rule.then, "classification rule matched");
                rule.then
            }
            None => {
                debug!(result = ?self.default, "no classification rule matched; using default");
                self.default
            }
        }
    }
}

pub static RESOLUTION_TYPE: Lazy<Cascade<ResolutionType>> = Lazy::new(|| {
    Cascade::new(
        vec![
            Rule {
                name: "constitutional change",
                when: Condition::mentions(
                    r"amend|capital increase|increase (?:of |in )?(?:the )?(?:share )?capital|merger|dissolution|dissolve|liquidat",
                ),
                then: ResolutionType::SpecialShareholder,
            },
            Rule {
                name: "management action",
                when: Condition::mentions(
                    r"appoint(?:ment of)? (?:a |an |the )?(?:new )?director|open(?:ing)? (?:a |an |the )?(?:new )?branch|bank account|signing authority",
                ),
                then: ResolutionType::Board,
            },
            Rule {
                name: "reserved matters on record",
                when: Condition::ShareholderMattersRecorded,
                then: ResolutionType::Shareholder,
            },
        ],
        ResolutionType::Board,
    )
});

pub static AUTHORITY: Lazy<Cascade<AuthorityThreshold>> = Lazy::new(|| {
    Cascade::new(
        vec![
            Rule {
                name: "unanimity",
                when: Condition::mentions(r"unanimous|unanimity|all shareholders"),
                then: AuthorityThreshold::Unanimous,
            },
            Rule {
                name: "special resolution",
                when: Condition::mentions(r"special resolution|super-?\s?majority"),
                then: AuthorityThreshold::Supermajority,
            },
        ],
        AuthorityThreshold::StandardMajority,
    )
});
