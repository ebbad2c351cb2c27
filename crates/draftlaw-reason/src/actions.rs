//! Rewrite instruction sentences as formal resolution clauses.

use once_cell::sync::Lazy;
use regex::Regex;

/// Clause used when there is nothing to resolve.
pub const ACTION_PLACEHOLDER: &str = "[Action details required]";

struct Template {
    topic: Regex,
    clause: &'static str,
}

impl Template {
    fn new(topic: &str, clause: &'static str) -> Self {
        let topic = Regex::new(&format!("(?i){topic}"))
            .unwrap_or_else(|e| panic!("invalid action topic {topic:?}: {e}"));
        Self { topic, clause }
    }
}

/// Topic templates, checked in order.
static TEMPLATES: Lazy<Vec<Template>> = Lazy::new(|| {
    vec![
        Template::new(
            r"open.*branch",
            "Approve the establishment of the proposed branch in accordance with applicable UAE regulations.",
        ),
        Template::new(
            r"appoint.*manager",
            "Approve the appointment of the proposed manager and grant operational authority as described.",
        ),
        Template::new(
            r"bank account",
            "Authorize the opening and operation of the Company bank account(s) on the approved terms.",
        ),
        Template::new(
            r"lease|rental",
            "Approve the execution of the relevant lease documentation within the stated financial limits.",
        ),
        Template::new(
            r"signing authority",
            "Grant signing authority to the specified individual(s) within approved limits.",
        ),
        Template::new(
            r"capital",
            "Approve the relevant share capital action subject to shareholder consent requirements.",
        ),
        Template::new(
            r"(?:relocat|move|transfer|chang).*(?:registered office|registered address|office address)",
            "Approve the relocation of the registered office and the corresponding update of the Company's licence and constitutional documents.",
        ),
    ]
});

/// Formal clause for one instruction sentence.
pub fn formalize_action(sentence: &str) -> String {
    if let Some(t) = TEMPLATES.iter().find(|t| t.topic.is_match(sentence)) {
        return t.clause.to_string();
    }
    let action = sentence
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ';' | ',') || c.is_whitespace());
    if action.is_empty() {
        return ACTION_PLACEHOLDER.to_string();
    }
    format!("Approve the following action: {action}.")
}
