//! Whitespace normalisation and sentence splitting.
//!
//! Every pipeline stage works on normalised text: carriage returns removed,
//! tabs and runs of whitespace collapsed to a single space, ends trimmed.
//!
//! # Sentence boundaries
//!
//! A sentence ends at `.`, `?` or `!` followed by whitespace. Corporate
//! documents are dense with honorifics and abbreviations ("Mr. Ahmed",
//! "License No. 12345"), so a full stop after one of [`ABBREVIATIONS`] does
//! not end a sentence. Neither does one after a capital initial ("J. Smith"),
//! unless the letter is a label such as "Schedule A" or the next word
//! plainly starts a new sentence.

/// Tokens that end in a full stop without ending the sentence (lowercase,
/// without the trailing dot).
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "no", "nos", "co", "st", "art", "sec", "e.g", "i.e", "vs",
];

/// Words that, before a single capital letter, make it a label rather
/// than an initial ("Schedule A", "Class B").
const LABEL_NOUNS: &[&str] = &[
    "schedule", "annex", "appendix", "exhibit", "part", "class", "category", "series", "plan",
    "type", "grade", "article", "clause", "section", "form", "option",
];

/// Words that open a sentence and are never a surname.
const SENTENCE_OPENERS: &[&str] = &[
    "The", "This", "These", "That", "Those", "It", "All", "Any", "Each", "Such", "No", "If", "In",
];

/// Collapse whitespace runs into single spaces and trim both ends.
///
/// Idempotent: normalising already-normalised text returns it unchanged.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalise each line independently, keeping the line structure.
///
/// Blank lines are dropped. Used at ingestion so that the chunker can still
/// see heading lines.
pub fn normalize_lines(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(normalize_text)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lazily split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences { rest: text }
}

/// Iterator returned by [`split_sentences`].
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while !self.rest.is_empty() {
            let end = sentence_end(self.rest);
            let sentence = self.rest[..end].trim();
            self.rest = &self.rest[end..];
            if !sentence.is_empty() {
                return Some(sentence);
            }
        }
        None
    }
}

/// Byte offset just past the terminal punctuation of the first sentence.
fn sentence_end(text: &str) -> usize {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '?' | '!') {
            continue;
        }
        let Some(&(next_idx, next)) = chars.peek() else {
            break;
        };
        if next.is_whitespace() && !(c == '.' && is_abbreviation(&text[..i], &text[next_idx..])) {
            return next_idx;
        }
    }
    text.len()
}

/// Whether the full stop between `before_dot` and `after_dot` belongs to
/// an abbreviation or initial rather than ending the sentence.
fn is_abbreviation(before_dot: &str, after_dot: &str) -> bool {
    let mut tokens = before_dot.rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"');
    let token = tokens.next().unwrap_or_default();
    if ABBREVIATIONS.contains(&token.to_ascii_lowercase().as_str()) {
        return true;
    }
    let previous = tokens.find(|t| !t.is_empty());
    is_initial(token, previous, after_dot)
}

/// A lone capital letter followed by a capitalised word that could be a name.
fn is_initial(token: &str, previous: Option<&str>, after_dot: &str) -> bool {
    let mut letters = token.chars();
    let (Some(letter), None) = (letters.next(), letters.next()) else {
        return false;
    };
    if !letter.is_uppercase() {
        return false;
    }
    if previous.is_some_and(|p| LABEL_NOUNS.contains(&p.to_ascii_lowercase().as_str())) {
        return false;
    }
    let next_word = after_dot
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_end_matches([',', '.', ';', ':']);
    next_word.chars().next().is_some_and(char::is_uppercase)
        && !SENTENCE_OPENERS.contains(&next_word)
}
