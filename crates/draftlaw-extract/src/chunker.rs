//! Split documents into article/clause/section chunks.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use draftlaw_core::{DocumentChunk, SourceDocument, normalize_text};

/// `Article 4 - Shareholders`, `Clause 12.1: Notices`, `Section IV Powers`.
/// Roman numerals must be upper case.
static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(article|clause|section)\s+(\d+(?:\.\d+)*[a-z]?|(?-i:[IVXLC]+))\b[:.\-\s]*(.*)$",
    )
    .expect("heading pattern is valid")
});

/// Chunk every document, preserving document order then line order.
pub fn chunk_articles(documents: &[SourceDocument]) -> Vec<DocumentChunk> {
    let mut chunks = Vec::new();
    for doc in documents {
        let before = chunks.len();
        chunk_document(doc, &mut chunks);
        debug!(source = %doc.source, chunks = chunks.len() - before, "chunked document");
    }
    info!(documents = documents.len(), chunks = chunks.len(), "chunked documents");
    chunks
}

/// Heading text for a line, or `None` if the line is body text.
pub fn heading_of(line: &str) -> Option<String> {
    let caps = HEADING.captures(line.trim())?;
    let heading = format!("{} {} {}", &caps[1], &caps[2], &caps[3]);
    Some(normalize_text(&heading))
}

fn chunk_document(doc: &SourceDocument, out: &mut Vec<DocumentChunk>) {
    let mut heading = String::new();
    let mut body: Vec<&str> = Vec::new();

    let lines = doc.text.split(['\n', '\r']).map(str::trim).filter(|l| !l.is_empty());
    for line in lines {
        match heading_of(line) {
            Some(next) => {
                flush(&doc.source, &heading, &body, out);
                heading = next;
                body.clear();
            }
            None => body.push(line),
        }
    }
    flush(&doc.source, &heading, &body, out);
}

fn flush(source: &str, heading: &str, body: &[&str], out: &mut Vec<DocumentChunk>) {
    let body = normalize_text(&body.join(" "));
    if body.is_empty() {
        return;
    }
    out.push(DocumentChunk {
        heading: heading.to_string(),
        body,
        source: source.to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str) -> SourceDocument {
        SourceDocument::new("aoa.txt", text)
    }

    #[test]
    fn splits_at_heading_lines() {
        let chunks = chunk_articles(&[doc(
            "Article 1 - Name\nCompany Name: Al Noor Technologies\n\
             Article 2: Objects\nTrading in software.\nConsulting services.",
        )]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].heading, "Article 1 Name");
        assert_eq!(chunks[0].body, "Company Name: Al Noor Technologies");
        assert_eq!(chunks[1].heading, "Article 2 Objects");
        assert_eq!(chunks[1].body, "Trading in software. Consulting services.");
        assert!(chunks.iter().all(|c| c.source == "aoa.txt"));
    }

    #[test]
    fn heading_keywords_are_case_insensitive_and_roman_numerals_work() {
        assert_eq!(heading_of("SECTION IV: Powers").as_deref(), Some("SECTION IV Powers"));
        assert_eq!(heading_of("clause 12.1 - Notices").as_deref(), Some("clause 12.1 Notices"));
        assert_eq!(heading_of("Article 7").as_deref(), Some("Article 7"));
    }

    #[test]
    fn body_lines_are_not_headings() {
        assert_eq!(heading_of("Articles of Association"), None);
        assert_eq!(heading_of("The Article 5 provisions apply"), None);
        assert_eq!(heading_of("Clause limits apply"), None);
    }

    #[test]
    fn lowercase_words_are_not_roman_numerals() {
        assert_eq!(heading_of("Section ill-health leave applies to all staff."), None);
        assert_eq!(heading_of("Clause civil liability is excluded."), None);
        assert_eq!(heading_of("Article xiv"), None);
        assert_eq!(heading_of("Article XIV - Winding Up").as_deref(), Some("Article XIV Winding Up"));
    }

    #[test]
    fn body_line_resembling_heading_keeps_its_text() {
        let chunks = chunk_articles(&[doc(
            "Article 3 - Staff
Section ill-health leave applies to all staff.",
        )]);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].heading, "Article 3 Staff");
        assert_eq!(chunks[0].body, "Section ill-health leave applies to all staff.");
    }

    #[test]
    fn leading_text_forms_headingless_chunk() {
        let chunks = chunk_articles(&[doc("Preamble text here.\nArticle 1\nBody.")]);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0].heading, "");
        assert_eq!(chunks[0].body, "Preamble text here.");
        assert_eq!(chunks[1].heading, "Article 1");
    }

    #[test]
    fn heading_without_body_is_dropped() {
        let chunks = chunk_articles(&[doc("Article 1 Name\nArticle 2 Objects\nSoftware.")]);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].heading, "Article 2 Objects");
    }

    #[test]
    fn whitespace_only_produces_no_chunks() {
        assert!(chunk_articles(&[doc("  \r\n\t\n ")]).is_empty());
        assert!(chunk_articles(&[doc("")]).is_empty());
        assert!(chunk_articles(&[]).is_empty());
    }

    #[test]
    fn documents_keep_their_own_source() {
        let chunks = chunk_articles(&[
            SourceDocument::new("aoa.txt", "Article 1\nFirst."),
            SourceDocument::manual("Board minutes."),
        ]);
        assert_eq!(chunks[0].source, "aoa.txt");
        assert_eq!(chunks[1].source, "manual input");
        assert_eq!(chunks[1].heading, "");
    }

    #[test]
    fn bodies_reproduce_text_minus_heading_lines() {
        let text = "Intro line\r\nArticle 1 - Name\n  Company   Name: Al Noor\n\n\
                    Second   line\nSection II\nPowers of the\tboard.";
        let chunks = chunk_articles(&[doc(text)]);

        let joined = chunks.iter().map(|c| c.body.as_str()).collect::<Vec<_>>().join(" ");
        let expected = text
            .lines()
            .filter(|l| heading_of(l).is_none())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(joined, normalize_text(&expected));
    }
}
