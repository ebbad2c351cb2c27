//! Statutory provisions suggested by the kind of constitutional document.

use draftlaw_core::DocumentType;

/// Provisions of `legal_framework` that the parsed documents bring into play.
///
/// A memorandum points at the capital and objects provisions, articles at
/// the internal governance rules. Unclassified input gets the general
/// governance provisions.
pub fn suggest_authorities(document_type: DocumentType, legal_framework: &str) -> Vec<String> {
    let mut authorities = Vec::new();
    if document_type.mentions_memorandum() {
        authorities.push(format!(
            "{legal_framework}: Memorandum clauses (objects, liability, capital)."
        ));
    }
    if document_type.mentions_articles() {
        authorities.push(format!(
            "{legal_framework}: Articles provisions (governance and internal rules)."
        ));
    }
    if authorities.is_empty() {
        authorities.push(format!(
            "{legal_framework}: General corporate governance provisions."
        ));
    }
    authorities
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAW: &str = "UAE Federal Decree-Law No. 32 of 2021 on Commercial Companies";

    #[test]
    fn memorandum_and_articles_each_add_one() {
        let both = suggest_authorities(DocumentType::ArticlesAndMemorandum, LAW);
        assert_eq!(both.len(), 2);
        assert!(both[0].ends_with("Memorandum clauses (objects, liability, capital)."));
        assert!(both[1].ends_with("Articles provisions (governance and internal rules)."));

        assert_eq!(suggest_authorities(DocumentType::Articles, LAW).len(), 1);
        assert_eq!(
            suggest_authorities(DocumentType::Memorandum, "DIFC Companies Law"),
            vec!["DIFC Companies Law: Memorandum clauses (objects, liability, capital)."]
        );
    }

    #[test]
    fn unclassified_documents_get_general_provisions() {
        assert_eq!(
            suggest_authorities(DocumentType::Unclassified, LAW),
            vec![format!("{LAW}: General corporate governance provisions.")]
        );
    }
}
