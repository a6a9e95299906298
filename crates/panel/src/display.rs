//! Pure display helpers for panel entities.

use datadesk_api::DocumentCollection;

/// Placeholder title for a collection with no recorded file names.
pub const UNTITLED_COLLECTION: &str = "Untitled Collection";

/// Derive a human-readable title for a document collection: the first file
/// name with a trailing `.pdf` stripped (any case) and `_`/`-` replaced by
/// spaces.
pub fn collection_title(collection: &DocumentCollection) -> String {
    let Some(first) = collection.file_names.first() else {
        return UNTITLED_COLLECTION.to_string();
    };
    strip_pdf_suffix(first).replace(['_', '-'], " ")
}

fn strip_pdf_suffix(name: &str) -> &str {
    let len = name.len();
    if len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".pdf") {
        &name[..len - 4]
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn collection(file_names: Vec<&str>) -> DocumentCollection {
        DocumentCollection {
            collection_id: "c1".to_string(),
            file_names: file_names.into_iter().map(String::from).collect(),
            document_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn strips_pdf_suffix_and_separators() {
        let c = collection(vec!["Annual_Report-2023.PDF"]);
        assert_eq!(collection_title(&c), "Annual Report 2023");
    }

    #[test]
    fn pdf_suffix_is_case_insensitive() {
        assert_eq!(collection_title(&collection(vec!["notes.Pdf"])), "notes");
        assert_eq!(collection_title(&collection(vec!["notes.pdf"])), "notes");
    }

    #[test]
    fn non_pdf_extensions_are_kept() {
        let c = collection(vec!["meeting_minutes.docx"]);
        assert_eq!(collection_title(&c), "meeting minutes.docx");
    }

    #[test]
    fn uses_first_file_name_only() {
        let c = collection(vec!["first-file.pdf", "second.pdf"]);
        assert_eq!(collection_title(&c), "first file");
    }

    #[test]
    fn empty_file_names_fall_back_to_placeholder() {
        let c = collection(vec![]);
        assert_eq!(collection_title(&c), UNTITLED_COLLECTION);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let c = collection(vec!["a_b-c.pdf"]);
        assert_eq!(collection_title(&c), collection_title(&c));
    }
}
