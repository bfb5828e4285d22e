use word_census::{clean_document, DocumentMode, GutenbergBoilerplateStripper};

#[cfg(test)]
mod document_cleaner_tests {
    use super::*;

    #[test]
    fn test_plain_mode_returns_text_unchanged() {
        let raw_text = "Some text.\nWith lines.\n";
        let cleaned = clean_document(raw_text, DocumentMode::Plain, &GutenbergBoilerplateStripper);
        assert_eq!(cleaned, raw_text);
    }

    #[test]
    fn test_wikipedia_mode_drops_doc_boundary_lines() {
        let raw_text = "<doc id=1>\nHello world\n</doc>\n";
        let cleaned = clean_document(
            raw_text,
            DocumentMode::Wikipedia,
            &GutenbergBoilerplateStripper,
        );
        assert_eq!(cleaned, "Hello world\n");
    }

    #[test]
    fn test_wikipedia_mode_keeps_all_article_lines() {
        let raw_text = "<doc id=1 title=\"A\">\nfirst line\nsecond line\n</doc>\n<doc id=2>\nthird line\n</doc>\n";
        let cleaned = clean_document(
            raw_text,
            DocumentMode::Wikipedia,
            &GutenbergBoilerplateStripper,
        );
        assert_eq!(cleaned, "first line\nsecond line\nthird line\n");
    }

    #[test]
    fn test_gutenberg_mode_strips_header_and_footer() {
        let raw_text = "\
Title: A Book\nRelease Date: 1901\n\n*** START OF THIS PROJECT GUTENBERG EBOOK A BOOK ***\nActual body text here.\n*** END OF THIS PROJECT GUTENBERG EBOOK A BOOK ***\nLicense terms follow.\n";
        let cleaned = clean_document(
            raw_text,
            DocumentMode::Gutenberg,
            &GutenbergBoilerplateStripper,
        );
        assert_eq!(cleaned, "Actual body text here.\n");
    }

    #[test]
    fn test_gutenberg_mode_without_markers_returns_text_unchanged() {
        let raw_text = "Just an ordinary text file.\nNo archive markers at all.\n";
        let cleaned = clean_document(
            raw_text,
            DocumentMode::Gutenberg,
            &GutenbergBoilerplateStripper,
        );
        assert_eq!(cleaned, raw_text);
    }
}
