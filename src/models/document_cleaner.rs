/// Selects which boilerplate-cleaning rule applies to a document's raw text.
///
/// Callers without mode information should use `Plain`, which passes text
/// through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentMode {
    /// No corpus-specific boilerplate; the text is used as-is.
    Plain,
    /// Project Gutenberg literary texts, wrapped in license/metadata header and
    /// footer blocks.
    Gutenberg,
    /// Wikipedia extractor dumps, with `<doc ...>`/`</doc>` boundary lines
    /// between articles.
    Wikipedia,
}

/// Removes archive boilerplate surrounding the actual work.
///
/// Implementations receive the full raw text and return it with the boilerplate
/// removed, or the input unchanged when no boilerplate markers are found.
pub trait BoilerplateStripper {
    fn strip(&self, text: &str) -> String;
}

/// Marker-based stripper for Project Gutenberg texts.
///
/// Drops everything up to and including the `*** START OF ...` line, and
/// everything from the `*** END OF ...` line onward. Texts without markers
/// pass through unchanged.
pub struct GutenbergBoilerplateStripper;

impl BoilerplateStripper for GutenbergBoilerplateStripper {
    fn strip(&self, text: &str) -> String {
        let mut body_start = None;
        let mut body_end = None;

        let mut offset = 0;
        for line in text.split_inclusive('\n') {
            let trimmed = line.trim_start();
            if body_start.is_none() && trimmed.starts_with("***") && trimmed.contains("START OF") {
                body_start = Some(offset + line.len());
            } else if trimmed.starts_with("***") && trimmed.contains("END OF") {
                body_end = Some(offset);
                break;
            }
            offset += line.len();
        }

        match (body_start, body_end) {
            (Some(start), Some(end)) => text[start..end].to_string(),
            (Some(start), None) => text[start..].to_string(),
            (None, Some(end)) => text[..end].to_string(),
            (None, None) => text.to_string(),
        }
    }
}

/// Strips corpus-specific boilerplate from `raw_text` according to `mode`.
///
/// - `Plain` returns the text unchanged.
/// - `Gutenberg` delegates to `boilerplate_stripper`.
/// - `Wikipedia` operates line-by-line: any line containing a document-open or
///   document-close marker is dropped and the surviving lines are concatenated,
///   each terminated by a newline.
pub fn clean_document(
    raw_text: &str,
    mode: DocumentMode,
    boilerplate_stripper: &dyn BoilerplateStripper,
) -> String {
    match mode {
        DocumentMode::Plain => raw_text.to_string(),
        DocumentMode::Gutenberg => boilerplate_stripper.strip(raw_text),
        DocumentMode::Wikipedia => {
            let mut cleaned = String::with_capacity(raw_text.len());
            for line in raw_text.lines() {
                if line.contains("<doc") || line.contains("</doc") {
                    continue;
                }
                cleaned.push_str(line);
                cleaned.push('\n');
            }
            cleaned
        }
    }
}
