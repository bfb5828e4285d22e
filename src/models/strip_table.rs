use std::collections::HashMap;

/// Character translation table applied to every raw token before counting.
///
/// ASCII punctuation and whitespace characters are deleted, with two exceptions:
/// - The apostrophe is kept, so contractions like "don't" survive as single words.
/// - The hyphen becomes a space, so hyphenated compounds count as their component words.
///
/// The table is built once and shared read-only across all document analyses.
pub struct StripTable {
    entries: HashMap<char, Option<char>>,
}

impl StripTable {
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        for ch in (0u8..=0x7f).map(char::from) {
            if ch.is_ascii_punctuation() && ch != '\'' && ch != '-' {
                entries.insert(ch, None);
            } else if ch.is_ascii_whitespace() {
                entries.insert(ch, None);
            }
        }

        // Hyphens are rewritten rather than deleted so "well-known" splits in two.
        entries.insert('-', Some(' '));

        Self { entries }
    }

    /// Applies the table to `token`, deleting or replacing each mapped character.
    /// Characters without an entry pass through untouched.
    pub fn apply(&self, token: &str) -> String {
        token
            .chars()
            .filter_map(|ch| match self.entries.get(&ch) {
                Some(None) => None,
                Some(Some(replacement)) => Some(*replacement),
                None => Some(ch),
            })
            .collect()
    }
}

impl Default for StripTable {
    fn default() -> Self {
        Self::new()
    }
}
