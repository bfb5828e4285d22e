use crate::models::StripTable;
use crate::types::Word;

/// Splits cleaned document text into normalized lowercase words.
pub struct Tokenizer {
    strip_table: StripTable,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            strip_table: StripTable::new(),
        }
    }

    /// Tokenizer function to split the text into individual normalized words.
    ///
    /// Each whitespace-delimited raw token is passed through the strip table and
    /// lowercased. Because the table rewrites hyphens to spaces, a single raw token
    /// can fan out into several words ("well-known" yields "well" and "known"), so
    /// the transformed token is split once more and every non-empty piece is kept.
    ///
    /// Document order is preserved and duplicates are retained; counting happens
    /// downstream. Empty strings are never emitted.
    pub fn tokenize(&self, text: &str) -> Vec<Word> {
        text.split_whitespace()
            .flat_map(|raw_token| {
                let stripped = self.strip_table.apply(raw_token).to_lowercase();

                stripped
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
