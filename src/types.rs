use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a normalized word as an owned `String`. Words are lowercase and carry no
/// punctuation apart from apostrophes.
pub type Word = String;

/// Represents the total number of occurrences of a word within a text document, or within
/// an aggregate of many documents.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts. One map is produced per document
/// and many maps are merged additively into a corpus-wide map.
/// The key is the `Word`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;
