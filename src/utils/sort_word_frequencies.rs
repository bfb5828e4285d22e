use crate::types::{Word, WordFrequency, WordFrequencyMap};

/// Sorts a mapping of words to their frequencies.
///
/// This function takes a `WordFrequencyMap`, which is a mapping of words to their
/// occurrence frequencies, and returns a sorted vector of
/// `(Word, WordFrequency)` pairs.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   ascending lexicographical order for deterministic ordering.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use word_census::sort_word_frequencies;
/// use word_census::types::WordFrequencyMap;
///
/// let mut results: WordFrequencyMap = HashMap::new();
/// results.insert("the".to_string(), 10);
/// results.insert("cat".to_string(), 15);
/// results.insert("and".to_string(), 10);
///
/// let sorted = sort_word_frequencies(&results);
/// assert_eq!(sorted, vec![
///     ("cat".to_string(), 15),
///     ("and".to_string(), 10),
///     ("the".to_string(), 10)
/// ]);
/// ```
pub fn sort_word_frequencies(frequency_map: &WordFrequencyMap) -> Vec<(Word, WordFrequency)> {
    // Convert the HashMap into a Vec and sort it by frequency (descending),
    // then by word (ascending) for deterministic order.
    let mut sorted_frequencies: Vec<(Word, WordFrequency)> = frequency_map
        .iter()
        .map(|(word, frequency)| (word.to_owned(), *frequency))
        .collect();

    sorted_frequencies.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| a.0.cmp(&b.0)) // Secondary sort by word (ascending)
    });

    sorted_frequencies
}

/// Returns the `limit` most frequent entries of `frequency_map`, sorted as in
/// [`sort_word_frequencies`]. A `limit` of `0` returns every entry.
pub fn top_word_frequencies(
    frequency_map: &WordFrequencyMap,
    limit: usize,
) -> Vec<(Word, WordFrequency)> {
    let mut ranked = sort_word_frequencies(frequency_map);
    if limit > 0 {
        ranked.truncate(limit);
    }
    ranked
}
