use crate::types::WordFrequencyMap;

/// Merges many per-document frequency maps into a single map.
///
/// The merge is additive: the result's count for a word is the sum of that word's
/// count across every input map. Addition makes the operation associative and
/// commutative, so partial maps computed per document or per shard may be combined
/// in any order or grouping with an identical result. An empty input yields an
/// empty map.
pub fn merge_frequency_maps<I>(frequency_maps: I) -> WordFrequencyMap
where
    I: IntoIterator<Item = WordFrequencyMap>,
{
    let mut merged = WordFrequencyMap::new();

    for frequency_map in frequency_maps {
        for (word, frequency) in frequency_map {
            *merged.entry(word).or_insert(0) += frequency;
        }
    }

    merged
}
