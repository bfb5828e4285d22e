use word_census::types::WordFrequencyMap;
use word_census::{
    merge_frequency_maps, sort_word_frequencies, top_word_frequencies, write_frequency_csv,
};

fn frequency_map(pairs: &[(&str, usize)]) -> WordFrequencyMap {
    pairs
        .iter()
        .map(|(word, frequency)| (word.to_string(), *frequency))
        .collect()
}

#[cfg(test)]
mod merge_tests {
    use super::*;

    #[test]
    fn test_merge_of_empty_sequence_is_empty() {
        let merged = merge_frequency_maps(Vec::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_merge_of_single_map_is_identity() {
        let map = frequency_map(&[("cat", 2), ("dog", 3)]);
        let merged = merge_frequency_maps(vec![map.clone()]);
        assert_eq!(merged, map);
    }

    #[test]
    fn test_merge_adds_overlapping_vocabularies() {
        let a = frequency_map(&[("cat", 2), ("dog", 1)]);
        let b = frequency_map(&[("dog", 2), ("mouse", 1)]);
        let merged = merge_frequency_maps(vec![a, b]);
        assert_eq!(merged, frequency_map(&[("cat", 2), ("dog", 3), ("mouse", 1)]));
    }

    #[test]
    fn test_merge_handles_disjoint_vocabularies() {
        let a = frequency_map(&[("cat", 2)]);
        let b = frequency_map(&[("dog", 3)]);
        let merged = merge_frequency_maps(vec![a, b]);
        assert_eq!(merged, frequency_map(&[("cat", 2), ("dog", 3)]));
    }

    #[test]
    fn test_merge_is_commutative() {
        let a = frequency_map(&[("cat", 2), ("dog", 1)]);
        let b = frequency_map(&[("dog", 4)]);
        let c = frequency_map(&[("mouse", 7), ("cat", 1)]);

        let abc = merge_frequency_maps(vec![a.clone(), b.clone(), c.clone()]);
        let cab = merge_frequency_maps(vec![c, a, b]);
        assert_eq!(abc, cab);
    }

    #[test]
    fn test_merge_is_associative() {
        let a = frequency_map(&[("cat", 2), ("dog", 1)]);
        let b = frequency_map(&[("dog", 4)]);
        let c = frequency_map(&[("mouse", 7), ("cat", 1)]);

        let all_at_once = merge_frequency_maps(vec![a.clone(), b.clone(), c.clone()]);
        let grouped = merge_frequency_maps(vec![merge_frequency_maps(vec![a, b]), c]);
        assert_eq!(all_at_once, grouped);
    }
}

#[cfg(test)]
mod ranking_tests {
    use super::*;

    #[test]
    fn test_sorts_by_frequency_descending() {
        let map = frequency_map(&[("rare", 1), ("common", 10), ("middling", 5)]);
        let ranked = sort_word_frequencies(&map);
        assert_eq!(
            ranked,
            vec![
                ("common".to_string(), 10),
                ("middling".to_string(), 5),
                ("rare".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_ties_break_lexicographically_ascending() {
        let map = frequency_map(&[("b", 5), ("a", 5), ("c", 3)]);
        let ranked = sort_word_frequencies(&map);
        assert_eq!(
            ranked,
            vec![
                ("a".to_string(), 5),
                ("b".to_string(), 5),
                ("c".to_string(), 3)
            ]
        );
    }

    #[test]
    fn test_ranking_is_stable_under_map_construction_order() {
        let forwards = frequency_map(&[("a", 5), ("b", 5), ("c", 3)]);
        let backwards = frequency_map(&[("c", 3), ("b", 5), ("a", 5)]);
        assert_eq!(
            sort_word_frequencies(&forwards),
            sort_word_frequencies(&backwards)
        );
    }

    #[test]
    fn test_top_word_frequencies_truncates_after_tie_break() {
        let map = frequency_map(&[("b", 5), ("a", 5), ("c", 3)]);
        let top = top_word_frequencies(&map, 2);
        assert_eq!(top, vec![("a".to_string(), 5), ("b".to_string(), 5)]);
    }

    #[test]
    fn test_top_word_frequencies_zero_limit_returns_everything() {
        let map = frequency_map(&[("b", 5), ("a", 5), ("c", 3)]);
        let top = top_word_frequencies(&map, 0);
        assert_eq!(top.len(), 3);
    }
}

#[cfg(test)]
mod csv_report_tests {
    use super::*;

    #[test]
    fn test_writes_header_and_all_rows() {
        let map = frequency_map(&[("a", 5), ("b", 5), ("c", 3)]);
        let ranked = sort_word_frequencies(&map);

        let mut buffer = Vec::new();
        write_frequency_csv(&mut buffer, &ranked).unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert_eq!(report, "word,frequency\na,5\nb,5\nc,3\n");
    }

    #[test]
    fn test_ranked_and_truncated_report() {
        let map = frequency_map(&[("a", 5), ("b", 5), ("c", 3)]);
        let top = top_word_frequencies(&map, 2);

        let mut buffer = Vec::new();
        write_frequency_csv(&mut buffer, &top).unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert_eq!(report, "word,frequency\na,5\nb,5\n");
    }

    #[test]
    fn test_empty_ranking_writes_header_only() {
        let mut buffer = Vec::new();
        write_frequency_csv(&mut buffer, &[]).unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert_eq!(report, "word,frequency\n");
    }
}
