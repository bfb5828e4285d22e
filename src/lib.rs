mod config;
pub use config::DEFAULT_DOCUMENT_ANALYZER_CONFIG;
pub mod constants;
pub mod models;
pub use models::{
    clean_document, BoilerplateStripper, DocumentAnalyzer, DocumentAnalyzerConfig, DocumentMode,
    Error, FrequencyCache, GutenbergBoilerplateStripper, StripTable, Tokenizer,
};
pub mod types;
pub mod utils;
pub use types::{Word, WordFrequency, WordFrequencyMap};
pub use utils::{
    count_word_frequencies, merge_frequency_maps, sort_word_frequencies, top_word_frequencies,
    write_frequency_csv,
};

use std::path::{Path, PathBuf};

use log::error;
use rayon::prelude::*;

/// Analyzes a single document with the default configuration (`Plain` mode,
/// caching enabled) and returns its word-frequency map.
pub fn count_words_in_file(document_path: &Path) -> Result<WordFrequencyMap, Error> {
    count_words_in_file_with_custom_config(DEFAULT_DOCUMENT_ANALYZER_CONFIG, document_path)
}

pub fn count_words_in_file_with_custom_config(
    document_analyzer_config: &DocumentAnalyzerConfig,
    document_path: &Path,
) -> Result<WordFrequencyMap, Error> {
    let tokenizer = Tokenizer::new();
    let document_analyzer = DocumentAnalyzer::new(&tokenizer, document_analyzer_config);

    document_analyzer.analyze(document_path)
}

/// Analyzes every document in `document_paths` on the rayon thread pool and
/// merges the per-document maps into one corpus-wide map.
///
/// Each analysis is independent and the merge is order-insensitive, so the
/// result does not depend on completion order. A document that fails to read is
/// logged and skipped: one bad file never aborts the batch.
pub fn count_words_in_files(
    document_analyzer_config: &DocumentAnalyzerConfig,
    document_paths: &[PathBuf],
) -> WordFrequencyMap {
    let tokenizer = Tokenizer::new();
    let document_analyzer = DocumentAnalyzer::new(&tokenizer, document_analyzer_config);

    let frequency_maps: Vec<WordFrequencyMap> = document_paths
        .par_iter()
        .filter_map(|document_path| analyze_or_skip(&document_analyzer, document_path))
        .collect();

    merge_frequency_maps(frequency_maps)
}

/// Serial counterpart of `count_words_in_files`, analyzing documents one at a
/// time on the calling thread. Skips failing documents the same way.
pub fn count_words_in_files_serial(
    document_analyzer_config: &DocumentAnalyzerConfig,
    document_paths: &[PathBuf],
) -> WordFrequencyMap {
    let tokenizer = Tokenizer::new();
    let document_analyzer = DocumentAnalyzer::new(&tokenizer, document_analyzer_config);

    let frequency_maps: Vec<WordFrequencyMap> = document_paths
        .iter()
        .filter_map(|document_path| analyze_or_skip(&document_analyzer, document_path))
        .collect();

    merge_frequency_maps(frequency_maps)
}

fn analyze_or_skip(
    document_analyzer: &DocumentAnalyzer<'_>,
    document_path: &Path,
) -> Option<WordFrequencyMap> {
    match document_analyzer.analyze(document_path) {
        Ok(frequency_map) => Some(frequency_map),
        Err(err) => {
            error!("Skipping {}: {}", document_path.display(), err);
            None
        }
    }
}
