use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;
use log::{debug, info, warn};

use crate::models::document_cleaner::{
    clean_document, BoilerplateStripper, DocumentMode, GutenbergBoilerplateStripper,
};
use crate::models::{Error, FrequencyCache, Tokenizer};
use crate::types::WordFrequencyMap;
use crate::utils::count_word_frequencies;

/// Configuration for a `DocumentAnalyzer`.
pub struct DocumentAnalyzerConfig {
    /// Which boilerplate-cleaning rule to apply before tokenization.
    pub mode: DocumentMode,
    /// Whether to consult and write per-document cache records.
    pub use_cache: bool,
}

/// Turns one document on disk into a `WordFrequencyMap`.
///
/// The pipeline per document: read bytes, sniff the encoding, decode, strip
/// corpus boilerplate, tokenize, count. When caching is enabled, an existing
/// record short-circuits all of it and a fresh result is persisted before
/// returning.
///
/// Analyses are independent of each other: the only write an analysis performs
/// is to its own document's cache record, so any number of analyzers (or one
/// analyzer shared by reference) may run concurrently.
pub struct DocumentAnalyzer<'a> {
    tokenizer: &'a Tokenizer,
    config: &'a DocumentAnalyzerConfig,
    boilerplate_stripper: Box<dyn BoilerplateStripper + Send + Sync>,
}

impl<'a> DocumentAnalyzer<'a> {
    pub fn new(tokenizer: &'a Tokenizer, config: &'a DocumentAnalyzerConfig) -> Self {
        Self {
            tokenizer,
            config,
            boilerplate_stripper: Box::new(GutenbergBoilerplateStripper),
        }
    }

    /// Replaces the stripper consulted for `DocumentMode::Gutenberg` documents.
    pub fn with_boilerplate_stripper(
        mut self,
        boilerplate_stripper: Box<dyn BoilerplateStripper + Send + Sync>,
    ) -> Self {
        self.boilerplate_stripper = boilerplate_stripper;
        self
    }

    /// Analyzes the document at `document_path` and returns its frequency map.
    ///
    /// A missing or unreadable file propagates as `Error::IoError`. A cache
    /// record that fails to load is discarded and the document is recomputed.
    pub fn analyze(&self, document_path: &Path) -> Result<WordFrequencyMap, Error> {
        if self.config.use_cache {
            match FrequencyCache::load(document_path) {
                Ok(Some(cached)) => {
                    debug!("Loaded cached frequencies for {}", document_path.display());
                    return Ok(cached);
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        "Discarding unreadable cache record for {}: {}",
                        document_path.display(),
                        err
                    );
                }
            }
        }

        info!("Analyzing {}", document_path.display());

        let raw_bytes = fs::read(document_path)?;
        let decoded = decode_bytes(&raw_bytes);
        let cleaned = clean_document(
            &decoded,
            self.config.mode,
            self.boilerplate_stripper.as_ref(),
        );
        let words = self.tokenizer.tokenize(&cleaned);
        let frequency_map = count_word_frequencies(&words);

        if self.config.use_cache {
            FrequencyCache::store(document_path, &frequency_map)?;
        }

        Ok(frequency_map)
    }
}

/// Decodes `raw_bytes` using a statistical sniff of their encoding.
///
/// Byte sequences the detected encoding cannot decode are dropped rather than
/// surfaced as errors, so a partially garbled file still contributes the words
/// that did decode.
fn decode_bytes(raw_bytes: &[u8]) -> String {
    let mut detector = EncodingDetector::new();
    detector.feed(raw_bytes, true);
    let encoding: &'static encoding_rs::Encoding = detector.guess(None, true);

    let (decoded, _, had_errors) = encoding.decode(raw_bytes);
    if !had_errors {
        return decoded.into_owned();
    }

    decoded
        .chars()
        .filter(|&ch| ch != char::REPLACEMENT_CHARACTER)
        .collect()
}
