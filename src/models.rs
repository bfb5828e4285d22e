pub mod document_analyzer;
pub use document_analyzer::{DocumentAnalyzer, DocumentAnalyzerConfig};

pub mod document_cleaner;
pub use document_cleaner::{
    clean_document, BoilerplateStripper, DocumentMode, GutenbergBoilerplateStripper,
};

pub mod error;
pub use error::Error;

pub mod frequency_cache;
pub use frequency_cache::FrequencyCache;

pub mod strip_table;
pub use strip_table::StripTable;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
