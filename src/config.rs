use crate::models::{DocumentAnalyzerConfig, DocumentMode};

pub const DEFAULT_DOCUMENT_ANALYZER_CONFIG: &DocumentAnalyzerConfig = &DocumentAnalyzerConfig {
    mode: DocumentMode::Plain,
    use_cache: true,
};
