/// Extension of the on-disk frequency snapshot stored next to each analyzed document.
pub const CACHE_EXTENSION: &str = "cache";

/// Header row written at the top of every frequency report.
pub const CSV_HEADER: [&str; 2] = ["word", "frequency"];
