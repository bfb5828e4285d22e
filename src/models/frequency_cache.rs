use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::constants::CACHE_EXTENSION;
use crate::models::Error;
use crate::types::WordFrequencyMap;

// TODO: Key records by content hash so edits to a document invalidate its record
/// On-disk memoization of per-document frequency maps.
///
/// Each record lives next to its source document, sharing the base name with the
/// cache extension, and holds a gzip-compressed bincode snapshot of the document's
/// `WordFrequencyMap`. Records are keyed by path alone: editing a document after
/// its record exists silently serves the stale counts.
pub struct FrequencyCache;

impl FrequencyCache {
    /// Returns the record path for `document_path` (sibling file, same base name,
    /// cache extension).
    pub fn record_path(document_path: &Path) -> PathBuf {
        document_path.with_extension(CACHE_EXTENSION)
    }

    /// Loads the record for `document_path`, or `None` when no record exists.
    ///
    /// A record that cannot be read or deserialized is reported as an error;
    /// callers treat that as a cache miss rather than a failure.
    pub fn load(document_path: &Path) -> Result<Option<WordFrequencyMap>, Error> {
        let record_path = Self::record_path(document_path);
        if !record_path.exists() {
            return Ok(None);
        }

        let file = File::open(&record_path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let frequency_map = bincode::deserialize_from(decoder).map_err(|err| {
            Error::CacheError(format!(
                "failed to deserialize {}: {}",
                record_path.display(),
                err
            ))
        })?;

        Ok(Some(frequency_map))
    }

    /// Persists `frequency_map` as the record for `document_path`, overwriting any
    /// existing record.
    pub fn store(document_path: &Path, frequency_map: &WordFrequencyMap) -> Result<(), Error> {
        let record_path = Self::record_path(document_path);

        let file = File::create(&record_path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        bincode::serialize_into(&mut encoder, frequency_map).map_err(|err| {
            Error::CacheError(format!(
                "failed to serialize {}: {}",
                record_path.display(),
                err
            ))
        })?;
        encoder.finish()?;

        Ok(())
    }
}
