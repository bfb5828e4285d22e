use std::io::Write;

use csv::Writer;

use crate::constants::CSV_HEADER;
use crate::models::Error;
use crate::types::{Word, WordFrequency};

/// Writes ranked `(word, frequency)` rows as CSV.
///
/// The report starts with a `word,frequency` header row, followed by one row per
/// entry with the word as-is and the frequency as a decimal integer. Truncation
/// to a top-N happens upstream, in `top_word_frequencies`.
pub fn write_frequency_csv<W: Write>(
    writer: W,
    ranked_words: &[(Word, WordFrequency)],
) -> Result<(), Error> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for (word, frequency) in ranked_words {
        let frequency_text = frequency.to_string();
        csv_writer.write_record([word.as_str(), frequency_text.as_str()])?;
    }

    csv_writer.flush()?;

    Ok(())
}
