pub mod count_word_frequencies;
pub mod merge_frequency_maps;
pub mod sort_word_frequencies;
pub mod write_frequency_csv;

pub use count_word_frequencies::count_word_frequencies;
pub use merge_frequency_maps::merge_frequency_maps;
pub use sort_word_frequencies::{sort_word_frequencies, top_word_frequencies};
pub use write_frequency_csv::write_frequency_csv;
