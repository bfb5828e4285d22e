use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

use log::{error, info};
use structopt::StructOpt;
use walkdir::WalkDir;

use word_census::constants::CACHE_EXTENSION;
use word_census::{
    count_words_in_files, count_words_in_files_serial, merge_frequency_maps, top_word_frequencies,
    write_frequency_csv, DocumentAnalyzerConfig, DocumentMode, WordFrequencyMap,
};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "word-census",
    about = "Ranked word-frequency statistics over plain-text corpora."
)]
struct CliArgs {
    /// Directories of Project Gutenberg texts (header/footer boilerplate stripped).
    #[structopt(long = "gutenberg", parse(from_os_str))]
    gutenberg_dirs: Vec<PathBuf>,

    /// Directories of Wikipedia extractor dumps (<doc> boundary lines dropped).
    #[structopt(long = "wikipedia", parse(from_os_str))]
    wikipedia_dirs: Vec<PathBuf>,

    /// Directories of plain-text documents without corpus boilerplate.
    #[structopt(long = "plain", parse(from_os_str))]
    plain_dirs: Vec<PathBuf>,

    /// Number of words to include in the report, '0' for all.
    #[structopt(short = "w", long = "words", default_value = "100")]
    words: usize,

    /// Where to write the CSV report.
    #[structopt(short = "o", long = "output", default_value = "out.csv", parse(from_os_str))]
    output: PathBuf,

    /// Do not read or write per-document cache records.
    #[structopt(long = "no-cache")]
    no_cache: bool,

    /// Analyze documents one at a time instead of on a thread pool.
    #[structopt(long = "serial")]
    serial: bool,

    /// Number of worker threads to spawn. Default is the number of processor cores.
    #[structopt(short = "r", long = "workers")]
    workers: Option<usize>,
}

fn collect_document_paths(corpus_dir: &Path) -> Vec<PathBuf> {
    let mut document_paths = Vec::new();

    for entry in WalkDir::new(corpus_dir).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        // Skip cache records left behind by previous runs.
        if entry
            .path()
            .extension()
            .map_or(false, |extension| extension == CACHE_EXTENSION)
        {
            continue;
        }
        document_paths.push(entry.path().to_path_buf());
    }

    document_paths
}

fn analyze_corpus(
    label: &str,
    corpus_dirs: &[PathBuf],
    mode: DocumentMode,
    use_cache: bool,
    serial: bool,
) -> WordFrequencyMap {
    let document_paths: Vec<PathBuf> = corpus_dirs
        .iter()
        .flat_map(|corpus_dir| collect_document_paths(corpus_dir))
        .collect();
    info!("Found {} {} files.", document_paths.len(), label);

    let config = DocumentAnalyzerConfig { mode, use_cache };

    let started = Instant::now();
    let frequency_map = if serial {
        count_words_in_files_serial(&config, &document_paths)
    } else {
        count_words_in_files(&config, &document_paths)
    };
    info!(
        "{} analysis took {:.2} seconds.",
        label,
        started.elapsed().as_secs_f64()
    );

    frequency_map
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let args = CliArgs::from_args();

    if args.gutenberg_dirs.is_empty() && args.wikipedia_dirs.is_empty() && args.plain_dirs.is_empty()
    {
        eprintln!("No corpus directories given; pass --gutenberg, --wikipedia and/or --plain.");
        process::exit(1);
    }

    if let Some(workers) = args.workers {
        if let Err(err) = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build_global()
        {
            error!("Failed to size the worker pool: {}", err);
            process::exit(1);
        }
    }

    let use_cache = !args.no_cache;
    if use_cache {
        info!("Caching enabled.");
    } else {
        info!("Caching disabled.");
    }

    let mut corpus_maps = Vec::new();
    if !args.gutenberg_dirs.is_empty() {
        corpus_maps.push(analyze_corpus(
            "Gutenberg",
            &args.gutenberg_dirs,
            DocumentMode::Gutenberg,
            use_cache,
            args.serial,
        ));
    }
    if !args.wikipedia_dirs.is_empty() {
        corpus_maps.push(analyze_corpus(
            "Wikipedia",
            &args.wikipedia_dirs,
            DocumentMode::Wikipedia,
            use_cache,
            args.serial,
        ));
    }
    if !args.plain_dirs.is_empty() {
        corpus_maps.push(analyze_corpus(
            "plain-text",
            &args.plain_dirs,
            DocumentMode::Plain,
            use_cache,
            args.serial,
        ));
    }

    info!("Consolidating results...");
    let merged = merge_frequency_maps(corpus_maps);
    let ranked = top_word_frequencies(&merged, args.words);

    let output_file = match File::create(&args.output) {
        Ok(file) => file,
        Err(err) => {
            error!("Failed to create {}: {}", args.output.display(), err);
            process::exit(1);
        }
    };
    if let Err(err) = write_frequency_csv(output_file, &ranked) {
        error!("Failed to write {}: {}", args.output.display(), err);
        process::exit(1);
    }

    info!(
        "Wrote {} of {} ranked words to {}.",
        ranked.len(),
        merged.len(),
        args.output.display()
    );
}
