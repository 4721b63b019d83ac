use std::path::PathBuf;

use canvas_scraping::canvas::parser::quiz_review;
use canvas_scraping::config::{Config, OutputFormat};
use canvas_scraping::dedup::deduplicate;
use canvas_scraping::output::{save_csv, save_txt};
use clap::Parser;
use log::info;
use scraper::Html;

/// Extracts questions, answers, and the correct answer from saved Canvas
/// quiz review pages.
#[derive(Parser)]
struct Opts {
    /// Paths to the HTML files to process (prompted for when omitted)
    input_files: Vec<PathBuf>,
    /// Output path stem; the format's extension is appended
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Remove duplicate questions (prompted for when omitted)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    dedup: Option<bool>,
    /// Output format (prompted for when omitted)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();
    let config = Config::resolve(opts.input_files, opts.output, opts.dedup, opts.format)?;

    let mut records = vec![];
    for path in &config.input_files {
        let html = Html::parse_document(&fs_err::read_to_string(path)?);
        let parsed = quiz_review::parse(&html);
        info!("{}: {} question(s)", path.display(), parsed.len());
        records.extend(parsed);
    }

    if config.dedup {
        let before = records.len();
        records = deduplicate(records);
        info!("Removed {} duplicate(s)", before - records.len());
    }

    let path = config.output_path();
    match config.format {
        OutputFormat::Txt => save_txt(&path, &records)?,
        OutputFormat::Csv => save_csv(&path, &records)?,
    }
    println!("Data saved to: {}", path.display());
    Ok(())
}
