use std::path::PathBuf;

use canvas_scraping::canvas::parser::quiz_review;
use clap::Parser;
use scraper::Html;

#[derive(Parser)]
struct Opts {
    input_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let html = Html::parse_document(&fs_err::read_to_string(opts.input_file)?);
    for record in quiz_review::parse(&html) {
        println!("{record:?}");
    }
    Ok(())
}
