use std::path::PathBuf;
use std::str::FromStr;

use clap::ValueEnum;
use inquire::{Confirm, CustomType, Text};
use thiserror::Error;

pub const DEFAULT_OUTPUT_STEM: &str = "extracted_questions_and_answers";

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    Txt,
    Csv,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Csv => "csv",
        }
    }
}

#[derive(PartialEq, Eq, Debug, Error)]
#[error("Unrecognized format (expected `txt` or `csv`): {0}")]
pub struct OutputFormatParseError(String);

impl FromStr for OutputFormat {
    type Err = OutputFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            _ => Err(OutputFormatParseError(s.to_owned())),
        }
    }
}

/// Fully resolved run configuration.  Every field arrives either from a CLI
/// flag or from an interactive prompt; the pipeline never sees which.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    pub input_files: Vec<PathBuf>,
    pub output_stem: PathBuf,
    pub dedup: bool,
    pub format: OutputFormat,
}

impl Config {
    /// Fills every field missing from the command line by prompting.
    pub fn resolve(
        input_files: Vec<PathBuf>,
        output: Option<PathBuf>,
        dedup: Option<bool>,
        format: Option<OutputFormat>,
    ) -> anyhow::Result<Self> {
        let input_files = match input_files.is_empty() {
            false => input_files,
            true => prompt_input_files()?,
        };
        let output_stem = match output {
            Some(output) => output,
            None => prompt_output_stem()?,
        };
        let dedup = match dedup {
            Some(dedup) => dedup,
            None => Confirm::new("Remove duplicate questions?").prompt()?,
        };
        let format = match format {
            Some(format) => format,
            None => CustomType::new("Output format (txt/csv)").prompt()?,
        };
        Ok(Self {
            input_files,
            output_stem,
            dedup,
            format,
        })
    }

    /// Output path: the stem with the format's extension appended.  Appended,
    /// not substituted, so a stem like `unit.3` keeps its dot intact.
    pub fn output_path(&self) -> PathBuf {
        let mut path = self.output_stem.clone().into_os_string();
        path.push(".");
        path.push(self.format.extension());
        path.into()
    }
}

fn prompt_input_files() -> anyhow::Result<Vec<PathBuf>> {
    let line = Text::new("Input HTML files (comma or space separated):").prompt()?;
    Ok(split_paths(&line))
}

fn prompt_output_stem() -> anyhow::Result<PathBuf> {
    Ok(Text::new("Output path (extension is appended automatically):")
        .with_default(DEFAULT_OUTPUT_STEM)
        .prompt()?
        .into())
}

pub fn split_paths(line: &str) -> Vec<PathBuf> {
    line.replace(',', " ")
        .split_whitespace()
        .map(PathBuf::from)
        .collect()
}
