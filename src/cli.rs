use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ttprep",
    version,
    about = "Timetable text preprocessing and format detection"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean and normalize extracted text
    Clean(CleanArgs),
    /// Detect the structural format of a schedule document
    Detect(DetectArgs),
    /// Run the full pipeline: clean, detect, annotate
    Preprocess(PreprocessArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CleanArgs {
    /// Input text file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct DetectArgs {
    /// Input text file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Classify the raw text as-is instead of cleaning it first
    #[arg(long, default_value_t = false)]
    pub skip_clean: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PreprocessArgs {
    /// Input text file; reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output file for the processed text; writes stdout when omitted
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Emit the cleaned text without the format hint header
    #[arg(long, default_value_t = false)]
    pub no_hints: bool,

    /// Write a JSON run report alongside the processed text
    #[arg(long)]
    pub report_path: Option<PathBuf>,
}
