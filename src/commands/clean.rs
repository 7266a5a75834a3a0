use anyhow::Result;
use tracing::info;

use crate::cli::CleanArgs;
use crate::engine;
use crate::util::{read_text_input, write_text_output};

pub fn run(args: CleanArgs) -> Result<()> {
    let raw = read_text_input(args.input.as_deref())?;
    let cleaned = engine::clean_text(&raw);

    info!(
        raw_chars = raw.chars().count(),
        cleaned_chars = cleaned.chars().count(),
        "cleaned text"
    );

    write_text_output(args.output.as_deref(), &cleaned)
}
