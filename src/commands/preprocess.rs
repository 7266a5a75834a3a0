use anyhow::Result;
use tracing::info;

use crate::cli::PreprocessArgs;
use crate::engine;
use crate::model::PreprocessReport;
use crate::util::{now_utc_string, read_text_input, sha256_file, write_json_pretty, write_text_output};

const REPORT_VERSION: u32 = 1;

pub fn run(args: PreprocessArgs) -> Result<()> {
    let raw = read_text_input(args.input.as_deref())?;
    let add_hints = !args.no_hints;

    let outcome = engine::preprocess(&raw, add_hints);

    info!(
        format_type = outcome.format.format_type.as_str(),
        confidence = outcome.format.confidence,
        hints_added = add_hints,
        "preprocessing complete"
    );

    if let Some(report_path) = args.report_path.as_deref() {
        let cleaned_chars = if add_hints {
            engine::clean_text(&raw).chars().count()
        } else {
            outcome.processed_text.chars().count()
        };

        let source_sha256 = match args.input.as_deref() {
            Some(path) => Some(sha256_file(path)?),
            None => None,
        };

        let report = PreprocessReport {
            report_version: REPORT_VERSION,
            generated_at: now_utc_string(),
            source: args
                .input
                .as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "stdin".to_string()),
            source_sha256,
            raw_chars: raw.chars().count(),
            cleaned_chars,
            hints_added: add_hints,
            format: outcome.format.clone(),
        };

        write_json_pretty(report_path, &report)?;
        info!(path = %report_path.display(), "wrote preprocess report");
    }

    write_text_output(args.output.as_deref(), &outcome.processed_text)
}
