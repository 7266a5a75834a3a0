use anyhow::{Context, Result};
use tracing::info;

use crate::cli::DetectArgs;
use crate::engine;
use crate::util::read_text_input;

pub fn run(args: DetectArgs) -> Result<()> {
    let raw = read_text_input(args.input.as_deref())?;
    let text = if args.skip_clean {
        raw
    } else {
        engine::clean_text(&raw)
    };

    let format = engine::detect_format(&text);

    info!(
        format_type = format.format_type.as_str(),
        layout_type = format
            .layout_type
            .map(|layout| layout.as_str())
            .unwrap_or("none"),
        day_format = format.day_format.as_str(),
        time_format = format.time_format.as_str(),
        has_metadata = format.has_metadata,
        has_sequential_pattern = format.has_sequential_pattern,
        has_embedded_times = format.has_embedded_times,
        confidence = format.confidence,
        activity_types = format.common_activities.len(),
        "format detected"
    );

    let json = serde_json::to_string_pretty(&format)
        .context("failed to serialize detection result")?;
    println!("{json}");

    Ok(())
}
