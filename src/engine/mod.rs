//! Heuristic format detection and text normalization for schedule documents.
//!
//! Every function here is pure and synchronous: it reads its input string,
//! allocates a fresh result, and touches nothing else. Identical input
//! always yields an identical result.

mod activities;
mod clean;
mod conventions;
mod format;
mod hints;
mod layout;


pub use activities::{detect_common_activities, has_sequential_pattern};
pub use clean::clean_text;
pub use conventions::{detect_day_format, detect_embedded_times, detect_time_format};
pub use format::detect_format;
pub use hints::add_format_hints;
pub use layout::detect_layout_type;

use crate::model::FormatDetectionResult;

/// Output of the full preprocessing pipeline. The detection record is
/// returned alongside the text regardless of whether hints were requested.
#[derive(Debug, Clone)]
pub struct PreprocessOutcome {
    pub processed_text: String,
    pub format: FormatDetectionResult,
}

/// Full pipeline: clean, classify, and optionally prepend format hints.
pub fn preprocess(text: &str, add_hints: bool) -> PreprocessOutcome {
    let cleaned = clean_text(text);
    let format = detect_format(&cleaned);

    let processed_text = if add_hints {
        add_format_hints(&cleaned, &format)
    } else {
        cleaned
    };

    PreprocessOutcome {
        processed_text,
        format,
    }
}
