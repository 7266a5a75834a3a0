use regex::Regex;

use crate::engine::{activities, conventions, layout};
use crate::model::{FormatDetectionResult, FormatType};

/// Indicator-count breakpoints for the grid decision.
const STRONG_GRID_INDICATORS: usize = 3;
const MODERATE_GRID_INDICATORS: usize = 2;
const WEAK_GRID_INDICATORS: usize = 1;

/// Confidence assigned by each branch of the decision table.
const STRONG_GRID_CONFIDENCE: f64 = 0.9;
const MODERATE_GRID_CONFIDENCE: f64 = 0.8;
const WEAK_GRID_CONFIDENCE: f64 = 0.7;
const MIXED_CONFIDENCE: f64 = 0.7;
const LIST_CONFIDENCE: f64 = 0.8;
const UNKNOWN_CONFIDENCE: f64 = 0.5;

/// Added when header metadata is present and the format is not unknown.
const METADATA_BOOST: f64 = 0.1;

/// Grid evidence: day rows, day/time pairings, multi-time lines and lexical
/// cues. Each indicator contributes at most 1 no matter how often it matches.
const GRID_INDICATOR_PATTERNS: &[&str] = &[
    // Days laid out horizontally on one line.
    r"(?i)\bMonday\b.*\bTuesday\b.*\bWednesday\b",
    r"(?i)\bMon\b.*\bTue\b.*\bWed\b",
    // Table-border-delimited day tokens.
    r"(?i)\|\s*Mon\s*\||\|\s*Monday\s*\|",
    // Day token at line start followed by a time, per naming convention.
    r"(?m)^(M|Tu|W|Th|F)\b.*\d{1,2}[:.]\d{2}",
    r"(?im)^(Mon|Tue|Tues|Wed|Thu|Thur|Thurs|Fri|Sat|Sun)\b.*\d{1,2}[:.]\d{2}",
    r"(?im)^(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b.*\d{1,2}[:.]\d{2}",
    // Multiple time ranges on one line.
    r"\d{1,2}[:.]\d{2}\s*-?\s*\d{1,2}[:.]\d{2}.*\d{1,2}[:.]\d{2}\s*-?\s*\d{1,2}[:.]\d{2}",
    // Three or more times on one line.
    r"\d{1,2}[:.]\d{2}.*\d{1,2}[:.]\d{2}.*\d{1,2}[:.]\d{2}",
    // Lexical cues.
    r"(?i)\btimetable\b",
    r"(?i)\breception.*timetable",
];

const LIST_INDICATOR_PATTERNS: &[&str] = &[
    // Numbered line with a time.
    r"(?m)^\d+\s+\d{1,2}:\d{2}",
    // Bulleted line with a time.
    r"(?m)^[\u{2022}\-*]\s+\d{1,2}:\d{2}",
    // Generic numbered list.
    r"(?m)^\d+\.\s+",
    // Daily schedule heading.
    r"(?im)^Daily Schedule",
];

const METADATA_INDICATOR_PATTERNS: &[&str] = &[
    r"(?i)\b(School|Class|Term|Teacher|Week|Year|Reception):\s*\w+",
    r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}",
];

/// Lexical "schedule" cue, handled apart from the pattern table: a
/// "Daily Schedule" heading is list evidence, so only occurrences of
/// "schedule" not preceded by "daily" count toward the grid score.
fn has_standalone_schedule_cue(text: &str) -> bool {
    let schedule_word =
        Regex::new(r"(?i)\b(Daily\s+)?schedule\b").expect("valid schedule cue regex");

    schedule_word
        .captures_iter(text)
        .any(|captures| captures.get(1).is_none())
}

fn count_matching(patterns: &[&str], text: &str) -> usize {
    patterns
        .iter()
        .filter(|pattern| {
            Regex::new(pattern)
                .expect("valid indicator regex")
                .is_match(text)
        })
        .count()
}

/// Classify the structural shape of a schedule document and assemble the
/// full detection record. Total over all strings; inputs with no evidence
/// degrade to `Unknown` at base confidence.
pub fn detect_format(text: &str) -> FormatDetectionResult {
    let mut grid_indicator_count = count_matching(GRID_INDICATOR_PATTERNS, text);
    if has_standalone_schedule_cue(text) {
        grid_indicator_count += 1;
    }

    let has_list_indicators = count_matching(LIST_INDICATOR_PATTERNS, text) > 0;
    let has_metadata = count_matching(METADATA_INDICATOR_PATTERNS, text) > 0;

    let (format_type, mut confidence) = if grid_indicator_count >= WEAK_GRID_INDICATORS
        && has_list_indicators
    {
        (FormatType::Mixed, MIXED_CONFIDENCE)
    } else if grid_indicator_count >= STRONG_GRID_INDICATORS {
        (FormatType::Grid, STRONG_GRID_CONFIDENCE)
    } else if grid_indicator_count >= MODERATE_GRID_INDICATORS {
        (FormatType::Grid, MODERATE_GRID_CONFIDENCE)
    } else if grid_indicator_count >= WEAK_GRID_INDICATORS {
        (FormatType::Grid, WEAK_GRID_CONFIDENCE)
    } else if has_list_indicators {
        (FormatType::List, LIST_CONFIDENCE)
    } else {
        (FormatType::Unknown, UNKNOWN_CONFIDENCE)
    };

    if has_metadata && format_type != FormatType::Unknown {
        confidence = (confidence + METADATA_BOOST).min(1.0);
    }

    let common_activities = activities::detect_common_activities(text);
    let has_sequential_pattern = activities::has_sequential_pattern(&common_activities);

    FormatDetectionResult {
        format_type,
        layout_type: layout::detect_layout_type(text),
        has_metadata,
        day_format: conventions::detect_day_format(text),
        time_format: conventions::detect_time_format(text),
        confidence,
        common_activities,
        has_sequential_pattern,
        has_embedded_times: conventions::detect_embedded_times(text),
    }
}
