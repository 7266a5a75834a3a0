use regex::Regex;

use crate::model::{DayFormat, TimeFormat};

/// Classify the day-naming convention used in the text.
///
/// Full names, recognized abbreviations (including the Tues/Thurs variants)
/// and isolated single-letter tokens are tested independently; more than one
/// category present means `Mixed`.
pub fn detect_day_format(text: &str) -> DayFormat {
    let full_days = Regex::new(r"(?i)\b(Monday|Tuesday|Wednesday|Thursday|Friday|Saturday|Sunday)\b")
        .expect("valid full day regex");
    let abbreviated_days =
        Regex::new(r"(?i)\b(Mon|Tue|Tues|Wed|Thu|Thur|Thurs|Fri|Sat|Sun|Tu|Th)\b")
            .expect("valid abbreviated day regex");
    // Word boundaries keep single letters that are part of a longer word from
    // matching; a letter followed by punctuation still counts.
    let single_letter_days = Regex::new(r"\b[MTWFS]\b").expect("valid single letter day regex");

    let has_full = full_days.is_match(text);
    let has_abbreviated = abbreviated_days.is_match(text);
    let has_single = single_letter_days.is_match(text);

    match [has_full, has_abbreviated, has_single]
        .iter()
        .filter(|present| **present)
        .count()
    {
        2.. => DayFormat::Mixed,
        1 if has_abbreviated => DayFormat::Abbreviated,
        1 if has_single => DayFormat::Single,
        _ => DayFormat::Full,
    }
}

/// Classify the time-notation convention used in the text.
///
/// A bare 24-hour token only counts when no 12-hour marker appears anywhere,
/// so "9:00 AM" is not also read as a 24-hour time. No category at all
/// defaults to `Mixed`: time notation is treated as ambiguous, never absent.
pub fn detect_time_format(text: &str) -> TimeFormat {
    let twelve_hour = Regex::new(r"(?i)\d{1,2}[:.]\d{2}\s*(AM|PM|a\.m\.|p\.m\.)")
        .expect("valid 12-hour time regex");
    let twenty_four_hour =
        Regex::new(r"\b([01]?\d|2[0-3])[:.][0-5]\d\b").expect("valid 24-hour time regex");
    let period_format = Regex::new(r"(?i)\b(Period|P)\s*\d+\b").expect("valid period regex");

    let has_twelve = twelve_hour.is_match(text);
    let has_twenty_four = twenty_four_hour.is_match(text) && !has_twelve;
    let has_period = period_format.is_match(text);

    match [has_twelve, has_twenty_four, has_period]
        .iter()
        .filter(|present| **present)
        .count()
    {
        2.. => TimeFormat::Mixed,
        1 if has_twelve => TimeFormat::TwelveHour,
        1 if has_twenty_four => TimeFormat::TwentyFourHour,
        1 => TimeFormat::Period,
        _ => TimeFormat::Mixed,
    }
}

/// True when time ranges sit inline within narrative text ("1:15-2:30
/// Science") rather than in their own grid cells.
pub fn detect_embedded_times(text: &str) -> bool {
    let embedded_patterns = [
        // Time range followed by a word.
        r"(?i)\d{1,2}[:.]\d{2}\s*-\s*\d{1,2}[:.]\d{2}\s+[A-Za-z]",
        // Word followed by a time range.
        r"(?i)[A-Za-z]+\s+\d{1,2}[:.]\d{2}\s*-\s*\d{1,2}[:.]\d{2}",
        // Tight AM/PM-suffixed range.
        r"(?i)\d{1,2}:\d{2}\s*-\s*\d{1,2}:\d{2}(AM|PM)",
    ];

    embedded_patterns.iter().any(|pattern| {
        Regex::new(pattern)
            .expect("valid embedded time regex")
            .is_match(text)
    })
}
