use regex::Regex;

use crate::model::LayoutType;

/// Minimum day-prefixed lines for the vertical/fixed-column layouts.
const MIN_DAY_LINES: usize = 3;
/// Minimum fixed-activity column phrases for the fixed-columns layout.
const MIN_FIXED_COLUMN_PHRASES: usize = 2;

/// Refine a grid-leaning classification into a spatial layout. Returns
/// `None` when no arrangement is recognized, which is a valid terminal
/// state rather than an error.
///
/// Precedence: daily-schedules, fixed-columns, horizontal-days,
/// vertical-days. First match wins.
pub fn detect_layout_type(text: &str) -> Option<LayoutType> {
    let daily_schedule_heading =
        Regex::new(r"(?i)Daily Schedule").expect("valid daily schedule regex");
    let numbered_time_line =
        Regex::new(r"(?m)^\d+\s+\d{1,2}:\d{2}").expect("valid numbered time line regex");
    let horizontal_days =
        Regex::new(r"(?i)\b(Monday|Mon|M)\b.*\b(Tuesday|Tue|Tu)\b.*\b(Wednesday|Wed|W)\b")
            .expect("valid horizontal days regex");
    let vertical_day_with_times = Regex::new(
        r"(?im)^(Monday|Tuesday|Wednesday|Thursday|Friday|Mon|Tue|Wed|Thu|Fri|M|Tu|W|Th|F)\b.*\d{1,2}[:.]\d{2}.*\d{1,2}[:.]\d{2}",
    )
    .expect("valid vertical days regex");
    let day_line_prefix = Regex::new(
        r"(?i)^((Monday|Tuesday|Wednesday|Thursday|Friday|Mon|Tue|Tues|Wed|Thu|Thur|Thurs|Fri)\b|(M|Tu|W|Th|F)\s)",
    )
    .expect("valid day line prefix regex");

    let fixed_column_phrases = [
        r"(?i)Reading.*and.*register",
        r"(?i)Story.*time",
        r"(?i)Indoor.*continuous.*provision",
        r"(?i)Outside.*Play",
        r"(?i)Continuous.*provision",
    ];

    let day_line_count = text
        .lines()
        .filter(|line| day_line_prefix.is_match(line.trim()))
        .count();

    let fixed_phrase_count = fixed_column_phrases
        .iter()
        .filter(|phrase| {
            Regex::new(phrase)
                .expect("valid fixed column phrase regex")
                .is_match(text)
        })
        .count();

    if daily_schedule_heading.is_match(text) && numbered_time_line.is_match(text) {
        Some(LayoutType::DailySchedules)
    } else if fixed_phrase_count >= MIN_FIXED_COLUMN_PHRASES && day_line_count >= MIN_DAY_LINES {
        Some(LayoutType::FixedColumns)
    } else if horizontal_days.is_match(text) {
        Some(LayoutType::HorizontalDays)
    } else if day_line_count >= MIN_DAY_LINES && vertical_day_with_times.is_match(text) {
        Some(LayoutType::VerticalDays)
    } else {
        None
    }
}
