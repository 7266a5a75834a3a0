use crate::model::FormatDetectionResult;

/// Prefix the cleaned text with a machine-written summary of the detected
/// structure. The section markers and field order are part of the contract:
/// downstream prompt consumers key off them verbatim.
pub fn add_format_hints(text: &str, format: &FormatDetectionResult) -> String {
    let mut hints = String::from("[TIMETABLE FORMAT DETECTION]\n");
    hints.push_str(&format!("Format Type: {}\n", format.format_type.as_str()));

    if let Some(layout_type) = format.layout_type {
        hints.push_str(&format!("Layout Type: {}\n", layout_type.as_str()));
    }

    hints.push_str(&format!("Day Format: {}\n", format.day_format.as_str()));
    hints.push_str(&format!("Time Format: {}\n", format.time_format.as_str()));
    hints.push_str(&format!(
        "Has Metadata: {}\n",
        if format.has_metadata { "Yes" } else { "No" }
    ));
    hints.push_str(&format!(
        "Has Embedded Times: {}\n",
        if format.has_embedded_times { "Yes" } else { "No" }
    ));
    hints.push_str(&format!("Confidence: {:.0}%\n", format.confidence * 100.0));

    if !format.common_activities.is_empty() {
        hints.push_str("\n[COMMON ACTIVITIES DETECTED]\n");
        for activity in &format.common_activities {
            hints.push_str(&format!(
                "- {}: {} occurrence(s)\n",
                activity.activity.display_name(),
                activity.occurrences
            ));
        }
    }

    if format.has_sequential_pattern {
        hints.push_str("\n[SEQUENTIAL PATTERN]\n");
        hints.push_str("This timetable follows the common daily pattern:\n");
        hints.push_str("Registration → Break → Lunch → Story time\n");
        hints.push_str("Use this pattern to help structure and validate the extracted schedule.\n");
    }

    hints.push_str("\n[EXTRACTED TEXT]\n");
    hints.push_str(text);

    hints
}
