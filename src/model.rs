use serde::{Deserialize, Serialize};

/// Coarse structural classification of a schedule document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    Grid,
    List,
    Mixed,
    Unknown,
}

impl FormatType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Mixed => "mixed",
            Self::Unknown => "unknown",
        }
    }
}

/// Finer-grained grid sub-classification describing how days and times
/// are arranged spatially.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutType {
    HorizontalDays,
    VerticalDays,
    DailySchedules,
    FixedColumns,
}

impl LayoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalDays => "horizontal-days",
            Self::VerticalDays => "vertical-days",
            Self::DailySchedules => "daily-schedules",
            Self::FixedColumns => "fixed-columns",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayFormat {
    Full,
    Abbreviated,
    Single,
    Mixed,
}

impl DayFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Abbreviated => "abbreviated",
            Self::Single => "single",
            Self::Mixed => "mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12hour")]
    TwelveHour,
    #[serde(rename = "24hour")]
    TwentyFourHour,
    #[serde(rename = "period")]
    Period,
    #[serde(rename = "mixed")]
    Mixed,
}

impl TimeFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TwelveHour => "12hour",
            Self::TwentyFourHour => "24hour",
            Self::Period => "period",
            Self::Mixed => "mixed",
        }
    }
}

/// Canonical recurring schedule activities, in emission order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Registration,
    Break,
    Lunch,
    Storytime,
    Assembly,
}

impl ActivityType {
    /// Capitalized form used in the hint block.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Break => "Break",
            Self::Lunch => "Lunch",
            Self::Storytime => "Storytime",
            Self::Assembly => "Assembly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonActivity {
    pub activity: ActivityType,
    pub pattern: String,
    pub occurrences: usize,
}

/// The single record produced per detection call. Immutable once built;
/// `layout_type` is only ever set by the layout classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatDetectionResult {
    pub format_type: FormatType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_type: Option<LayoutType>,
    pub has_metadata: bool,
    pub day_format: DayFormat,
    pub time_format: TimeFormat,
    pub confidence: f64,
    pub common_activities: Vec<CommonActivity>,
    pub has_sequential_pattern: bool,
    pub has_embedded_times: bool,
}

/// Run report written by the `preprocess` command when a report path is given.
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source: String,
    pub source_sha256: Option<String>,
    pub raw_chars: usize,
    pub cleaned_chars: usize,
    pub hints_added: bool,
    pub format: FormatDetectionResult,
}
