use regex::Regex;

use crate::model::{ActivityType, CommonActivity};

/// How often an alternative pattern may contribute to a type's count.
enum CountMode {
    /// Every non-overlapping match counts.
    EveryMatch,
    /// At most one count per text, used for letters spread across grid
    /// cells where counting fragments would be meaningless.
    OncePerText,
}

struct ActivityPattern {
    pattern: &'static str,
    mode: CountMode,
}

struct ActivityRecognizer {
    activity: ActivityType,
    label: &'static str,
    patterns: &'static [ActivityPattern],
}

const EVERY: CountMode = CountMode::EveryMatch;
const ONCE: CountMode = CountMode::OncePerText;

/// Canonical words, synonyms and OCR-degraded letter-spread forms, in the
/// fixed emission order. Overlapping alternatives double-count by design
/// ("Morning Break" also matches the bare "Break" pattern); the counts are
/// a relevance signal, not a tally.
const RECOGNIZERS: &[ActivityRecognizer] = &[
    ActivityRecognizer {
        activity: ActivityType::Registration,
        label: "Register/Registration",
        patterns: &[
            ActivityPattern { pattern: r"(?i)\bRegister\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bRegistration\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bReg\b", mode: EVERY },
        ],
    },
    ActivityRecognizer {
        activity: ActivityType::Break,
        label: "Break/Recess",
        patterns: &[
            ActivityPattern { pattern: r"(?i)\bBreak\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bRecess\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bMorning\s+Break", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bB\s+R\s+E\s+A\s+K", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bB\b.*\bR\b.*\bE\b.*\bA\b.*\bK\b", mode: ONCE },
        ],
    },
    ActivityRecognizer {
        activity: ActivityType::Lunch,
        label: "Lunch",
        patterns: &[
            ActivityPattern { pattern: r"(?i)\bLunch\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bL\s+U\s+N\s+C\s+H", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bL\b.*\bU\b.*\bN\b.*\bC\b.*\bH\b", mode: ONCE },
        ],
    },
    ActivityRecognizer {
        activity: ActivityType::Storytime,
        label: "Story time/Story",
        patterns: &[
            ActivityPattern { pattern: r"(?i)\bStory\s*time\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bStorytime\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bStory\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bTTRS.*Story", mode: EVERY },
        ],
    },
    ActivityRecognizer {
        activity: ActivityType::Assembly,
        label: "Assembly",
        patterns: &[
            ActivityPattern { pattern: r"(?i)\bAssembly\b", mode: EVERY },
            ActivityPattern { pattern: r"(?i)\bKS[12]\s+Assembly", mode: EVERY },
        ],
    },
];

/// Scan for the five canonical recurring activities. Types with a zero
/// summed count are omitted entirely.
pub fn detect_common_activities(text: &str) -> Vec<CommonActivity> {
    let mut activities = Vec::new();

    for recognizer in RECOGNIZERS {
        let mut occurrences = 0usize;
        for alternative in recognizer.patterns {
            let regex =
                Regex::new(alternative.pattern).expect("valid activity pattern regex");
            occurrences += match alternative.mode {
                CountMode::EveryMatch => regex.find_iter(text).count(),
                CountMode::OncePerText => usize::from(regex.is_match(text)),
            };
        }

        if occurrences > 0 {
            activities.push(CommonActivity {
                activity: recognizer.activity,
                pattern: recognizer.label.to_string(),
                occurrences,
            });
        }
    }

    activities
}

/// True when at least 3 of registration, break, lunch and story time were
/// detected. Presence only; the order the activities appear in the text is
/// deliberately not checked.
pub fn has_sequential_pattern(activities: &[CommonActivity]) -> bool {
    const ROUTINE: [ActivityType; 4] = [
        ActivityType::Registration,
        ActivityType::Break,
        ActivityType::Lunch,
        ActivityType::Storytime,
    ];
    const MIN_PRESENT: usize = 3;

    ROUTINE
        .iter()
        .filter(|routine| activities.iter().any(|entry| entry.activity == **routine))
        .count()
        >= MIN_PRESENT
}
