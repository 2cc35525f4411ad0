use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Label used whenever an averaged score has no matching mood.
pub const FALLBACK_MOOD_LABEL: &str = "Neutral";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLevel {
    VeryHappy,
    Happy,
    Neutral,
    Sad,
    VerySad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodProfile {
    pub label: &'static str,
    pub score: u8,
    pub icon_color: &'static str,
    pub bar_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoodError(String);

impl fmt::Display for ParseMoodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown mood '{}'", self.0)
    }
}

impl std::error::Error for ParseMoodError {}

impl MoodLevel {
    pub const ALL: [MoodLevel; 5] = [
        MoodLevel::VeryHappy,
        MoodLevel::Happy,
        MoodLevel::Neutral,
        MoodLevel::Sad,
        MoodLevel::VerySad,
    ];

    pub const fn profile(self) -> MoodProfile {
        match self {
            MoodLevel::VeryHappy => MoodProfile {
                label: "Very Happy",
                score: 5,
                icon_color: "orange-500",
                bar_color: "#F97316",
            },
            MoodLevel::Happy => MoodProfile {
                label: "Happy",
                score: 4,
                icon_color: "green-500",
                bar_color: "#22C55E",
            },
            MoodLevel::Neutral => MoodProfile {
                label: "Neutral",
                score: 3,
                icon_color: "blue-500",
                bar_color: "#3B82F6",
            },
            MoodLevel::Sad => MoodProfile {
                label: "Sad",
                score: 2,
                icon_color: "indigo-500",
                bar_color: "#6366F1",
            },
            MoodLevel::VerySad => MoodProfile {
                label: "Very Sad",
                score: 1,
                icon_color: "red-500",
                bar_color: "#EF4444",
            },
        }
    }

    pub const fn label(self) -> &'static str {
        self.profile().label
    }

    pub const fn score(self) -> u8 {
        self.profile().score
    }

    /// Face glyph drawn above the mood's bar and next to it in the picker.
    pub const fn icon(self) -> &'static str {
        match self {
            MoodLevel::VeryHappy => "\u{1F604}",
            MoodLevel::Happy => "\u{1F642}",
            MoodLevel::Neutral => "\u{1F610}",
            MoodLevel::Sad => "\u{1F641}",
            MoodLevel::VerySad => "\u{1F622}",
        }
    }

    /// Stable identifier used in form values and the JSON API.
    pub const fn key(self) -> &'static str {
        match self {
            MoodLevel::VeryHappy => "VeryHappy",
            MoodLevel::Happy => "Happy",
            MoodLevel::Neutral => "Neutral",
            MoodLevel::Sad => "Sad",
            MoodLevel::VerySad => "VerySad",
        }
    }

    pub fn from_score(score: i64) -> Option<MoodLevel> {
        Self::ALL
            .into_iter()
            .find(|mood| i64::from(mood.score()) == score)
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MoodLevel {
    type Err = ParseMoodError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|mood| mood.key().to_lowercase() == normalized)
            .ok_or_else(|| ParseMoodError(raw.trim().to_string()))
    }
}
