use crate::mood::MoodLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub display_date: String,
    pub full_date: NaiveDate,
    pub mood: MoodLevel,
    pub sleep_hours: f64,
}

impl MoodEntry {
    pub fn new(
        id: impl Into<String>,
        full_date: NaiveDate,
        mood: MoodLevel,
        sleep_hours: f64,
    ) -> Self {
        Self {
            id: id.into(),
            display_date: display_date(full_date),
            full_date,
            mood,
            sleep_hours,
        }
    }
}

/// Short axis label, e.g. "Apr 07".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollingStats {
    pub average_mood_label: String,
    pub average_sleep_hours: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: RollingStats,
    pub sleep_band: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub date: String,
    pub mood_label: &'static str,
    pub sleep_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: String,
    pub sleep_hours: f64,
    pub mood: MoodLevel,
    pub mood_label: &'static str,
    pub bar_color: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub domain: [f64; 2],
    pub ticks: Vec<AxisTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarStyle {
    pub width: u32,
    pub radius: [u32; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub points: Vec<ChartPoint>,
    pub y_axis: YAxis,
    pub bar: BarStyle,
}

#[derive(Debug, Serialize)]
pub struct MoodOption {
    pub mood: MoodLevel,
    pub label: &'static str,
    pub score: u8,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub bar_color: &'static str,
}

impl From<MoodLevel> for MoodOption {
    fn from(mood: MoodLevel) -> Self {
        let profile = mood.profile();
        Self {
            mood,
            label: profile.label,
            score: profile.score,
            icon: mood.icon(),
            icon_color: profile.icon_color,
            bar_color: profile.bar_color,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EntryRequest {
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: MoodEntry,
    pub stats: RollingStats,
}
