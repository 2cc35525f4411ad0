use crate::models::{MoodEntry, RollingStats};
use crate::mood::{FALLBACK_MOOD_LABEL, MoodLevel};

pub const STATS_WINDOW: usize = 5;

pub fn rolling_stats(entries: &[MoodEntry]) -> RollingStats {
    let window = &entries[entries.len().saturating_sub(STATS_WINDOW)..];
    if window.is_empty() {
        return RollingStats {
            average_mood_label: FALLBACK_MOOD_LABEL.to_string(),
            average_sleep_hours: "0".to_string(),
        };
    }

    let count = window.len() as f64;

    let total_sleep: f64 = window.iter().map(|entry| entry.sleep_hours).sum();
    let avg_sleep = round_half_up(total_sleep / count * 10.0) / 10.0;

    let total_score: u32 = window.iter().map(|entry| u32::from(entry.mood.score())).sum();
    let avg_score = round_half_up(f64::from(total_score) / count) as i64;

    RollingStats {
        average_mood_label: mood_label_for_score(avg_score).to_string(),
        average_sleep_hours: format!("{avg_sleep:.1}"),
    }
}

/// Reverse lookup that never fails; averaging is lossy.
pub fn mood_label_for_score(score: i64) -> &'static str {
    MoodLevel::from_score(score)
        .map(MoodLevel::label)
        .unwrap_or(FALLBACK_MOOD_LABEL)
}

/// "{floor} - {ceil} Hours" band shown on the sleep card.
pub fn sleep_band(average_sleep_hours: &str) -> String {
    let value = average_sleep_hours
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0);
    format!("{} - {} Hours", value.floor(), value.ceil())
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn entries(samples: &[(MoodLevel, f64)]) -> Vec<MoodEntry> {
        let start = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        samples
            .iter()
            .enumerate()
            .map(|(index, (mood, sleep))| {
                MoodEntry::new(
                    (index + 1).to_string(),
                    start + Duration::days(index as i64),
                    *mood,
                    *sleep,
                )
            })
            .collect()
    }

    #[test]
    fn empty_history_uses_defaults() {
        let stats = rolling_stats(&[]);
        assert_eq!(
            stats,
            RollingStats {
                average_mood_label: "Neutral".to_string(),
                average_sleep_hours: "0".to_string(),
            }
        );
    }

    #[test]
    fn sleep_average_has_one_decimal() {
        let data = entries(&[
            (MoodLevel::VeryHappy, 8.0),
            (MoodLevel::Happy, 7.0),
            (MoodLevel::Neutral, 6.0),
            (MoodLevel::Sad, 5.0),
            (MoodLevel::VeryHappy, 9.0),
        ]);
        let stats = rolling_stats(&data);
        assert_eq!(stats.average_sleep_hours, "7.0");
        // (5 + 4 + 3 + 2 + 5) / 5 = 3.8
        assert_eq!(stats.average_mood_label, "Happy");
    }

    #[test]
    fn only_last_five_entries_count() {
        let mut samples = vec![(MoodLevel::VerySad, 1.0); 20];
        samples.extend([(MoodLevel::VeryHappy, 9.0); 5]);
        let stats = rolling_stats(&entries(&samples));
        assert_eq!(stats.average_mood_label, "Very Happy");
        assert_eq!(stats.average_sleep_hours, "9.0");
    }

    #[test]
    fn short_history_averages_everything() {
        let data = entries(&[(MoodLevel::Sad, 4.0), (MoodLevel::Sad, 5.0)]);
        let stats = rolling_stats(&data);
        assert_eq!(stats.average_mood_label, "Sad");
        assert_eq!(stats.average_sleep_hours, "4.5");
    }

    #[test]
    fn uniform_window_maps_back_to_its_mood() {
        for mood in MoodLevel::ALL {
            let stats = rolling_stats(&entries(&[(mood, 7.0); 5]));
            assert_eq!(stats.average_mood_label, mood.label());
        }
    }

    #[test]
    fn halves_round_up() {
        // scores 3 + 4 = 3.5 -> 4; sleep 6.25 -> 6.3
        let data = entries(&[
            (MoodLevel::Neutral, 6.0),
            (MoodLevel::Happy, 6.5),
            (MoodLevel::Neutral, 6.0),
            (MoodLevel::Happy, 6.5),
        ]);
        let stats = rolling_stats(&data);
        assert_eq!(stats.average_mood_label, "Happy");
        assert_eq!(stats.average_sleep_hours, "6.3");
    }

    #[test]
    fn unknown_score_falls_back_to_neutral() {
        assert_eq!(mood_label_for_score(0), "Neutral");
        assert_eq!(mood_label_for_score(6), "Neutral");
        assert_eq!(mood_label_for_score(1), "Very Sad");
    }

    #[test]
    fn sleep_band_brackets_average() {
        assert_eq!(sleep_band("7.0"), "7 - 7 Hours");
        assert_eq!(sleep_band("6.4"), "6 - 7 Hours");
        assert_eq!(sleep_band("0"), "0 - 0 Hours");
        assert_eq!(sleep_band("n/a"), "0 - 0 Hours");
    }
}
