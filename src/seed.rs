use crate::config::SeedSource;
use crate::models::MoodEntry;
use crate::mood::MoodLevel;
use crate::store::EntryStore;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

#[derive(Debug, Deserialize)]
struct SeedEntry {
    #[serde(default)]
    id: Option<String>,
    full_date: NaiveDate,
    mood: MoodLevel,
    sleep_hours: f64,
}

const BUILTIN: [(&str, (i32, u32, u32), MoodLevel, f64); 11] = [
    ("1", (2024, 3, 31), MoodLevel::VeryHappy, 8.0),
    ("2", (2024, 4, 2), MoodLevel::Happy, 7.0),
    ("3", (2024, 4, 4), MoodLevel::Neutral, 6.0),
    ("4", (2024, 4, 6), MoodLevel::Sad, 5.0),
    ("5", (2024, 4, 7), MoodLevel::VeryHappy, 9.0),
    ("6", (2024, 4, 9), MoodLevel::Happy, 7.5),
    ("7", (2024, 4, 10), MoodLevel::Neutral, 6.5),
    ("8", (2024, 4, 12), MoodLevel::VerySad, 4.0),
    ("9", (2024, 4, 13), MoodLevel::Sad, 5.5),
    ("10", (2024, 4, 14), MoodLevel::Happy, 8.0),
    ("11", (2024, 4, 15), MoodLevel::VeryHappy, 9.0),
];

pub fn builtin_entries() -> Vec<MoodEntry> {
    BUILTIN
        .iter()
        .filter_map(|(id, (y, m, d), mood, sleep)| {
            NaiveDate::from_ymd_opt(*y, *m, *d)
                .map(|date| MoodEntry::new(*id, date, *mood, *sleep))
        })
        .collect()
}

pub async fn load_seed(source: &SeedSource) -> Vec<MoodEntry> {
    match source {
        SeedSource::Builtin => builtin_entries(),
        SeedSource::Empty => Vec::new(),
        SeedSource::File(path) => load_seed_file(path).await,
    }
}

async fn load_seed_file(path: &Path) -> Vec<MoodEntry> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("failed to read seed file {}: {err}", path.display());
            return builtin_entries();
        }
    };

    match serde_json::from_slice::<Vec<SeedEntry>>(&bytes) {
        Ok(seed) => entries_from_seed(seed),
        Err(err) => {
            error!("failed to parse seed file {}: {err}", path.display());
            builtin_entries()
        }
    }
}

fn entries_from_seed(seed: Vec<SeedEntry>) -> Vec<MoodEntry> {
    let mut store = EntryStore::default();
    for item in seed {
        if !item.sleep_hours.is_finite() || item.sleep_hours < 0.0 {
            warn!("skipping seed entry with invalid sleep hours {}", item.sleep_hours);
            continue;
        }
        let id = match item.id {
            Some(id) if !store.entries().iter().any(|entry| entry.id == id) => id,
            _ => store.next_id(),
        };
        store.append(MoodEntry::new(id, item.full_date, item.mood, item.sleep_hours));
    }
    store.entries().to_vec()
}
