use crate::models::MoodEntry;
use crate::mood::MoodLevel;
use crate::store::EntryStore;
use chrono::{Local, NaiveDate};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::info;

/// Placeholder sleep duration until real capture exists.
pub const SLEEP_HOURS_RANGE: RangeInclusive<u8> = 3..=10;

pub fn submit_entry(store: &mut EntryStore, mood: MoodLevel) -> MoodEntry {
    submit_entry_with(store, mood, Local::now().date_naive(), &mut rand::rng())
}

pub fn submit_entry_with<R: Rng + ?Sized>(
    store: &mut EntryStore,
    mood: MoodLevel,
    today: NaiveDate,
    rng: &mut R,
) -> MoodEntry {
    let entry = MoodEntry::new(store.next_id(), today, mood, placeholder_sleep_hours(rng));
    store.append(entry.clone());

    info!(
        id = %entry.id,
        mood = entry.mood.key(),
        sleep_hours = entry.sleep_hours,
        "mood entry logged"
    );
    entry
}

pub fn placeholder_sleep_hours<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    f64::from(rng.random_range(SLEEP_HOURS_RANGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::builtin_entries;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn submit_appends_exactly_one_entry() {
        let mut store = EntryStore::new(builtin_entries());
        let before = store.len();
        let today = NaiveDate::from_ymd_opt(2024, 4, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        let entry = submit_entry_with(&mut store, MoodLevel::VeryHappy, today, &mut rng);

        assert_eq!(store.len(), before + 1);
        let last = store.last().unwrap();
        assert_eq!(last, &entry);
        assert_eq!(last.mood, MoodLevel::VeryHappy);
        assert_eq!(last.display_date, "Apr 16");
        assert_eq!(last.full_date, today);
        assert!((3.0..=10.0).contains(&last.sleep_hours));
        assert_eq!(last.sleep_hours.fract(), 0.0);
    }

    #[test]
    fn ids_stay_unique_across_submissions() {
        let mut store = EntryStore::new(builtin_entries());
        let today = NaiveDate::from_ymd_opt(2024, 4, 16).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for mood in MoodLevel::ALL {
            submit_entry_with(&mut store, mood, today, &mut rng);
        }
        let mut ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn placeholder_sleep_covers_whole_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 11];
        for _ in 0..2_000 {
            let hours = placeholder_sleep_hours(&mut rng);
            assert!((3.0..=10.0).contains(&hours), "out of range: {hours}");
            seen[hours as usize] = true;
        }
        assert!(seen[3..=10].iter().all(|hit| *hit));
    }

    #[test]
    fn submit_uses_local_clock() {
        let mut store = EntryStore::default();
        let before = Local::now().date_naive();
        let entry = submit_entry(&mut store, MoodLevel::Neutral);
        let after = Local::now().date_naive();
        assert_eq!(store.len(), 1);
        assert_eq!(entry.id, "1");
        assert!(entry.full_date == before || entry.full_date == after);
    }
}
