use crate::models::MoodEntry;

/// Append-only log of mood entries, in the order they were recorded.
#[derive(Debug, Clone, Default)]
pub struct EntryStore {
    entries: Vec<MoodEntry>,
}

impl EntryStore {
    pub fn new(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    /// Smallest numeric id at or above `len + 1` not already taken.
    pub fn next_id(&self) -> String {
        let mut candidate = self.entries.len() as u64 + 1;
        loop {
            let id = candidate.to_string();
            if !self.entries.iter().any(|entry| entry.id == id) {
                return id;
            }
            candidate += 1;
        }
    }

    pub fn append(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::MoodLevel;
    use chrono::NaiveDate;

    fn entry(id: &str) -> MoodEntry {
        let date = NaiveDate::from_ymd_opt(2024, 4, 7).unwrap();
        MoodEntry::new(id, date, MoodLevel::Happy, 7.0)
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = EntryStore::default();
        store.append(entry("a"));
        store.append(entry("b"));
        let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(store.last().map(|e| e.id.as_str()), Some("b"));
    }

    #[test]
    fn next_id_skips_taken_ids() {
        let store = EntryStore::new(vec![entry("2"), entry("3")]);
        assert_eq!(store.next_id(), "4");

        let store = EntryStore::new(vec![entry("x"), entry("y")]);
        assert_eq!(store.next_id(), "3");

        assert_eq!(EntryStore::default().next_id(), "1");
    }
}
