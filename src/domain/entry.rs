//! Journal entry model and the in-memory session store

use crate::domain::SentimentScore;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp format.
mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One journal submission plus its derived analysis.
///
/// Immutable after construction; the only way an entry disappears is the
/// store-wide clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "timestamp", with = "timestamp_format")]
    pub created_at: NaiveDateTime,
    pub date: NaiveDate,
    pub text: String,
    pub sentiment: SentimentScore,
    pub keywords: Vec<String>,
}

impl Entry {
    /// Create an entry at the given wall-clock time.
    ///
    /// The timestamp is truncated to whole seconds so serialized entries
    /// round-trip exactly; the calendar date is derived from it.
    pub fn new(
        text: String,
        sentiment: SentimentScore,
        keywords: Vec<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        let created_at = created_at.with_nanosecond(0).unwrap_or(created_at);
        Entry {
            date: created_at.date(),
            created_at,
            text,
            sentiment,
            keywords,
        }
    }

    /// Number of whitespace-separated words in the entry text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Ordered collection of entries for one session, newest first.
///
/// Session-local mutable state with a single owner; duplicates are allowed,
/// only temporal order matters. Nothing survives the process.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<Entry>,
}

impl EntryStore {
    pub fn new() -> Self {
        EntryStore::default()
    }

    /// Insert an entry at the front (newest first).
    pub fn save(&mut self, entry: Entry) {
        self.entries.insert(0, entry);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in store order (newest first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The newest `n` entries, fewer if the store is smaller.
    pub fn recent(&self, n: usize) -> &[Entry] {
        &self.entries[..n.min(self.entries.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry_at(text: &str, created_at: NaiveDateTime) -> Entry {
        Entry::new(
            text.to_string(),
            SentimentScore::neutral_fallback(),
            vec![],
            created_at,
        )
    }

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_date_derived_from_timestamp() {
        let entry = entry_at("a fine afternoon walk", ts(15, 9, 26));
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_timestamp_truncated_to_seconds() {
        let stamped = ts(8, 30, 1).with_nanosecond(987_654_321).unwrap();
        let entry = entry_at("morning pages before coffee", stamped);
        assert_eq!(entry.created_at, ts(8, 30, 1));
    }

    #[test]
    fn test_word_count() {
        let entry = entry_at("three  words   here", ts(9, 0, 0));
        assert_eq!(entry.word_count(), 3);
    }

    #[test]
    fn test_save_inserts_at_front() {
        let mut store = EntryStore::new();
        store.save(entry_at("first entry written", ts(9, 0, 0)));
        store.save(entry_at("second entry written", ts(10, 0, 0)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].text, "second entry written");
        assert_eq!(store.entries()[1].text, "first entry written");
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut store = EntryStore::new();
        store.save(entry_at("same text twice", ts(9, 0, 0)));
        store.save(entry_at("same text twice", ts(9, 5, 0)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = EntryStore::new();
        store.save(entry_at("soon to be gone", ts(9, 0, 0)));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_recent_caps_at_len() {
        let mut store = EntryStore::new();
        store.save(entry_at("only one entry", ts(9, 0, 0)));
        assert_eq!(store.recent(5).len(), 1);
        store.save(entry_at("and now a second", ts(10, 0, 0)));
        assert_eq!(store.recent(1)[0].text, "and now a second");
    }

    #[test]
    fn test_entry_json_round_trip() {
        let entry = Entry::new(
            "grateful for the quiet morning".to_string(),
            SentimentScore::from_polarity(0.6, 0.5, 0.4, 0.1),
            vec!["grateful".to_string(), "quiet".to_string()],
            ts(7, 45, 12),
        );

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"timestamp\":\"2025-03-14 07:45:12\""));
        assert!(json.contains("\"date\":\"2025-03-14\""));

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
