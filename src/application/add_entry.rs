//! Add entry use case

use crate::domain::{extract_keywords, Entry, EntryStore, DEFAULT_KEYWORD_COUNT};
use crate::error::{MoodlensError, Result};
use crate::infrastructure::SentimentBackend;
use chrono::{Local, NaiveDateTime};

/// Minimum trimmed length for a submission to be accepted.
pub const MIN_ENTRY_CHARS: usize = 10;

/// Service for validating and saving journal entries
pub struct AddEntryService {
    backend: SentimentBackend,
}

impl AddEntryService {
    /// Create a new add entry service
    pub fn new(backend: SentimentBackend) -> Self {
        AddEntryService { backend }
    }

    /// Validate, analyze and save a submission, returning the stored entry.
    ///
    /// Trimmed input of `MIN_ENTRY_CHARS` characters or fewer is rejected
    /// and nothing is stored.
    pub fn execute(&self, store: &mut EntryStore, text: &str) -> Result<Entry> {
        self.execute_at(store, text, Local::now().naive_local())
    }

    /// Same as `execute`, with the timestamp supplied by the caller.
    pub fn execute_at(
        &self,
        store: &mut EntryStore,
        text: &str,
        created_at: NaiveDateTime,
    ) -> Result<Entry> {
        let trimmed = text.trim();
        if trimmed.chars().count() <= MIN_ENTRY_CHARS {
            return Err(MoodlensError::EntryTooShort);
        }

        let sentiment = self.backend.score(trimmed);
        let keywords = extract_keywords(trimmed, DEFAULT_KEYWORD_COUNT);

        let entry = Entry::new(trimmed.to_string(), sentiment, keywords, created_at);
        store.save(entry.clone());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_short_submission_rejected() {
        let service = AddEntryService::new(SentimentBackend::detect());
        let mut store = EntryStore::new();

        for text in ["", "   ", "ten chars!", "     hello     "] {
            let result = service.execute_at(&mut store, text, ts());
            assert!(matches!(result, Err(MoodlensError::EntryTooShort)));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_eleven_chars_accepted() {
        let service = AddEntryService::new(SentimentBackend::detect());
        let mut store = EntryStore::new();

        let entry = service.execute_at(&mut store, "eleven char", ts()).unwrap();
        assert_eq!(entry.text, "eleven char");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_text_is_trimmed() {
        let service = AddEntryService::new(SentimentBackend::detect());
        let mut store = EntryStore::new();

        let entry = service
            .execute_at(&mut store, "  a walk in the spring rain  \n", ts())
            .unwrap();
        assert_eq!(entry.text, "a walk in the spring rain");
    }

    #[test]
    fn test_entry_carries_analysis() {
        let service = AddEntryService::new(SentimentBackend::detect());
        let mut store = EntryStore::new();

        let entry = service
            .execute_at(
                &mut store,
                "Grateful for a wonderful morning of meditation and coffee.",
                ts(),
            )
            .unwrap();

        assert!(entry.sentiment.compound > 0.05);
        assert!(entry.keywords.contains(&"grateful".to_string()));
        assert!(entry.keywords.len() <= DEFAULT_KEYWORD_COUNT);
    }

    #[test]
    fn test_newest_entry_first() {
        let service = AddEntryService::new(SentimentBackend::detect());
        let mut store = EntryStore::new();

        service
            .execute_at(&mut store, "first entry of the morning", ts())
            .unwrap();
        service
            .execute_at(&mut store, "second entry of the morning", ts())
            .unwrap();

        assert_eq!(store.entries()[0].text, "second entry of the morning");
        assert_eq!(store.entries()[1].text, "first entry of the morning");
    }

    #[test]
    fn test_unavailable_backend_still_saves() {
        let service = AddEntryService::new(SentimentBackend::Unavailable);
        let mut store = EntryStore::new();

        let entry = service
            .execute_at(&mut store, "a long enough entry for saving", ts())
            .unwrap();
        assert_eq!(entry.sentiment.compound, 0.0);
        assert_eq!(entry.sentiment.neutral, 0.34);
        assert_eq!(store.len(), 1);
    }
}
