//! Export use case: JSON and CSV serializations of the journal

use crate::domain::Entry;
use crate::error::{MoodlensError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::str::FromStr;

/// Version tag stamped into JSON exports.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Default download file name for an export taken at `at`.
    pub fn default_file_name(&self, at: NaiveDateTime) -> String {
        format!(
            "moodlens_journal_{}.{}",
            at.format("%Y%m%d_%H%M%S"),
            self.extension()
        )
    }

    /// Serialize `entries` (store order, newest first) in this format.
    pub fn render(&self, entries: &[Entry], exported_at: NaiveDateTime) -> Result<String> {
        match self {
            ExportFormat::Json => export_json(entries, exported_at),
            ExportFormat::Csv => export_csv(entries),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(format!(
                "Invalid export format: '{}'. Valid formats are: json, csv",
                s
            )),
        }
    }
}

#[derive(Serialize)]
struct JournalExport<'a> {
    exported_at: String,
    total_entries: usize,
    app_version: &'static str,
    entries: &'a [Entry],
}

/// Pretty-printed JSON blob with export metadata and the full entry list.
///
/// The timestamp is passed in so the output is reproducible byte for byte.
pub fn export_json(entries: &[Entry], exported_at: NaiveDateTime) -> Result<String> {
    if entries.is_empty() {
        return Err(MoodlensError::EmptyJournal);
    }

    let export = JournalExport {
        exported_at: exported_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        total_entries: entries.len(),
        app_version: APP_VERSION,
        entries,
    };

    Ok(serde_json::to_string_pretty(&export)?)
}

/// Flat CSV table, one row per entry, full untruncated text.
pub fn export_csv(entries: &[Entry]) -> Result<String> {
    if entries.is_empty() {
        return Err(MoodlensError::EmptyJournal);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "Timestamp",
        "Text",
        "Emotion",
        "Sentiment_Score",
        "Positive",
        "Neutral",
        "Negative",
        "Keywords",
    ])?;

    for entry in entries {
        writer.write_record([
            entry.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            entry.text.clone(),
            entry.sentiment.emotion.to_string(),
            entry.sentiment.compound.to_string(),
            entry.sentiment.positive.to_string(),
            entry.sentiment.neutral.to_string(),
            entry.sentiment.negative.to_string(),
            entry.keywords.join(", "),
        ])?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::other(e.to_string()).into())
}

/// Headline figures shown before exporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub total_entries: usize,
    pub total_words: usize,
    pub oldest: NaiveDate,
    pub newest: NaiveDate,
}

impl ExportSummary {
    /// Summarize entries in store order (newest first). Assumes non-empty.
    pub fn from_entries(entries: &[Entry]) -> Self {
        ExportSummary {
            total_entries: entries.len(),
            total_words: entries.iter().map(|e| e.word_count()).sum(),
            oldest: entries[entries.len() - 1].date,
            newest: entries[0].date,
        }
    }

    pub fn date_range(&self) -> String {
        format!("{} to {}", self.oldest, self.newest)
    }
}
