//! Error types for moodlens

use thiserror::Error;

/// Main error type for the moodlens application
#[derive(Debug, Error)]
pub enum MoodlensError {
    #[error("Entry too short: write at least 10 characters")]
    EntryTooShort,

    #[error("Nothing to export: the journal has no entries")]
    EmptyJournal,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

impl MoodlensError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlensError::EntryTooShort => 3,
            MoodlensError::EmptyJournal => 4,
            MoodlensError::UnknownCommand(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlensError::EntryTooShort => {
                "Please write at least 10 characters.\n\n\
                Suggestions:\n\
                • Describe what happened and how it made you feel\n\
                • Type ':prompt' for a writing prompt to get started"
                    .to_string()
            }
            MoodlensError::EmptyJournal => {
                "Nothing to export: the journal has no entries.\n\n\
                Suggestions:\n\
                • Write an entry first, then run ':export json' or ':export csv'\n\
                • Entries live only for the current session"
                    .to_string()
            }
            MoodlensError::UnknownCommand(cmd) => {
                format!(
                    "Unknown command: '{}'\n\n\
                    Available commands:\n\
                    :prompt, :recent, :stats, :gratitude, :export json|csv [path], :clear, :quit\n\
                    Type ':help' for details",
                    cmd
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlensError
pub type Result<T> = std::result::Result<T, MoodlensError>;
