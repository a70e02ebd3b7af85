//! Domain layer - Pure models and analysis functions

pub mod entry;
pub mod keywords;
pub mod prompts;
pub mod sentiment;

pub use entry::{Entry, EntryStore};
pub use keywords::{extract_keywords, DEFAULT_KEYWORD_COUNT, STOP_WORDS};
pub use prompts::{PromptProvider, WRITING_PROMPTS};
pub use sentiment::{Emotion, SentimentScore};
