//! Application layer - Use cases over the journal

pub mod add_entry;
pub mod analytics;
pub mod export;
pub mod gratitude;

pub use add_entry::{AddEntryService, MIN_ENTRY_CHARS};
pub use analytics::{DashboardSummary, SentimentBreakdown, TREND_WINDOW};
pub use export::{ExportFormat, ExportSummary, APP_VERSION};
pub use gratitude::{positive_entries, GRATITUDE_DISPLAY_LIMIT};
