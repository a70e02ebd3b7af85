//! Gratitude view: the journal's positive moments

use crate::domain::Entry;

/// Compound threshold for an entry to count as a positive moment.
const GRATITUDE_THRESHOLD: f64 = 0.05;

/// Entries highlighted in the gratitude view.
pub const GRATITUDE_DISPLAY_LIMIT: usize = 10;

/// Entries with compound above 0.05, in store order (newest first).
pub fn positive_entries(entries: &[Entry]) -> Vec<&Entry> {
    entries
        .iter()
        .filter(|e| e.sentiment.compound > GRATITUDE_THRESHOLD)
        .collect()
}
