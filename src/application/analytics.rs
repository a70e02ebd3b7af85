//! Derived statistics, trends and insights over the entry collection
//!
//! Every function here is a read-only view over the store's entries and
//! recomputes from scratch on each call. Callers check for emptiness first;
//! the functions assume at least one entry.

use crate::domain::{Emotion, Entry};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};

/// Number of most-recent entries compared against the overall mean.
pub const TREND_WINDOW: usize = 5;

/// Compound threshold an entry must exceed to count as a positive day.
const POSITIVE_RATIO_THRESHOLD: f64 = 0.05;

/// Arithmetic mean of all compound scores.
pub fn average_compound(entries: &[Entry]) -> f64 {
    let total: f64 = entries.iter().map(|e| e.sentiment.compound).sum();
    total / entries.len() as f64
}

/// Percentage of entries with compound above 0.05.
pub fn positive_ratio(entries: &[Entry]) -> f64 {
    let positive = entries
        .iter()
        .filter(|e| e.sentiment.compound > POSITIVE_RATIO_THRESHOLD)
        .count();
    positive as f64 / entries.len() as f64 * 100.0
}

/// Count of entries with strictly positive compound.
///
/// Uses a different threshold than `positive_ratio`; the two are separate
/// metrics.
pub fn positive_count(entries: &[Entry]) -> usize {
    entries
        .iter()
        .filter(|e| e.sentiment.compound > 0.0)
        .count()
}

/// Count per emotion label, covering only labels actually present.
pub fn emotion_distribution(entries: &[Entry]) -> BTreeMap<Emotion, usize> {
    let mut distribution = BTreeMap::new();
    for entry in entries {
        *distribution.entry(entry.sentiment.emotion).or_insert(0) += 1;
    }
    distribution
}

/// Mean positive/neutral/negative proportions, as percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
}

pub fn sentiment_breakdown(entries: &[Entry]) -> SentimentBreakdown {
    let count = entries.len() as f64;
    SentimentBreakdown {
        positive: entries.iter().map(|e| e.sentiment.positive).sum::<f64>() / count * 100.0,
        neutral: entries.iter().map(|e| e.sentiment.neutral).sum::<f64>() / count * 100.0,
        negative: entries.iter().map(|e| e.sentiment.negative).sum::<f64>() / count * 100.0,
    }
}

/// Mean compound of the most-recent `TREND_WINDOW` entries minus the mean
/// of all entries.
///
/// Recency is chronological, not insertion order: entries are re-sorted
/// ascending by creation time before the tail is taken.
pub fn trend_delta(entries: &[Entry]) -> f64 {
    let mut by_time: Vec<&Entry> = entries.iter().collect();
    by_time.sort_by_key(|e| e.created_at);

    let tail = &by_time[by_time.len().saturating_sub(TREND_WINDOW)..];
    let recent: f64 =
        tail.iter().map(|e| e.sentiment.compound).sum::<f64>() / tail.len() as f64;

    recent - average_compound(entries)
}

/// Top `n` keywords by aggregate frequency across all entries.
///
/// Ties resolve by first appearance walking the store order, keyword list
/// by keyword list.
pub fn top_themes(entries: &[Entry], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for entry in entries {
        for keyword in &entry.keywords {
            let count = counts.entry(keyword).or_insert(0);
            if *count == 0 {
                order.push(keyword);
            }
            *count += 1;
        }
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(n);
    order
        .into_iter()
        .map(|keyword| (keyword.to_string(), counts[keyword]))
        .collect()
}

/// Chart-ready (time, compound) series, ascending by creation time.
pub fn trend_points(entries: &[Entry]) -> Vec<(NaiveDateTime, f64)> {
    let mut points: Vec<(NaiveDateTime, f64)> = entries
        .iter()
        .map(|e| (e.created_at, e.sentiment.compound))
        .collect();
    points.sort_by_key(|(time, _)| *time);
    points
}

/// Human-readable observations chosen by fixed threshold rules.
///
/// Rules are evaluated independently (zero or several may fire); all
/// comparisons are strict, so boundary values do not fire a rule.
pub fn insights(entries: &[Entry]) -> Vec<String> {
    let mut insights = Vec::new();

    let average = average_compound(entries);
    if average > 0.3 {
        insights.push(
            "You're maintaining a very positive mindset! Keep nurturing these feelings."
                .to_string(),
        );
    } else if average > 0.1 {
        insights.push("Your overall mood is positive. Great emotional balance!".to_string());
    } else if average < -0.1 {
        insights.push(
            "You've been experiencing challenging emotions. Remember, it's okay to seek support."
                .to_string(),
        );
    }

    let ratio = positive_ratio(entries);
    if ratio > 70.0 {
        insights.push(format!(
            "{:.0}% of your entries show positive emotions. You're doing amazing!",
            ratio
        ));
    }

    let delta = trend_delta(entries);
    if delta > 0.1 {
        insights.push(
            "Your recent entries show improvement in mood. Keep up the positive momentum!"
                .to_string(),
        );
    } else if delta < -0.1 {
        insights.push(
            "Recent entries show lower mood. Consider what might be affecting you and practice self-care."
                .to_string(),
        );
    }

    let themes = top_themes(entries, 3);
    if !themes.is_empty() {
        let joined = themes
            .iter()
            .map(|(keyword, _)| keyword.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        insights.push(format!(
            "Your most recurring themes: {}. These topics are central to your current experience.",
            joined
        ));
    }

    insights
}

/// Headline metrics for the stats view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_entries: usize,
    pub average_compound: f64,
    pub positive_ratio: f64,
    pub positive_count: usize,
}

impl DashboardSummary {
    pub fn from_entries(entries: &[Entry]) -> Self {
        DashboardSummary {
            total_entries: entries.len(),
            average_compound: average_compound(entries),
            positive_ratio: positive_ratio(entries),
            positive_count: positive_count(entries),
        }
    }
}
