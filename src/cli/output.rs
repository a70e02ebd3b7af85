//! Output formatting utilities

use crate::application::{DashboardSummary, ExportSummary, SentimentBreakdown};
use crate::domain::{Emotion, Entry, SentimentScore};
use std::collections::BTreeMap;

/// Characters of entry text shown on a card before truncation.
pub const ENTRY_PREVIEW_CHARS: usize = 300;

/// Keywords shown on an entry card.
const CARD_KEYWORD_COUNT: usize = 5;

/// Keywords listed in the instant analysis after saving.
const ANALYSIS_KEYWORD_COUNT: usize = 8;

/// Format the analysis of a single text: emotion, scores and keywords.
pub fn format_analysis(score: &SentimentScore, keywords: &[String]) -> String {
    let mut output = String::new();
    output.push_str(&format!("Emotion: {}\n", score.emotion));
    output.push_str(&format!("Sentiment score: {:.2}\n", score.compound));
    output.push_str(&format!(
        "Positive: {:.1}%  Neutral: {:.1}%  Negative: {:.1}%\n",
        score.positive * 100.0,
        score.neutral * 100.0,
        score.negative * 100.0
    ));
    output.push_str(&format!("Keywords found: {}\n", keywords.len()));
    if !keywords.is_empty() {
        let shown: Vec<&str> = keywords
            .iter()
            .take(ANALYSIS_KEYWORD_COUNT)
            .map(String::as_str)
            .collect();
        output.push_str(&format!("Key themes: {}\n", shown.join(", ")));
    }
    output
}

/// Format one entry as a card: timestamp, emotion, preview, keywords.
pub fn format_entry_card(entry: &Entry) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "[{}]  {}\n",
        entry.created_at.format("%Y-%m-%d %H:%M:%S"),
        entry.sentiment.emotion
    ));

    let preview: String = entry.text.chars().take(ENTRY_PREVIEW_CHARS).collect();
    output.push_str(&preview);
    if entry.text.chars().count() > ENTRY_PREVIEW_CHARS {
        output.push_str("...");
    }
    output.push('\n');

    if !entry.keywords.is_empty() {
        let shown: Vec<&str> = entry
            .keywords
            .iter()
            .take(CARD_KEYWORD_COUNT)
            .map(String::as_str)
            .collect();
        output.push_str(&format!("Keywords: {}\n", shown.join(", ")));
    }
    output
}

/// Format a gratitude highlight: timestamp, compound, full text.
pub fn format_gratitude_entry(entry: &Entry) -> String {
    format!(
        "[{}]  Sentiment: {:.2}\n{}\n",
        entry.created_at.format("%Y-%m-%d %H:%M:%S"),
        entry.sentiment.compound,
        entry.text
    )
}

/// Format the headline metric block of the stats view.
pub fn format_summary(summary: &DashboardSummary) -> String {
    format!(
        "Total entries:    {}\n\
         Avg sentiment:    {:.2}\n\
         Positive days:    {:.0}%\n\
         Positive entries: {}\n",
        summary.total_entries,
        summary.average_compound,
        summary.positive_ratio,
        summary.positive_count
    )
}

/// Format the emotion distribution, most positive label first.
pub fn format_distribution(distribution: &BTreeMap<Emotion, usize>) -> String {
    let mut output = String::new();
    for (emotion, count) in distribution {
        output.push_str(&format!("{:<14} {}\n", emotion.to_string(), count));
    }
    output
}

/// Format mean sentiment proportions as percentages.
pub fn format_breakdown(breakdown: &SentimentBreakdown) -> String {
    format!(
        "Positive: {:.1}%\nNeutral:  {:.1}%\nNegative: {:.1}%\n",
        breakdown.positive, breakdown.neutral, breakdown.negative
    )
}

/// Format theme frequencies as `keyword (count)` lines.
pub fn format_themes(themes: &[(String, usize)]) -> String {
    if themes.is_empty() {
        return "No recurring themes yet\n".to_string();
    }

    let mut output = String::new();
    for (keyword, count) in themes {
        output.push_str(&format!("{:<20} {}\n", keyword, count));
    }
    output
}

/// Format the insight list, one bullet per message.
pub fn format_insights(insights: &[String]) -> String {
    if insights.is_empty() {
        return "No insights yet - keep writing\n".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        output.push_str(&format!("• {}\n", insight));
    }
    output
}

/// Format the pre-export summary block.
pub fn format_export_summary(summary: &ExportSummary) -> String {
    format!(
        "Entries ready: {}\nTotal words:   {}\nDate range:    {}\n",
        summary.total_entries,
        summary.total_words,
        summary.date_range()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(text: &str, compound: f64, keywords: &[&str]) -> Entry {
        Entry::new(
            text.to_string(),
            SentimentScore::from_polarity(compound, 0.5, 0.4, 0.1),
            keywords.iter().map(|k| k.to_string()).collect(),
            NaiveDate::from_ymd_opt(2025, 3, 14)
                .unwrap()
                .and_hms_opt(18, 22, 5)
                .unwrap(),
        )
    }

    #[test]
    fn test_entry_card_contains_metadata() {
        let output = format_entry_card(&entry(
            "An evening walk cleared my head.",
            0.4,
            &["evening", "walk"],
        ));
        assert!(output.contains("[2025-03-14 18:22:05]"));
        assert!(output.contains("Positive"));
        assert!(output.contains("An evening walk cleared my head."));
        assert!(output.contains("Keywords: evening, walk"));
    }

    #[test]
    fn test_entry_card_truncates_long_text() {
        let long_text = "x".repeat(350);
        let output = format_entry_card(&entry(&long_text, 0.0, &[]));
        assert!(output.contains(&format!("{}...", "x".repeat(300))));
        assert!(!output.contains(&"x".repeat(301)));
    }

    #[test]
    fn test_entry_card_shows_at_most_five_keywords() {
        let output = format_entry_card(&entry(
            "enough text here",
            0.0,
            &["one", "two", "three", "four", "five", "six"],
        ));
        assert!(output.contains("one, two, three, four, five"));
        assert!(!output.contains("six"));
    }

    #[test]
    fn test_gratitude_entry_keeps_full_text() {
        let long_text = "y".repeat(350);
        let output = format_gratitude_entry(&entry(&long_text, 0.8, &[]));
        assert!(output.contains(&long_text));
        assert!(output.contains("Sentiment: 0.80"));
    }

    #[test]
    fn test_analysis_block() {
        let score = SentimentScore::from_polarity(0.62, 0.45, 0.5, 0.05);
        let keywords = vec!["coffee".to_string(), "morning".to_string()];
        let output = format_analysis(&score, &keywords);

        assert!(output.contains("Emotion: Very Positive"));
        assert!(output.contains("Sentiment score: 0.62"));
        assert!(output.contains("Positive: 45.0%"));
        assert!(output.contains("Keywords found: 2"));
        assert!(output.contains("Key themes: coffee, morning"));
    }

    #[test]
    fn test_analysis_limits_listed_themes() {
        let score = SentimentScore::neutral_fallback();
        let keywords: Vec<String> = (1..=10).map(|i| format!("theme{:02}", i)).collect();
        let output = format_analysis(&score, &keywords);

        assert!(output.contains("Keywords found: 10"));
        assert!(output.contains("theme08"));
        assert!(!output.contains("theme09"));
    }

    #[test]
    fn test_summary_block() {
        let summary = DashboardSummary {
            total_entries: 5,
            average_compound: 0.1,
            positive_ratio: 40.0,
            positive_count: 2,
        };
        let output = format_summary(&summary);
        assert!(output.contains("Total entries:    5"));
        assert!(output.contains("Avg sentiment:    0.10"));
        assert!(output.contains("Positive days:    40%"));
        assert!(output.contains("Positive entries: 2"));
    }

    #[test]
    fn test_distribution_lists_present_labels() {
        let mut distribution = BTreeMap::new();
        distribution.insert(Emotion::Positive, 3);
        distribution.insert(Emotion::Negative, 1);

        let output = format_distribution(&distribution);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Positive"));
        assert!(lines[1].starts_with("Negative"));
    }

    #[test]
    fn test_insights_bullets_and_empty_state() {
        let output = format_insights(&["Something encouraging.".to_string()]);
        assert!(output.contains("• Something encouraging."));

        let empty = format_insights(&[]);
        assert!(empty.contains("keep writing"));
    }

    #[test]
    fn test_themes_empty_state() {
        assert!(format_themes(&[]).contains("No recurring themes"));
        let output = format_themes(&[("family".to_string(), 3)]);
        assert!(output.contains("family"));
        assert!(output.contains('3'));
    }
}
