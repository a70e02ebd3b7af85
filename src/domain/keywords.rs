//! Keyword extraction: stopword filter plus frequency ranking

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Keywords kept per entry.
pub const DEFAULT_KEYWORD_COUNT: usize = 10;

/// Common function words, pronouns and generic journal filler excluded
/// from keyword ranking.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was", "are", "were", "be", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "this", "that", "these", "those",
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "am", "been", "being", "so", "than", "too", "very", "just", "dont", "now",
    "then", "once", "here", "there", "when", "where", "why", "how", "all", "both", "each", "few",
    "more", "most", "other", "some", "such", "only", "own", "same", "into", "through", "during",
    "before", "after", "above", "below", "between", "under", "again", "further", "up", "down",
    "out", "off", "over", "until", "while", "about", "get", "got", "like", "really", "also",
    "today", "day",
];

fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\b[a-zA-Z][a-zA-Z-]*\b").unwrap())
}

/// Extract up to `top_n` keywords from `text`, ranked by frequency.
///
/// Tokens are runs of letters (internal hyphens allowed), lower-cased;
/// digits and punctuation act as separators. Stopwords, tokens of length
/// <= 3 and purely-numeric tokens are dropped. Ties in frequency resolve
/// by first occurrence in the text, so the result is deterministic.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for found in word_regex().find_iter(&lowered) {
        let token = found.as_str();
        if token.len() <= 3
            || STOP_WORDS.contains(&token)
            || token.chars().all(|c| c.is_ascii_digit())
        {
            continue;
        }

        let count = counts.entry(token).or_insert(0);
        if *count == 0 {
            order.push(token);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(top_n);
    order.into_iter().map(String::from).collect()
}
