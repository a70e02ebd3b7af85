//! moodlens - Journal sentiment dashboard for your terminal
//!
//! Scores free-text journal entries with a lexicon sentiment analyzer,
//! extracts keyword themes, and derives trend statistics, insights and
//! exports over a session-local entry store.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlensError;
