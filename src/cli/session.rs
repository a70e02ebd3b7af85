//! Interactive journal session
//!
//! Owns the entry store for the lifetime of the process; nothing is
//! persisted. One line of input is one interaction: plain text becomes an
//! entry, `:`-prefixed lines are commands.

use crate::application::export::ExportFormat;
use crate::application::{
    analytics, gratitude, AddEntryService, DashboardSummary, ExportSummary,
    GRATITUDE_DISPLAY_LIMIT,
};
use crate::cli::output;
use crate::domain::{EntryStore, PromptProvider};
use crate::error::{MoodlensError, Result};
use crate::infrastructure::SentimentBackend;
use chrono::Local;
use rand::rngs::StdRng;
use std::fs;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Entry cards shown by `:recent`.
const RECENT_DISPLAY_COUNT: usize = 5;

/// Themes listed in the stats view.
const THEME_DISPLAY_COUNT: usize = 15;

enum Control {
    Continue,
    Quit,
}

pub struct Session {
    store: EntryStore,
    service: AddEntryService,
    prompts: PromptProvider<StdRng>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            store: EntryStore::new(),
            service: AddEntryService::new(SentimentBackend::detect()),
            prompts: PromptProvider::from_entropy(),
        }
    }

    /// Run the interactive loop until `:quit` or end of input.
    ///
    /// Per-line failures (validation, unknown commands) are printed and the
    /// session continues; only input stream errors end the loop early.
    pub fn run(&mut self) -> Result<()> {
        println!("moodlens - private journal session (entries last only for this process)");
        println!("Write an entry and press Enter, or type :help for commands.");

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            match self.handle_line(line.trim()) {
                Ok(Control::Quit) => break,
                Ok(Control::Continue) => {}
                Err(e) => println!("{}", e.display_with_suggestions()),
            }
        }

        println!("Session ended. Your entries were not saved anywhere.");
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Result<Control> {
        if line.is_empty() {
            return Ok(Control::Continue);
        }

        match line.strip_prefix(':') {
            Some(command) => self.handle_command(command),
            None => {
                self.save_entry(line)?;
                Ok(Control::Continue)
            }
        }
    }

    fn handle_command(&mut self, command: &str) -> Result<Control> {
        let parts: Vec<&str> = command.split_whitespace().collect();

        match parts.as_slice() {
            ["help"] => self.print_help(),
            ["quit"] | ["q"] => return Ok(Control::Quit),
            ["prompt"] => println!("Writing prompt: {}", self.prompts.next_prompt()),
            ["recent"] => self.print_recent(),
            ["stats"] => self.print_stats(),
            ["gratitude"] => self.print_gratitude(),
            ["clear"] => {
                self.store.clear();
                println!("All entries cleared.");
            }
            ["export", format] => self.export(format, None)?,
            ["export", format, path] => self.export(format, Some(path))?,
            _ => return Err(MoodlensError::UnknownCommand(format!(":{}", command))),
        }

        Ok(Control::Continue)
    }

    fn save_entry(&mut self, text: &str) -> Result<()> {
        let entry = self.service.execute(&mut self.store, text)?;
        println!("Entry saved.");
        print!("{}", output::format_analysis(&entry.sentiment, &entry.keywords));
        Ok(())
    }

    fn print_help(&self) {
        println!("Write a line of text to save it as an entry. Commands:");
        println!("  :prompt                  show a writing prompt");
        println!("  :recent                  show the last {} entries", RECENT_DISPLAY_COUNT);
        println!("  :stats                   dashboard metrics and insights");
        println!("  :gratitude               your positive moments");
        println!("  :export json|csv [path]  export entries (stdout without a path)");
        println!("  :clear                   delete all entries");
        println!("  :quit                    end the session");
    }

    fn print_recent(&self) {
        if self.store.is_empty() {
            println!("No entries yet.");
            return;
        }

        for entry in self.store.recent(RECENT_DISPLAY_COUNT) {
            println!("{}", output::format_entry_card(entry));
        }
    }

    fn print_stats(&self) {
        if self.store.is_empty() {
            println!("Start writing entries to see your analytics and emotional trends!");
            return;
        }

        let entries = self.store.entries();

        println!("{}", output::format_summary(&DashboardSummary::from_entries(entries)));
        println!("Emotion distribution");
        print!("{}", output::format_distribution(&analytics::emotion_distribution(entries)));
        println!();
        println!("Sentiment breakdown");
        print!("{}", output::format_breakdown(&analytics::sentiment_breakdown(entries)));
        println!();
        println!("Most common themes");
        print!(
            "{}",
            output::format_themes(&analytics::top_themes(entries, THEME_DISPLAY_COUNT))
        );
        println!();
        println!("Insights");
        print!("{}", output::format_insights(&analytics::insights(entries)));
    }

    fn print_gratitude(&self) {
        if self.store.is_empty() {
            println!("Start writing entries to see your gratitude moments!");
            return;
        }

        let positive = gratitude::positive_entries(self.store.entries());
        if positive.is_empty() {
            println!("No positive entries yet. Keep writing - positive moments are coming!");
            return;
        }

        println!("{} positive moments captured", positive.len());
        println!();
        for entry in positive.iter().take(GRATITUDE_DISPLAY_LIMIT) {
            println!("{}", output::format_gratitude_entry(entry));
        }
    }

    fn export(&self, format: &str, path: Option<&str>) -> Result<()> {
        if self.store.is_empty() {
            return Err(MoodlensError::EmptyJournal);
        }

        let format = ExportFormat::from_str(format)
            .map_err(|_| MoodlensError::UnknownCommand(format!(":export {}", format)))?;

        let now = Local::now().naive_local();
        let payload = format.render(self.store.entries(), now)?;

        match path {
            Some(path) => {
                fs::write(path, payload)?;
                let summary = ExportSummary::from_entries(self.store.entries());
                print!("{}", output::format_export_summary(&summary));
                println!("Exported {} entries to {}", self.store.len(), path);
            }
            None => println!("{}", payload),
        }

        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
