//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "moodlens")]
#[command(about = "Journal sentiment dashboard for your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a piece of text without starting a session
    Analyze {
        /// Text to analyze
        #[arg(value_name = "TEXT", required = true)]
        text: Vec<String>,
    },

    /// Print a writing prompt
    Prompt {
        /// Seed for reproducible prompt selection
        #[arg(short, long)]
        seed: Option<u64>,
    },
}
