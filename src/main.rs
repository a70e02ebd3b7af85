use clap::Parser;
use moodlens::application::MIN_ENTRY_CHARS;
use moodlens::cli::{output, Cli, Commands, Session};
use moodlens::domain::{extract_keywords, PromptProvider, DEFAULT_KEYWORD_COUNT};
use moodlens::error::MoodlensError;
use moodlens::infrastructure::SentimentBackend;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodlensError> {
    match cli.command {
        Some(Commands::Analyze { text }) => {
            let text = text.join(" ");
            let trimmed = text.trim();
            if trimmed.chars().count() <= MIN_ENTRY_CHARS {
                return Err(MoodlensError::EntryTooShort);
            }

            let score = SentimentBackend::detect().score(trimmed);
            let keywords = extract_keywords(trimmed, DEFAULT_KEYWORD_COUNT);
            print!("{}", output::format_analysis(&score, &keywords));
            Ok(())
        }
        Some(Commands::Prompt { seed }) => {
            let mut provider = match seed {
                Some(seed) => PromptProvider::seeded(seed),
                None => PromptProvider::from_entropy(),
            };
            println!("{}", provider.next_prompt());
            Ok(())
        }
        None => {
            // No subcommand: run an interactive journal session
            let mut session = Session::new();
            session.run()
        }
    }
}
