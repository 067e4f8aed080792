//! Interactive chat loop.

use super::SourceArg;
use clap::Args;
use hidayah_core::{config::AppConfig, AppResult};
use hidayah_retrieval::build_pipeline;
use std::io::{BufRead, Write};

/// Interactive question-answering loop
#[derive(Args, Debug)]
pub struct ChatCommand {
    /// Which corpus to search
    #[arg(short, long, value_enum, default_value = "auto")]
    pub source: SourceArg,

    /// Number of passages to retrieve per turn
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,
}

impl ChatCommand {
    /// Execute the chat command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let pipeline = build_pipeline(config)?;

        println!("Hidayah - ask about the Quran and Hadith. Type 'exit' to quit.");
        println!();

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("You: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let query = line?.trim().to_string();

            if query.is_empty() {
                continue;
            }
            if query.eq_ignore_ascii_case("exit") || query.eq_ignore_ascii_case("quit") {
                println!("Chat ended.");
                break;
            }

            // One failed turn should not end the session
            match pipeline
                .answer(&query, self.source.to_selector(), self.top_k)
                .await
            {
                Ok(response) => {
                    println!();
                    println!("Answer:");
                    println!("{}", response.answer);
                    println!();
                }
                Err(e) => {
                    tracing::error!("Failed to answer: {}", e);
                    println!("Sorry, something went wrong: {}", e);
                    println!();
                }
            }
        }

        Ok(())
    }
}
