//! Ask command handler.

use super::SourceArg;
use clap::Args;
use hidayah_core::{config::AppConfig, AppResult};
use hidayah_retrieval::build_pipeline;

/// Answer one question with citations
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to ask
    pub query: String,

    /// Which corpus to search
    #[arg(short, long, value_enum, default_value = "auto")]
    pub source: SourceArg,

    /// Number of passages to retrieve
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Print the full response as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        tracing::info!("Answering query: {}", self.query);

        let pipeline = build_pipeline(config)?;
        let response = pipeline
            .answer(&self.query, self.source.to_selector(), self.top_k)
            .await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", response.answer);
            println!();
            println!(
                "[{} | {:.2}s | {} reference link(s)]",
                response.source_type, response.processing_time, response.references_count
            );
            if let Some(alternatives) = &response.alternatives_used {
                println!("[searched related concepts: {}]", alternatives.join(", "));
            }
        }

        Ok(())
    }
}
