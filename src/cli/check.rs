//! Configuration check command.

use crate::config::Config;
use crate::error::Result;

/// Validate the environment configuration without starting a run.
pub fn execute() -> Result<()> {
    println!("Checking environment configuration");
    println!();

    let config = Config::from_env()?;

    println!("✓ Configuration is valid");
    println!();
    println!("Summary:");
    println!("  Quote source: {}", config.quotes.api_url);
    println!("  LLM endpoint: {}", config.llm.api_url);
    println!("  Candidate models: {}", config.llm.models.join(", "));
    println!("  Workspace database: {}", config.notion.database_id);
    println!("  Telegram chat: {}", config.telegram.chat_id);
    println!();
    println!("Configuration is ready to use.");

    Ok(())
}
