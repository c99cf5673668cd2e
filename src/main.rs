use clap::Parser;
use coinbrief::app::App;
use coinbrief::cli::{check, Cli, Commands};
use coinbrief::config::Config;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            if let Err(e) = check::execute() {
                eprintln!("Configuration check failed: {e}");
                std::process::exit(1);
            }
        }
        Commands::Run => {
            let config = match Config::from_env() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to load configuration: {e}");
                    std::process::exit(1);
                }
            };

            config.init_logging();
            info!("coinbrief starting");

            if let Err(e) = App::run(config).await {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }

            info!("coinbrief finished");
        }
    }
}
