use clap::Parser;
use tracing::{error, info};

use ltcwatch::adapter::inbound::cli::output::{self, OutputConfig};
use ltcwatch::adapter::inbound::cli::{check, query, Cli, Commands};
use ltcwatch::app::App;
use ltcwatch::infrastructure::config::settings::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig { json: cli.json });

    let command = cli.selected_command();
    if command == Commands::Check {
        if let Err(e) = check::execute_check(&cli.config) {
            output::error(&format!("Configuration check failed: {e}"));
            std::process::exit(1);
        }
        return;
    }

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match command {
        Commands::Run => {
            info!(address = %config.wallet.address, "ltcwatch starting");
            let result = App::run(config).await;
            info!("ltcwatch stopped");
            result
        }
        Commands::Balance => query::execute_balance(&config).await,
        Commands::Transactions { count } => query::execute_transactions(&config, count).await,
        Commands::Check => Ok(()),
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
