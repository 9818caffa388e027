use clap::Parser;

use tidyhub::cli::{self, Cli, Commands};
use tidyhub::logger::init_logger;
use tidyhub::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration, honoring --config/--env plus CLI overrides
    let settings = match cli::load_and_merge_config(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    init_logger(&settings.logger)?;

    // Dispatch subcommands (dry runs, migrations, token issuance)
    cli::execute_command(&cli, settings.clone()).await?;

    // serve (or no subcommand) ends with a running HTTP server
    if should_start_server(&cli) {
        Server::new(settings).run().await?;
    }

    Ok(())
}

/// True when the invocation should start the HTTP server
fn should_start_server(cli: &Cli) -> bool {
    match &cli.command {
        None => true,
        Some(Commands::Serve { dry_run, .. }) => !*dry_run,
        Some(_) => false,
    }
}
