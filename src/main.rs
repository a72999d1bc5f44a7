use std::path::PathBuf;

use bountydex::{cli, config, errors};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            errors::CatalogError::Config(_) | errors::CatalogError::Yaml(_) => 2,
            errors::CatalogError::DataUnavailable(_) => 3,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn run(cli: cli::Cli) -> Result<(), errors::CatalogError> {
    let config_path = cli.config.as_ref().map(PathBuf::from);
    let config = config::load_config(config_path.as_deref()).await?;

    match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, config).await,
        cli::Commands::Query(args) => cli::query::handle_query(args, config).await,
        cli::Commands::Categories(args) => cli::categories::handle_categories(args, config).await,
        cli::Commands::Top(args) => cli::top::handle_top(args, config).await,
        cli::Commands::Validate(args) => cli::validate::handle_validate(args, config).await,
    }
}
