mod config;
mod error;

use std::sync::Arc;

use clap::Parser;
use config::{Cli, Commands, FileConfig};
use error::CliError;
use typecast_engine::{Converter, Registry};

mod cmd;

#[tokio::main]
async fn main() {
    // stdout carries conversion output only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = FileConfig::load_or_default(&cli.config)?;
    let converter = Converter::new(Arc::new(Registry::builtin()?));

    match cli.command {
        Commands::Convert(args) => {
            cmd::convert::run(&args, &config, &converter, &mut std::io::stdout().lock())
        }
        Commands::Types(args) => cmd::types::run(&args, &converter, &mut std::io::stdout().lock()),
        Commands::Serve(args) => cmd::serve::run(&args, &config, converter).await,
    }
}
