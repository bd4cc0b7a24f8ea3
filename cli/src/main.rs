//! Molecule CLI - test instances across pluggable infrastructure drivers

use clap::Parser;
use tracing_subscriber::EnvFilter;

use molecule_cli::app::error_code;
use molecule_cli::cli::Cli;
use molecule_cli::output::json::format_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .init();

    let json = cli.json;
    if let Err(e) = cli.run().await {
        match format_error(&format!("{e:#}"), error_code(&e)) {
            Ok(obj) if json => println!("{obj}"),
            _ => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
