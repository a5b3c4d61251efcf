//! CLI for hostloc: load settings, wire modules, print the located host.

use clap::Parser;
use hostloc_rs::cli::{run_locate, Cli, Commands};
use hostloc_rs::SettingsLoader;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Locate(args) => {
            println!("{}", run_locate(SettingsLoader::new(), &args)?);
            Ok(())
        }
    }
}
