//! CLI: argument types and the `locate` command, shared by the `hostloc` binary and tests.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hostloc_core::{CoreError, HostLocator, SettingsLoader, StaticRegistration};

use crate::core::Application;
use crate::discovery::RegistrationModule;

#[derive(Parser)]
#[command(name = "hostloc")]
#[command(about = "Resolve the host recorded against trace spans")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the host locator and print the host as a Zipkin endpoint.
    Locate(LocateArgs),
}

#[derive(Args, Debug, Default)]
pub struct LocateArgs {
    /// YAML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override a setting (e.g. zipkin.locator.discovery.enabled=true)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
    /// Discovery registration as service_id@host:port
    #[arg(long)]
    pub registration: Option<String>,
}

/// Load settings from `loader` plus the arguments, wire modules, refresh, and
/// return the located host as Zipkin endpoint JSON.
pub fn run_locate(mut loader: SettingsLoader, args: &LocateArgs) -> Result<String, CoreError> {
    if let Some(ref path) = args.config {
        loader = loader.file(path);
    }
    for arg in &args.overrides {
        loader = loader.set_arg(arg)?;
    }
    let mut app = Application::new(loader.load()?);

    if let Some(ref raw) = args.registration {
        let reg = StaticRegistration::parse(raw)
            .ok_or_else(|| CoreError::InvalidRegistration(raw.clone()))?;
        app.register(&mut RegistrationModule::new().registration(reg))?;
    }

    app.refresh()?;
    let host = app.host_locator()?.locate();
    Ok(serde_json::to_string(&host)?)
}
