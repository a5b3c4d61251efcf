//! hostloc core: host model, locators, registrations, locator resolution, settings.

pub mod config;
pub mod container;
pub mod discovery;
pub mod host;
pub mod locator;
pub mod registration;
pub mod resolver;
pub mod server_properties;

pub use config::{Settings, SettingsLoader};
pub use container::{Container, ContainerError};
pub use discovery::DiscoveryHostLocator;
pub use host::Host;
pub use locator::{HostLocator, SharedHostLocator};
pub use registration::{
    Registration, RegistrationUpdater, SharedRegistration, StaticRegistration, WatchedRegistration,
};
pub use resolver::{resolve, ResolvedLocator};
pub use server_properties::{ServerProperties, ServerPropertiesHostLocator};

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
    #[error(transparent)]
    Container(#[from] ContainerError),
    #[error("host locator requested before refresh")]
    NotRefreshed,
    #[error("invalid override: {0}")]
    InvalidOverride(String),
    #[error("settings file not found: {}", .0.display())]
    MissingConfigFile(PathBuf),
    #[error("invalid registration {0:?}, expected service_id@host:port")]
    InvalidRegistration(String),
    #[error("host locator already published; {0} after refresh")]
    AlreadyRefreshed(&'static str),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CoreError {
    fn from(e: figment::Error) -> Self {
        CoreError::Config(Box::new(e))
    }
}
