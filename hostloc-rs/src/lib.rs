//! hostloc Rust facade: Application, modules and host locator autoconfiguration on hostloc-core.

pub mod cli;
pub mod core;
pub mod discovery;
pub mod locator;

pub use crate::core::{Application, Module};
pub use discovery::RegistrationModule;
pub use locator::CustomLocatorModule;
pub use hostloc_core::{
    CoreError, Host, HostLocator, ResolvedLocator, Settings, SettingsLoader, SharedHostLocator,
    SharedRegistration, StaticRegistration, WatchedRegistration,
};
