//! Default host locator: static server properties read once from local configuration.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::host::Host;
use crate::locator::HostLocator;

pub const DEFAULT_SERVICE_NAME: &str = "unknown";
pub const DEFAULT_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// `server.*` settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerProperties {
    #[serde(deserialize_with = "crate::config::lenient_string")]
    pub address: Option<String>,
    pub port: Option<u16>,
}

/// Locator backed by static server properties. Host is computed once.
#[derive(Clone, Debug)]
pub struct ServerPropertiesHostLocator {
    host: Host,
}

impl ServerPropertiesHostLocator {
    /// Service name: `zipkin.service.name`, else `application.name`, else "unknown".
    pub fn new(settings: &Settings) -> Self {
        let service_name = settings
            .service_name_override()
            .or(settings.application.name.as_deref())
            .unwrap_or(DEFAULT_SERVICE_NAME);
        let address = settings
            .server
            .address
            .as_deref()
            .unwrap_or(DEFAULT_ADDRESS);
        let port = settings.server.port.unwrap_or(DEFAULT_PORT);
        Self {
            host: Host::new(service_name, address, port),
        }
    }
}

impl HostLocator for ServerPropertiesHostLocator {
    fn locate(&self) -> Host {
        self.host.clone()
    }
}
