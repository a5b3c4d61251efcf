//! Discovery-backed host locator: asks the service-discovery registration on every call.

use crate::config::Settings;
use crate::host::Host;
use crate::locator::HostLocator;
use crate::registration::SharedRegistration;

/// Locator that answers from a discovery registration. Needs a registration to exist;
/// there is no way to build one without it.
pub struct DiscoveryHostLocator {
    registration: SharedRegistration,
    service_name: Option<String>,
}

impl DiscoveryHostLocator {
    pub fn new(registration: SharedRegistration, settings: &Settings) -> Self {
        Self {
            registration,
            service_name: settings.service_name_override().map(String::from),
        }
    }

    pub fn registration(&self) -> &SharedRegistration {
        &self.registration
    }
}

impl HostLocator for DiscoveryHostLocator {
    fn locate(&self) -> Host {
        let service_name = self
            .service_name
            .clone()
            .unwrap_or_else(|| self.registration.service_id());
        Host::new(service_name, self.registration.host(), self.registration.port())
    }
}
