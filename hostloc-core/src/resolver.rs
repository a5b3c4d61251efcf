//! Host locator resolution: pick exactly one locator to publish.

use crate::config::Settings;
use crate::discovery::DiscoveryHostLocator;
use crate::host::Host;
use crate::locator::{HostLocator, SharedHostLocator};
use crate::registration::SharedRegistration;
use crate::server_properties::ServerPropertiesHostLocator;

/// Outcome of [`resolve`]. Usable as a locator itself.
pub enum ResolvedLocator {
    /// Locator supplied by the application, returned unchanged.
    UserSupplied(SharedHostLocator),
    Discovery(DiscoveryHostLocator),
    ServerProperties(ServerPropertiesHostLocator),
}

impl ResolvedLocator {
    pub fn kind(&self) -> &'static str {
        match self {
            ResolvedLocator::UserSupplied(_) => "user-supplied",
            ResolvedLocator::Discovery(_) => "discovery",
            ResolvedLocator::ServerProperties(_) => "server-properties",
        }
    }

    pub fn is_user_supplied(&self) -> bool {
        matches!(self, ResolvedLocator::UserSupplied(_))
    }

    pub fn is_discovery(&self) -> bool {
        matches!(self, ResolvedLocator::Discovery(_))
    }

    pub fn is_server_properties(&self) -> bool {
        matches!(self, ResolvedLocator::ServerProperties(_))
    }

    /// The user-supplied instance, if that is what was chosen.
    pub fn user_supplied(&self) -> Option<&SharedHostLocator> {
        match self {
            ResolvedLocator::UserSupplied(l) => Some(l),
            _ => None,
        }
    }
}

impl HostLocator for ResolvedLocator {
    fn locate(&self) -> Host {
        match self {
            ResolvedLocator::UserSupplied(l) => l.locate(),
            ResolvedLocator::Discovery(l) => l.locate(),
            ResolvedLocator::ServerProperties(l) => l.locate(),
        }
    }
}

impl std::fmt::Debug for ResolvedLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResolvedLocator").field(&self.kind()).finish()
    }
}

/// First match wins: user supplied, then discovery (flag and registration both
/// required), then server properties.
pub fn resolve(
    user_supplied: Option<SharedHostLocator>,
    registration: Option<SharedRegistration>,
    settings: &Settings,
) -> ResolvedLocator {
    let resolved = match (user_supplied, registration) {
        (Some(locator), _) => ResolvedLocator::UserSupplied(locator),
        (None, Some(registration)) if settings.discovery_enabled() => {
            ResolvedLocator::Discovery(DiscoveryHostLocator::new(registration, settings))
        }
        (None, registration) => {
            if settings.discovery_enabled() && registration.is_none() {
                tracing::debug!("discovery locator enabled but no registration present");
            }
            ResolvedLocator::ServerProperties(ServerPropertiesHostLocator::new(settings))
        }
    };
    tracing::debug!(locator = resolved.kind(), "host locator resolved");
    resolved
}
