//! Registration trait and implementations: a service-discovery self-registration record.

use std::sync::Arc;

use tokio::sync::watch;

/// Self-registration of this service with a discovery client.
/// Its presence is what enables the discovery-backed locator.
pub trait Registration: Send + Sync {
    fn service_id(&self) -> String;
    fn host(&self) -> String;
    fn port(&self) -> u16;
}

/// Registration as stored in the container.
pub type SharedRegistration = Arc<dyn Registration>;

/// Registration with fixed values (static config, tests).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticRegistration {
    pub service_id: String,
    pub host: String,
    pub port: u16,
}

impl StaticRegistration {
    pub fn new(service_id: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            service_id: service_id.into(),
            host: host.into(),
            port,
        }
    }

    /// Parse `service_id@host:port`.
    pub fn parse(s: &str) -> Option<Self> {
        let (service_id, addr) = s.split_once('@')?;
        let (host, port) = addr.rsplit_once(':')?;
        if service_id.is_empty() || host.is_empty() {
            return None;
        }
        Some(Self::new(service_id, host, port.parse().ok()?))
    }
}

impl Registration for StaticRegistration {
    fn service_id(&self) -> String {
        self.service_id.clone()
    }

    fn host(&self) -> String {
        self.host.clone()
    }

    fn port(&self) -> u16 {
        self.port
    }
}

/// Registration whose values can change after start-up, e.g. once the server
/// has bound its real port. Readers always see the latest published record.
pub struct WatchedRegistration {
    rx: watch::Receiver<StaticRegistration>,
}

/// Write side of a [`WatchedRegistration`].
pub struct RegistrationUpdater {
    tx: watch::Sender<StaticRegistration>,
}

impl WatchedRegistration {
    pub fn channel(initial: StaticRegistration) -> (Self, RegistrationUpdater) {
        let (tx, rx) = watch::channel(initial);
        (Self { rx }, RegistrationUpdater { tx })
    }
}

impl RegistrationUpdater {
    /// Publish the bound port.
    pub fn set_port(&self, port: u16) {
        self.tx.send_modify(|r| r.port = port);
    }

    /// Replace the whole record.
    pub fn publish(&self, record: StaticRegistration) {
        self.tx.send_replace(record);
    }
}

impl Registration for WatchedRegistration {
    fn service_id(&self) -> String {
        self.rx.borrow().service_id.clone()
    }

    fn host(&self) -> String {
        self.rx.borrow().host.clone()
    }

    fn port(&self) -> u16 {
        self.rx.borrow().port
    }
}
