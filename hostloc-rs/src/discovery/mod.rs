//! Discovery: RegistrationModule makes a service-discovery registration available.

use std::sync::Arc;

use hostloc_core::{CoreError, Registration, SharedRegistration, StaticRegistration};

use crate::core::{Application, Module};

/// One registration (static or custom). Register via app.register(&mut module).
/// Its presence, together with `zipkin.locator.discovery.enabled`, selects the
/// discovery-backed locator.
pub struct RegistrationModule {
    registration: Option<SharedRegistration>,
}

impl RegistrationModule {
    pub fn new() -> Self {
        Self { registration: None }
    }

    /// Fixed service id, host and port.
    pub fn static_registration(mut self, service_id: &str, host: &str, port: u16) -> Self {
        self.registration = Some(Arc::new(StaticRegistration::new(service_id, host, port)));
        self
    }

    /// Use custom implementation.
    pub fn registration(mut self, impl_: impl Registration + 'static) -> Self {
        self.registration = Some(Arc::new(impl_));
        self
    }

    /// Share an existing handle.
    pub fn shared(mut self, registration: SharedRegistration) -> Self {
        self.registration = Some(registration);
        self
    }
}

impl Default for RegistrationModule {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for RegistrationModule {
    fn register_into(&mut self, app: &mut Application) -> Result<(), CoreError> {
        if let Some(registration) = self.registration.take() {
            tracing::debug!(service_id = %registration.service_id(), "registration available");
            app.set_registration(registration);
        }
        Ok(())
    }
}
