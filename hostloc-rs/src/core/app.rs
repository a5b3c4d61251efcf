//! Application: holds settings and the container; runs locator autoconfiguration on refresh.

use std::sync::Arc;

use hostloc_core::{
    resolve, Container, CoreError, ResolvedLocator, Settings, SharedHostLocator,
    SharedRegistration,
};

use super::module::Module;

/// Application: modules register components into the container, then `refresh`
/// publishes exactly one host locator.
pub struct Application {
    pub(crate) settings: Settings,
    pub(crate) container: Container,
    pub(crate) refreshed: bool,
}

impl Application {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            container: Container::new(),
            refreshed: false,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Component container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// Component container (mutable). Replacing `SharedHostLocator` or
    /// `Arc<ResolvedLocator>` after refresh is on the caller.
    pub fn container_mut(&mut self) -> &mut Container {
        if self.refreshed {
            tracing::warn!("container modified after the host locator was published");
        }
        &mut self.container
    }

    /// Register a module. Order does not matter: the locator is chosen on refresh.
    pub fn register(&mut self, module: &mut dyn Module) -> Result<(), CoreError> {
        module.register_into(self)
    }

    /// Make a discovery registration available (called by RegistrationModule).
    /// After refresh it no longer affects which locator is published.
    pub fn set_registration(&mut self, registration: SharedRegistration) {
        if self.refreshed {
            tracing::warn!("registration added after refresh; published locator unchanged");
        }
        self.container.register_instance(registration);
    }

    /// Supply a locator that overrides autoconfiguration (called by CustomLocatorModule).
    /// Rejected once a locator has been published.
    pub fn set_host_locator(&mut self, locator: SharedHostLocator) -> Result<(), CoreError> {
        if self.refreshed {
            return Err(CoreError::AlreadyRefreshed("host locator supplied"));
        }
        self.container.register_instance(locator);
        Ok(())
    }

    pub fn registration(&self) -> Option<&SharedRegistration> {
        self.container.resolve::<SharedRegistration>().ok()
    }

    /// Run autoconfiguration once and publish the chosen locator under both
    /// `Arc<ResolvedLocator>` and `SharedHostLocator`. Later calls are no-ops.
    pub fn refresh(&mut self) -> Result<(), CoreError> {
        if self.refreshed {
            return Ok(());
        }
        let user_supplied = self.container.resolve::<SharedHostLocator>().ok().cloned();
        let registration = self.registration().cloned();
        let resolved = Arc::new(resolve(user_supplied, registration, &self.settings));
        tracing::info!(
            locator = resolved.kind(),
            discovery_enabled = self.settings.discovery_enabled(),
            "host locator published"
        );
        let shared: SharedHostLocator = match resolved.user_supplied() {
            Some(user) => Arc::clone(user),
            None => resolved.clone() as SharedHostLocator,
        };
        self.container.register_instance(shared);
        self.container.register_instance(resolved);
        self.refreshed = true;
        Ok(())
    }

    /// The published locator. Errors before `refresh`.
    pub fn host_locator(&self) -> Result<&ResolvedLocator, CoreError> {
        if !self.refreshed {
            return Err(CoreError::NotRefreshed);
        }
        Ok(self.container.resolve::<Arc<ResolvedLocator>>()?.as_ref())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
