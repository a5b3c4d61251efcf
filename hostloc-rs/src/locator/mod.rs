//! Locator: CustomLocatorModule supplies the application's own host locator.

use std::sync::Arc;

use hostloc_core::{CoreError, HostLocator, SharedHostLocator};

use crate::core::{Application, Module};

/// User-supplied locator. Always wins over autoconfiguration.
pub struct CustomLocatorModule {
    locator: SharedHostLocator,
}

impl CustomLocatorModule {
    pub fn new(locator: impl HostLocator + 'static) -> Self {
        Self {
            locator: Arc::new(locator),
        }
    }

    /// Keep a handle to the same instance the app will publish.
    pub fn shared(locator: SharedHostLocator) -> Self {
        Self { locator }
    }
}

impl Module for CustomLocatorModule {
    fn register_into(&mut self, app: &mut Application) -> Result<(), CoreError> {
        app.set_host_locator(Arc::clone(&self.locator))
    }
}
