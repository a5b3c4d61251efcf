//! Module: register components into the app before refresh.

use hostloc_core::CoreError;

use super::app::Application;

/// Module: contributes components (registration, locator) to the app.
pub trait Module {
    fn register_into(&mut self, app: &mut Application) -> Result<(), CoreError>;
}
