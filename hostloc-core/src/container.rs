//! Minimal component container: register instance by type, resolve by type.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("no registration for type {0}")]
    NotFound(&'static str),
}

/// Component registry. One instance per type; registering again replaces it.
pub struct Container {
    store: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Container {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn register_instance<T: Send + Sync + 'static>(&mut self, value: T) {
        self.store.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn resolve<T: 'static>(&self) -> Result<&T, ContainerError> {
        self.store
            .get(&TypeId::of::<T>())
            .and_then(|b| b.downcast_ref::<T>())
            .ok_or(ContainerError::NotFound(std::any::type_name::<T>()))
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.store.contains_key(&TypeId::of::<T>())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
