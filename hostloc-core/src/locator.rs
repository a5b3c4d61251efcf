//! HostLocator trait: resolve the current service's host/port for tagging traces.

use std::sync::Arc;

use crate::host::Host;

/// Something that can tell the tracing layer which host a span belongs to.
/// Implementations: server properties, discovery registration, or user supplied.
pub trait HostLocator: Send + Sync {
    fn locate(&self) -> Host;
}

/// Capability key in the container. Before refresh it holds the user override, if any;
/// after refresh it holds the published locator.
pub type SharedHostLocator = Arc<dyn HostLocator>;
