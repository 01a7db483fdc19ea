//! Primitive types - Props and cleanup.

use std::rc::Rc;

use super::error::ComponentError;
use crate::canvas::CanvasHost;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and everything below it.
pub type Cleanup = Box<dyn FnOnce()>;

/// Setup closure run with its component as the current instance.
///
/// Child components and `register_component` calls made here attach to
/// the component being set up.
pub type SetupFn = Box<dyn FnOnce() -> Result<(), ComponentError>>;

// =============================================================================
// Component Props
// =============================================================================

/// Properties for a plain component.
#[derive(Default)]
pub struct ComponentProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Setup: create children, register with a canvas host.
    pub setup: Option<SetupFn>,
}

impl ComponentProps {
    /// Props with only a setup closure.
    pub fn with_setup(setup: impl FnOnce() -> Result<(), ComponentError> + 'static) -> Self {
        Self {
            id: None,
            setup: Some(Box::new(setup)),
        }
    }

    /// Set the component ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

// =============================================================================
// Canvas Host Props
// =============================================================================

/// Properties for a component that exposes a canvas host.
pub struct CanvasHostProps {
    /// Optional component ID for lookup.
    pub id: Option<String>,

    /// Capability exposed to descendants.
    pub host: Rc<dyn CanvasHost>,

    /// Child render function.
    pub children: Option<SetupFn>,
}

impl CanvasHostProps {
    pub fn new(host: Rc<dyn CanvasHost>) -> Self {
        Self {
            id: None,
            host,
            children: None,
        }
    }

    /// Set the component ID.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the child render function.
    pub fn children(
        mut self,
        children: impl FnOnce() -> Result<(), ComponentError> + 'static,
    ) -> Self {
        self.children = Some(Box::new(children));
        self
    }
}
