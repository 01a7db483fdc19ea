//! Registration helper - attach update/render callbacks to the nearest host.
//!
//! Call [`register_component`] from a component's setup. The pair is
//! registered with the nearest ancestor canvas host and deregistered when the
//! calling component is released.
//!
//! # Example
//!
//! ```ignore
//! use spark_canvas::{component, register_component, ComponentProps};
//!
//! let cleanup = component(ComponentProps::with_setup(|| {
//!     register_component(
//!         "fruit",
//!         |api| { /* advance by api.delta_time */ },
//!         |api| { /* draw into api.context */ },
//!     )?;
//!     Ok(())
//! }))?;
//!
//! cleanup(); // host.deregister(id) runs here
//! ```

use thiserror::Error;

use super::api::CanvasApi;
use super::host::{Registration, RegistrationId};
use super::locator::find_host;
use crate::engine::{current_instance, on_destroy};

/// Failure to attach a component to a canvas host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Called outside any component setup.
    #[error("Unable to register component")]
    NoCurrentInstance,
    /// No ancestor of `instance` exposes a canvas host.
    #[error("Unable to register component")]
    NoHost { instance: usize },
}

/// Register an update/render pair with the nearest ancestor canvas host.
///
/// Must be called while a component's setup is running. On success the
/// host's handle is returned and a destroy callback is attached to the
/// calling component that deregisters it exactly once. On failure nothing
/// is registered and nothing is scheduled.
///
/// Calling this more than once from the same setup creates independent
/// registrations, each released on teardown.
pub fn register_component(
    name: impl Into<String>,
    update: impl Fn(&CanvasApi<'_>) + 'static,
    render: impl Fn(&CanvasApi<'_>) + 'static,
) -> Result<RegistrationId, RegistrationError> {
    let name = name.into();

    let Some(instance) = current_instance() else {
        log::warn!("register_component({name}) called outside component setup");
        return Err(RegistrationError::NoCurrentInstance);
    };

    let Some(found) = find_host(Some(instance)) else {
        log::warn!("no canvas host above component {instance} for {name}");
        return Err(RegistrationError::NoHost { instance });
    };

    let id = found.host.register(Registration::new(name.clone(), update, render));
    log::debug!("registered {name} as {id} with host {} from component {instance}", found.index);

    let host = found.host;
    let host_index = found.index;
    on_destroy(instance, move || {
        log::debug!("deregistering {name} ({id}) from host {host_index}");
        host.deregister(id);
    });

    Ok(id)
}
