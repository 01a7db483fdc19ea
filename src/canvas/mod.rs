//! Canvas host registration.
//!
//! - [`CanvasHost`] - capability a host component exposes (register/deregister)
//! - [`find_host`] - nearest ancestor exposing that capability
//! - [`register_component`] - register an update/render pair, deregistered on teardown
//! - [`CanvasApi`] / [`Surface`] - what callbacks receive each frame
//!
//! # Lifecycle
//!
//! ```text
//! setup → register_component → find_host → host.register → id
//!                                                  ↓
//! release_index(component) → destroy callback → host.deregister(id)
//! ```

mod api;
mod host;
mod locator;
mod register;
mod surface;

pub use api::CanvasApi;
pub use host::{
    expose_host, host_at, reset_hosts, withdraw_host, CanvasHost, Registration, RegistrationId,
    RenderFn, UpdateFn,
};
pub use locator::{find_host, HostRef};
pub use register::{register_component, RegistrationError};
pub use surface::Surface;
