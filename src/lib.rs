//! # spark-canvas
//!
//! Canvas host registration for reactive component trees.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! component registry.
//!
//! ## Architecture
//!
//! Components are indices in a thread-local tree with parent links. A component
//! that drives a canvas exposes a [`CanvasHost`]; descendants call
//! [`register_component`] during setup to add an update/render pair to the
//! nearest such ancestor. The pair is deregistered when the registering
//! component is released.
//!
//! ```text
//! canvas_host(host)
//!   └─ component(setup: register_component("fruit", update, render))
//!         → host.register(..) → id
//!         ... frames ...
//!      cleanup() → host.deregister(id)
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Cell, Attr, ComponentType)
//! - [`engine`] - Component registry, parent context, destroy callbacks
//! - [`canvas`] - Host capability, ancestor locator, registration, CanvasApi
//! - [`primitives`] - `component` and `canvas_host`

pub mod canvas;
pub mod engine;
pub mod primitives;
pub mod types;

pub use types::*;

pub use engine::{
    allocate_index, allocate_named, current_instance, get_allocated_count, get_id, get_index,
    get_parent_index, is_allocated, on_destroy, pop_parent_context, push_parent_context,
    release_index, reset_registry,
};

pub use canvas::{
    expose_host, find_host, host_at, register_component, reset_hosts, withdraw_host, CanvasApi,
    CanvasHost, HostRef, Registration, RegistrationError, RegistrationId, RenderFn, Surface,
    UpdateFn,
};

pub use primitives::{
    canvas_host, component, CanvasHostProps, Cleanup, ComponentError, ComponentProps, SetupFn,
};
