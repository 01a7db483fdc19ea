//! Component primitives.
//!
//! - [`component`] - plain node; runs setup as the current instance
//! - [`canvas_host`] - node exposing a `CanvasHost` to its descendants
//!
//! Each primitive:
//! 1. Allocates an index from the registry (explicit IDs must be unused)
//! 2. Links it to the current parent
//! 3. Runs setup/children with itself pushed as parent context
//! 4. Returns a cleanup function that releases the subtree

mod canvas_host;
mod component;
mod error;
mod types;

pub use canvas_host::canvas_host;
pub use component::component;
pub use error::ComponentError;
pub use types::*;
