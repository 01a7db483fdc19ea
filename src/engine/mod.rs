//! Component tree engine.
//!
//! - Registry: index allocation, ID mapping, setup context, destroy callbacks
//! - Nodes: per-index component type and parent link
//!
//! Components are indices, not objects:
//!
//! ```text
//! Index 0: CanvasHost (parent=None)
//! Index 1: Component  (parent=0)
//! Index 2: Component  (parent=1)
//! ```
//!
//! Walking ancestors is a chain of `get_parent_index` lookups.

mod nodes;
mod registry;

pub use nodes::{get_component_type, get_parent_index, set_component_type, set_parent_index};
pub use registry::*;
