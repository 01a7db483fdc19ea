//! Canvas Host Primitive - a component exposing a `CanvasHost` to descendants.
//!
//! The host itself (frame loop, registry) is supplied by the caller; this
//! primitive only places it in the tree.

use super::component::{create_node, run_setup};
use super::error::ComponentError;
use super::types::{CanvasHostProps, Cleanup};
use crate::canvas::expose_host;
use crate::engine::release_index;
use crate::types::ComponentType;

/// Create a canvas host component.
///
/// Children created in `props.children` can call `register_component` to
/// attach to `props.host`. Returns a cleanup function that releases the
/// host and its subtree; descendants are deregistered before the host's
/// exposure is withdrawn.
pub fn canvas_host(props: CanvasHostProps) -> Result<Cleanup, ComponentError> {
    let index = create_node(props.id.as_deref(), ComponentType::CanvasHost)?;

    expose_host(index, props.host);

    run_setup(index, props.children)?;

    Ok(Box::new(move || release_index(index)))
}
