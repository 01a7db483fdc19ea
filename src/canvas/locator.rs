//! Ancestor locator - nearest canvas host above a component.

use std::fmt;
use std::rc::Rc;

use super::host::{host_at, CanvasHost};
use crate::engine::get_parent_index;

/// A located host and the index it is exposed on.
#[derive(Clone)]
pub struct HostRef {
    pub index: usize,
    pub host: Rc<dyn CanvasHost>,
}

impl fmt::Debug for HostRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostRef").field("index", &self.index).finish_non_exhaustive()
    }
}

/// Find the nearest strict ancestor of `instance` exposing a canvas host.
///
/// `instance` itself is never checked. Returns None when `instance` is None
/// or the root is reached without a match. The parent chain is acyclic.
pub fn find_host(instance: Option<usize>) -> Option<HostRef> {
    let mut current = get_parent_index(instance?);

    while let Some(index) = current {
        if let Some(host) = host_at(index) {
            return Some(HostRef { index, host });
        }
        current = get_parent_index(index);
    }

    None
}
