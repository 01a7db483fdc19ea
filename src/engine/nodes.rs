//! Per-index node data: component type and parent link.
//!
//! Stored as plain columns indexed by component index. Values are not
//! reactive; the tree shape is only read during setup and teardown.

use std::cell::RefCell;

use crate::types::ComponentType;

thread_local! {
    /// Component type per index.
    static COMPONENT_TYPE: RefCell<Vec<ComponentType>> = RefCell::new(Vec::new());

    /// Parent component index (None for root).
    static PARENT_INDEX: RefCell<Vec<Option<usize>>> = RefCell::new(Vec::new());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure columns have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, ComponentType::None);
        }
    });
    PARENT_INDEX.with(|arr| {
        let mut arr = arr.borrow_mut();
        if arr.len() <= index {
            arr.resize(index + 1, None);
        }
    });
}

/// Clear values at index (called when releasing).
pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = ComponentType::None;
        }
    });
    PARENT_INDEX.with(|arr| {
        if let Some(slot) = arr.borrow_mut().get_mut(index) {
            *slot = None;
        }
    });
}

/// Drop all column storage.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.borrow_mut().clear());
    PARENT_INDEX.with(|arr| arr.borrow_mut().clear());
}

// =============================================================================
// Accessors
// =============================================================================

pub fn get_component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.borrow().get(index).copied().unwrap_or_default())
}

pub fn set_component_type(index: usize, component_type: ComponentType) {
    ensure_capacity(index);
    COMPONENT_TYPE.with(|arr| arr.borrow_mut()[index] = component_type);
}

/// Get the parent of `index` (None at the root or when unallocated).
pub fn get_parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.borrow().get(index).copied().flatten())
}

pub fn set_parent_index(index: usize, parent: Option<usize>) {
    ensure_capacity(index);
    PARENT_INDEX.with(|arr| arr.borrow_mut()[index] = parent);
}
