//! Component Registry - the live component tree.
//!
//! Owns everything about a component's lifetime except its node data:
//! - Index allocation with a free pool; named components never share an index
//! - ID ↔ Index mapping for lookups
//! - The setup context stack; its top is the current instance
//! - Destroy callbacks, run once when an index is released

use std::cell::RefCell;
use std::collections::HashMap;
use spark_signals::ReactiveSet;

use super::nodes;

// =============================================================================
// Registry State
// =============================================================================

#[derive(Default)]
struct Registry {
    id_to_index: HashMap<String, usize>,
    index_to_id: HashMap<usize, String>,
    free_indices: Vec<usize>,
    next_index: usize,
    /// Counter for generated IDs (`c0`, `c1`, ...).
    id_counter: usize,
    /// Components whose setup is running, innermost last.
    setup_stack: Vec<usize>,
    destroy_callbacks: HashMap<usize, Vec<Box<dyn FnOnce()>>>,
}

impl Registry {
    /// Next generated ID not already claimed by a named component.
    fn generate_id(&mut self) -> String {
        loop {
            let id = format!("c{}", self.id_counter);
            self.id_counter += 1;
            if !self.id_to_index.contains_key(&id) {
                return id;
            }
        }
    }

    /// Take an index for `id`, reusing a freed one if available.
    fn bind(&mut self, id: String) -> usize {
        let index = self.free_indices.pop().unwrap_or_else(|| {
            let index = self.next_index;
            self.next_index += 1;
            index
        });
        self.id_to_index.insert(id.clone(), index);
        self.index_to_id.insert(index, id);
        index
    }

    /// Drop the mappings for `index` and return it to the pool.
    fn unbind(&mut self, index: usize) -> Option<String> {
        let id = self.index_to_id.remove(&index)?;
        self.id_to_index.remove(&id);
        // Registered while its own callbacks ran; must not reach the next owner
        self.destroy_callbacks.remove(&index);
        self.free_indices.push(index);
        Some(id)
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());

    /// Currently allocated indices.
    static ALLOCATED_INDICES: RefCell<ReactiveSet<usize>> = RefCell::new(ReactiveSet::new());
}

// =============================================================================
// Setup Context
// =============================================================================

/// The component whose setup is currently running, if any.
///
/// Primitives push their own index before running setup, so inside a setup
/// closure this is the calling component, and components created there use
/// it as their parent.
pub fn current_instance() -> Option<usize> {
    REGISTRY.with(|registry| registry.borrow().setup_stack.last().copied())
}

/// Enter the setup of the component at `index`.
pub fn push_parent_context(index: usize) {
    REGISTRY.with(|registry| registry.borrow_mut().setup_stack.push(index));
}

/// Leave the innermost setup.
pub fn pop_parent_context() {
    REGISTRY.with(|registry| {
        registry.borrow_mut().setup_stack.pop();
    });
}

// =============================================================================
// Allocation
// =============================================================================

/// Allocate an index for an anonymous component.
pub fn allocate_index() -> usize {
    let index = REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.generate_id();
        registry.bind(id)
    });
    track(index);
    index
}

/// Allocate an index for a component with an explicit ID.
///
/// Returns None if `id` belongs to a live component; two components never
/// share an index or its destroy callbacks.
pub fn allocate_named(id: &str) -> Option<usize> {
    let index = REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        if registry.id_to_index.contains_key(id) {
            return None;
        }
        Some(registry.bind(id.to_string()))
    })?;
    track(index);
    Some(index)
}

fn track(index: usize) {
    log::trace!("allocate component at index {index}");
    ALLOCATED_INDICES.with(|set| {
        set.borrow_mut().insert(index);
    });
    nodes::ensure_capacity(index);
}

/// Release the component at `index` and its subtree.
///
/// Children go first (in index order), then this index's destroy callbacks
/// run, then its mappings and node data are cleared. Unallocated indices
/// are ignored.
pub fn release_index(index: usize) {
    if !is_allocated(index) {
        return;
    }

    let mut children: Vec<usize> = ALLOCATED_INDICES.with(|set| {
        set.borrow()
            .iter()
            .copied()
            .filter(|&child| nodes::get_parent_index(child) == Some(index))
            .collect()
    });
    children.sort_unstable();

    for child in children {
        release_index(child);
    }

    // Callbacks may call back into the registry; run them unborrowed.
    let callbacks = REGISTRY.with(|registry| registry.borrow_mut().destroy_callbacks.remove(&index));
    for callback in callbacks.into_iter().flatten() {
        callback();
    }

    let id = REGISTRY.with(|registry| registry.borrow_mut().unbind(index));
    log::trace!("release component {id:?} at index {index}");

    let now_empty = ALLOCATED_INDICES.with(|set| {
        let mut set = set.borrow_mut();
        set.remove(&index);
        set.is_empty()
    });
    nodes::clear_at_index(index);

    // Tree is empty: drop column storage and restart numbering
    if now_empty {
        nodes::reset();
        REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            registry.free_indices.clear();
            registry.next_index = 0;
        });
    }
}

// =============================================================================
// Destroy Callbacks
// =============================================================================

/// Run `callback` once when the component at `index` is released.
///
/// Callbacks for one index run in registration order.
pub fn on_destroy(index: usize, callback: impl FnOnce() + 'static) {
    REGISTRY.with(|registry| {
        registry
            .borrow_mut()
            .destroy_callbacks
            .entry(index)
            .or_default()
            .push(Box::new(callback));
    });
}

// =============================================================================
// Lookups
// =============================================================================

/// Get index for a component ID.
pub fn get_index(id: &str) -> Option<usize> {
    REGISTRY.with(|registry| registry.borrow().id_to_index.get(id).copied())
}

/// Get ID for an index.
pub fn get_id(index: usize) -> Option<String> {
    REGISTRY.with(|registry| registry.borrow().index_to_id.get(&index).cloned())
}

pub fn is_allocated(index: usize) -> bool {
    ALLOCATED_INDICES.with(|set| set.borrow().contains(&index))
}

/// Number of live components.
pub fn get_allocated_count() -> usize {
    ALLOCATED_INDICES.with(|set| set.borrow().len())
}

// =============================================================================
// Reset (for testing)
// =============================================================================

/// Reset all registry state without running destroy callbacks.
pub fn reset_registry() {
    REGISTRY.with(|registry| *registry.borrow_mut() = Registry::default());
    ALLOCATED_INDICES.with(|set| set.borrow_mut().clear());
    nodes::reset();
}
