//! Canvas host capability and its exposure on component nodes.
//!
//! A component becomes a canvas host by exposing an `Rc<dyn CanvasHost>` on
//! its index. Descendants find it through the ancestor locator.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::api::CanvasApi;
use crate::engine::on_destroy;

// =============================================================================
// Callback Types
// =============================================================================

/// Per-frame update callback.
pub type UpdateFn = Rc<dyn Fn(&CanvasApi<'_>)>;

/// Per-frame render callback.
pub type RenderFn = Rc<dyn Fn(&CanvasApi<'_>)>;

// =============================================================================
// Registration
// =============================================================================

/// An update/render pair submitted to a host.
///
/// `name` is descriptive only; hosts must not rely on it being unique.
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub update: UpdateFn,
    pub render: RenderFn,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        update: impl Fn(&CanvasApi<'_>) + 'static,
        render: impl Fn(&CanvasApi<'_>) + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            update: Rc::new(update),
            render: Rc::new(render),
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Opaque handle a host returns from `register`.
///
/// Consumed by exactly one `deregister` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(u64);

impl RegistrationId {
    /// Build a handle from a host-chosen value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Host Capability
// =============================================================================

/// Capability exposed by components that drive a canvas.
///
/// Methods take `&self`; hosts keep their registry behind interior
/// mutability. `deregister` is called at most once per handle.
pub trait CanvasHost {
    /// Add an update/render pair to the per-frame set.
    fn register(&self, registration: Registration) -> RegistrationId;

    /// Remove a previously added pair.
    fn deregister(&self, id: RegistrationId);
}

// =============================================================================
// Exposure
// =============================================================================

thread_local! {
    /// Host capability exposed per component index.
    static EXPOSED_HOSTS: RefCell<HashMap<usize, Rc<dyn CanvasHost>>> = RefCell::new(HashMap::new());
}

/// Expose `host` on the component at `index`.
///
/// Replaces any host already exposed there. The exposure is withdrawn when
/// the component is released.
pub fn expose_host(index: usize, host: Rc<dyn CanvasHost>) {
    let replaced = EXPOSED_HOSTS.with(|hosts| hosts.borrow_mut().insert(index, host));
    if replaced.is_none() {
        on_destroy(index, move || withdraw_host(index));
    }
}

/// Remove the host exposed on `index`, if any.
pub fn withdraw_host(index: usize) {
    let removed = EXPOSED_HOSTS.with(|hosts| hosts.borrow_mut().remove(&index));
    // Dropped here, after the borrow: a host's Drop may look up hosts.
    drop(removed);
}

/// Get the host exposed on `index`.
pub fn host_at(index: usize) -> Option<Rc<dyn CanvasHost>> {
    EXPOSED_HOSTS.with(|hosts| hosts.borrow().get(&index).cloned())
}

/// Reset exposure state (for testing).
pub fn reset_hosts() {
    EXPOSED_HOSTS.with(|hosts| hosts.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::engine::{allocate_index, release_index, reset_registry};

    struct CountingHost {
        next: Cell<u64>,
    }

    impl CanvasHost for CountingHost {
        fn register(&self, _registration: Registration) -> RegistrationId {
            let id = self.next.get();
            self.next.set(id + 1);
            RegistrationId::from_raw(id)
        }

        fn deregister(&self, _id: RegistrationId) {}
    }

    fn setup() {
        reset_registry();
        reset_hosts();
    }

    #[test]
    fn test_expose_and_lookup() {
        setup();

        let idx = allocate_index();
        assert!(host_at(idx).is_none());

        expose_host(idx, Rc::new(CountingHost { next: Cell::new(0) }));
        assert!(host_at(idx).is_some());
    }

    #[test]
    fn test_exposure_withdrawn_on_release() {
        setup();

        let idx = allocate_index();
        expose_host(idx, Rc::new(CountingHost { next: Cell::new(0) }));
        release_index(idx);

        assert!(host_at(idx).is_none());
    }

    struct LookupOnDrop {
        index: usize,
        seen: Rc<Cell<Option<bool>>>,
    }

    impl CanvasHost for LookupOnDrop {
        fn register(&self, _registration: Registration) -> RegistrationId {
            RegistrationId::from_raw(0)
        }

        fn deregister(&self, _id: RegistrationId) {}
    }

    impl Drop for LookupOnDrop {
        fn drop(&mut self) {
            self.seen.set(Some(host_at(self.index).is_some()));
        }
    }

    #[test]
    fn test_host_drop_can_query_exposure() {
        setup();

        let idx = allocate_index();
        let seen = Rc::new(Cell::new(None));
        expose_host(idx, Rc::new(LookupOnDrop { index: idx, seen: seen.clone() }));

        // Last strong reference is the exposure itself
        withdraw_host(idx);
        assert_eq!(seen.get(), Some(false));
    }

    #[test]
    fn test_registration_debug_hides_callbacks() {
        let registration = Registration::new("blade", |_| {}, |_| {});
        let debug = format!("{registration:?}");
        assert!(debug.contains("blade"));
    }

    #[test]
    fn test_registration_id_raw() {
        let id = RegistrationId::from_raw(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(id.to_string(), "#7");
    }
}
