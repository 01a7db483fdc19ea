//! Component Primitive - a plain node in the component tree.
//!
//! Runs its setup with itself as the current instance, which is what
//! `register_component` walks up from.
//!
//! # Example
//!
//! ```ignore
//! use spark_canvas::{component, register_component, ComponentProps};
//!
//! let props = ComponentProps::with_setup(|| {
//!     register_component("melon", |_| {}, |_| {})?;
//!     Ok(())
//! });
//! let cleanup = component(props.id("melon"))?;
//! ```

use super::error::ComponentError;
use super::types::{Cleanup, ComponentProps, SetupFn};
use crate::engine::{
    allocate_index, allocate_named, current_instance, pop_parent_context, push_parent_context,
    release_index, set_component_type, set_parent_index,
};
use crate::types::ComponentType;

/// Create a component.
///
/// Fails with `DuplicateId` if `props.id` names a live component. If setup
/// fails the component is released before returning, so any registrations
/// it made before the failure are deregistered.
///
/// Returns a cleanup function that releases the component and its subtree.
pub fn component(props: ComponentProps) -> Result<Cleanup, ComponentError> {
    let index = create_node(props.id.as_deref(), ComponentType::Component)?;

    run_setup(index, props.setup)?;

    Ok(Box::new(move || release_index(index)))
}

/// Allocate a node under the current instance.
pub(crate) fn create_node(
    id: Option<&str>,
    component_type: ComponentType,
) -> Result<usize, ComponentError> {
    let index = match id {
        Some(id) => allocate_named(id).ok_or_else(|| ComponentError::DuplicateId(id.to_string()))?,
        None => allocate_index(),
    };
    set_component_type(index, component_type);
    if let Some(parent) = current_instance() {
        set_parent_index(index, Some(parent));
    }
    Ok(index)
}

/// Run `setup` with `index` as the current instance.
///
/// Releases `index` on failure.
pub(crate) fn run_setup(index: usize, setup: Option<SetupFn>) -> Result<(), ComponentError> {
    let Some(setup) = setup else { return Ok(()) };

    push_parent_context(index);
    let result = setup();
    pop_parent_context();

    if let Err(err) = result {
        log::debug!("setup of component {index} failed: {err}");
        release_index(index);
        return Err(err);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::canvas::{reset_hosts, RegistrationError};
    use crate::engine::{
        current_instance, get_allocated_count, get_component_type, get_index,
        get_parent_index, reset_registry,
    };

    fn setup() {
        reset_registry();
        reset_hosts();
    }

    #[test]
    fn test_component_creation() {
        setup();

        let cleanup = component(ComponentProps::default()).unwrap();
        assert_eq!(get_component_type(0), ComponentType::Component);
        assert_eq!(get_allocated_count(), 1);

        cleanup();
        assert_eq!(get_allocated_count(), 0);
    }

    #[test]
    fn test_setup_sees_itself_as_current() {
        setup();

        let seen = Rc::new(RefCell::new(None));
        let seen_clone = seen.clone();

        let props = ComponentProps::with_setup(move || {
            *seen_clone.borrow_mut() = current_instance();
            Ok(())
        });
        let _cleanup = component(props.id("self")).unwrap();

        assert_eq!(*seen.borrow(), get_index("self"));
        assert_eq!(current_instance(), None);
    }

    #[test]
    fn test_nested_components_link_parents() {
        setup();

        let props = ComponentProps::with_setup(|| {
            component(ComponentProps::default().id("inner"))?;
            Ok(())
        });
        let cleanup = component(props.id("outer")).unwrap();

        let outer = get_index("outer").unwrap();
        let inner = get_index("inner").unwrap();
        assert_eq!(get_parent_index(inner), Some(outer));

        cleanup();
        assert_eq!(get_allocated_count(), 0);
    }

    #[test]
    fn test_failed_setup_releases_component() {
        setup();

        let props = ComponentProps::with_setup(|| Err(RegistrationError::NoCurrentInstance.into()));
        let result = component(props.id("broken"));

        assert_eq!(
            result.err(),
            Some(ComponentError::Registration(RegistrationError::NoCurrentInstance))
        );
        assert_eq!(get_index("broken"), None);
        assert_eq!(get_allocated_count(), 0);
        assert_eq!(current_instance(), None);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        setup();

        let first = component(ComponentProps::default().id("fruit")).unwrap();
        let index = get_index("fruit").unwrap();

        let second = component(ComponentProps::default().id("fruit"));
        assert_eq!(second.err(), Some(ComponentError::DuplicateId("fruit".into())));

        // The live component is untouched
        assert_eq!(get_index("fruit"), Some(index));
        assert_eq!(get_allocated_count(), 1);

        first();
        assert!(component(ComponentProps::default().id("fruit")).is_ok());
    }

    #[test]
    fn test_duplicate_id_runs_no_setup() {
        setup();

        let ran = Rc::new(RefCell::new(false));
        let ran_clone = ran.clone();

        let _first = component(ComponentProps::default().id("melon")).unwrap();
        let props = ComponentProps::with_setup(move || {
            *ran_clone.borrow_mut() = true;
            Ok(())
        });

        assert!(component(props.id("melon")).is_err());
        assert!(!*ran.borrow());
    }
}
