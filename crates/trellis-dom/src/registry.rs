//! Reverse lookup from DOM nodes to the components that own them.
//!
//! The widget layer sits above this crate, so it installs one factory per
//! component kind at start-up.  [`Node::component`](crate::Node::component)
//! then walks from any node up to the nearest element whose
//! `data-component` attribute names a registered kind and asks the factory
//! to rebuild a façade over it.
//!
//! The table is closed by the first lookup: later registrations fail.

use crate::{Element, Error, Result};
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// Attribute carrying the component kind on every component root.
pub const DATA_COMPONENT: &str = "data-component";

/// A UI object anchored on a root element.
///
/// Components keep no state outside their DOM, so a façade rebuilt from the
/// root element by a factory behaves exactly like the original.
pub trait Component: Any {
    /// Kind name, the value of `data-component` on the root.
    fn name(&self) -> &str;

    /// The root element.
    fn element(&self) -> &Element;

    /// Value of the root's `id` attribute, or empty.
    fn id(&self) -> String {
        self.element().get_attribute("id").unwrap_or_default()
    }

    fn as_any(&self) -> &dyn Any;
}

impl dyn Component {
    /// Recover the concrete component type behind a lookup result.
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: Component>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

/// Rebuilds a component from its root element, or declines with `None`.
pub type ComponentFactory = fn(Element) -> Option<Box<dyn Component>>;

static FACTORIES: RwLock<BTreeMap<String, ComponentFactory>> = RwLock::new(BTreeMap::new());
static SEALED: AtomicBool = AtomicBool::new(false);

/// Install `factory` for the component kind `kind`.
///
/// Registering the same kind twice replaces the earlier factory.  Fails with
/// [`Error::Internal`] once any lookup has happened.
pub fn register_component(kind: &str, factory: ComponentFactory) -> Result<()> {
    if SEALED.load(Ordering::Acquire) {
        return Err(Error::internal(format!(
            "cannot register component kind {kind:?} after the first lookup"
        )));
    }
    let mut factories = FACTORIES
        .write()
        .map_err(|_| Error::internal("component registry lock poisoned"))?;
    tracing::debug!(kind, "registered component factory");
    factories.insert(kind.to_string(), factory);
    Ok(())
}

/// Whether a factory is installed for `kind`.  Does not close the table.
pub fn is_registered(kind: &str) -> bool {
    FACTORIES
        .read()
        .map(|factories| factories.contains_key(kind))
        .unwrap_or(false)
}

/// Build the component rooted at `element`, if it is a component root.
pub(crate) fn component_for(element: &Element) -> Option<Box<dyn Component>> {
    SEALED.store(true, Ordering::Release);
    let kind = element.get_attribute(DATA_COMPONENT)?;
    let factory = {
        let factories = FACTORIES.read().ok()?;
        *factories.get(&kind)?
    };
    factory(element.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window;

    struct Badge {
        element: Element,
    }

    impl Component for Badge {
        fn name(&self) -> &str {
            "test-badge"
        }

        fn element(&self) -> &Element {
            &self.element
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn badge(element: Element) -> Option<Box<dyn Component>> {
        Some(Box::new(Badge { element }))
    }

    // The only test in this crate that performs a lookup, since the first
    // lookup closes the table for the whole process.
    #[test]
    fn lookup_walks_to_the_nearest_component_root() {
        register_component("test-badge", badge).unwrap();
        assert!(is_registered("test-badge"));
        assert!(!is_registered("test-missing"));

        let doc = window().document();
        let root = doc.create_element("span").unwrap();
        root.set_attribute(DATA_COMPONENT, "test-badge");
        root.set_attribute("id", "b1");
        let text = doc.create_text_node("new");
        root.append_child(&text).unwrap();

        let found = text.component().expect("component above text");
        assert_eq!(found.name(), "test-badge");
        assert_eq!(found.id(), "b1");
        assert!(found.is::<Badge>());
        assert_eq!(found.downcast_ref::<Badge>().unwrap().element, root);

        let unknown = doc.create_element("div").unwrap();
        unknown.set_attribute(DATA_COMPONENT, "test-missing");
        assert!(unknown.component().is_none());

        let err = register_component("test-late", badge).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }
}
