use super::node::Node;
use crate::{Error, MutationObserverInit, Result};
use std::cell::RefCell;
use std::rc::Rc;

/// Records what it was asked to observe.  No mutation records are produced
/// in headless mode, so the callback given at construction is dropped.
#[derive(Clone, Default)]
pub struct MutationObserver {
    targets: Rc<RefCell<Vec<(Node, MutationObserverInit)>>>,
}

impl MutationObserver {
    pub(crate) fn new(_callback: impl FnMut() + 'static) -> Self {
        Self::default()
    }

    /// Start observing `target`.  At least one of `child_list`,
    /// `attributes` (or a filter) and `character_data` must be requested.
    /// Observing a target again replaces its options.
    pub fn observe(&self, target: &Node, init: MutationObserverInit) -> Result<()> {
        let attributes = init.attributes || !init.attribute_filter.is_empty();
        if !(init.child_list || attributes || init.character_data) {
            return Err(Error::invalid(
                "observe needs child_list, attributes or character_data",
            ));
        }
        tracing::trace!(target = %target.node_name(), ?init, "observing node");
        let mut targets = self.targets.borrow_mut();
        targets.retain(|(node, _)| node != target);
        targets.push((target.clone(), init));
        Ok(())
    }

    /// Stop observing every target.
    pub fn disconnect(&self) {
        self.targets.borrow_mut().clear();
    }

    pub fn is_observing(&self) -> bool {
        !self.targets.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::{window, MutationObserverInit};

    #[test]
    fn observe_and_disconnect() {
        let window = window();
        let body = window.document().body().unwrap();
        let observer = window.mutation_observer(|| {}).unwrap();

        assert!(observer.observe(&body, MutationObserverInit::default()).is_err());
        observer
            .observe(&body, MutationObserverInit::subtree_changes())
            .unwrap();
        observer
            .observe(&body, MutationObserverInit::attributes(["class"]))
            .unwrap();
        assert!(observer.is_observing());

        observer.disconnect();
        assert!(!observer.is_observing());
    }
}
