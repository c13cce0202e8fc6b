use super::node::Node;
use crate::{Error, Result};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

struct EventData {
    type_: String,
    bubbles: bool,
    cancelable: bool,
    target: RefCell<Option<Node>>,
    current_target: RefCell<Option<Node>>,
    default_prevented: Cell<bool>,
    propagation_stopped: Cell<bool>,
    immediate_propagation_stopped: Cell<bool>,
}

/// A DOM event.  Clones share state, so a handler that calls
/// [`prevent_default`](Self::prevent_default) is seen by the dispatcher.
#[derive(Clone)]
pub struct Event(Rc<EventData>);

impl Event {
    /// A bubbling, cancelable event of type `type_`.
    pub fn new(type_: &str) -> Result<Self> {
        Self::new_with_init(type_, true, true)
    }

    pub fn new_with_init(type_: &str, bubbles: bool, cancelable: bool) -> Result<Self> {
        if type_.trim().is_empty() {
            return Err(Error::invalid("empty event type"));
        }
        Ok(Event(Rc::new(EventData {
            type_: type_.to_string(),
            bubbles,
            cancelable,
            target: RefCell::new(None),
            current_target: RefCell::new(None),
            default_prevented: Cell::new(false),
            propagation_stopped: Cell::new(false),
            immediate_propagation_stopped: Cell::new(false),
        })))
    }

    pub fn type_(&self) -> String {
        self.0.type_.clone()
    }

    /// The node the event was dispatched to.
    pub fn target(&self) -> Option<Node> {
        self.0.target.borrow().clone()
    }

    /// The node whose listener is running.
    pub fn current_target(&self) -> Option<Node> {
        self.0.current_target.borrow().clone()
    }

    pub fn bubbles(&self) -> bool {
        self.0.bubbles
    }

    pub fn cancelable(&self) -> bool {
        self.0.cancelable
    }

    pub fn default_prevented(&self) -> bool {
        self.0.default_prevented.get()
    }

    /// Has no effect on events that are not cancelable.
    pub fn prevent_default(&self) {
        if self.0.cancelable {
            self.0.default_prevented.set(true);
        }
    }

    /// Stop the event reaching ancestors of the current target.
    pub fn stop_propagation(&self) {
        self.0.propagation_stopped.set(true);
    }

    /// Also skip the remaining listeners on the current target.
    pub fn stop_immediate_propagation(&self) {
        self.0.propagation_stopped.set(true);
        self.0.immediate_propagation_stopped.set(true);
    }

    pub(crate) fn propagation_stopped(&self) -> bool {
        self.0.propagation_stopped.get()
    }

    pub(crate) fn immediate_propagation_stopped(&self) -> bool {
        self.0.immediate_propagation_stopped.get()
    }

    pub(crate) fn begin_dispatch(&self, target: &Node) {
        *self.0.target.borrow_mut() = Some(target.clone());
        self.0.propagation_stopped.set(false);
        self.0.immediate_propagation_stopped.set(false);
    }

    pub(crate) fn set_current_target(&self, node: Option<&Node>) {
        *self.0.current_target.borrow_mut() = node.cloned();
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("type", &self.0.type_)
            .field("target", &self.target())
            .finish()
    }
}
