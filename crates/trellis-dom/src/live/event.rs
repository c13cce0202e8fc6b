use super::node::Node;
use super::js_error;
use crate::Result;
use std::fmt;
use wasm_bindgen::JsCast;

/// A host event.
#[derive(Clone)]
pub struct Event {
    raw: web_sys::Event,
}

impl Event {
    pub fn new(type_: &str) -> Result<Self> {
        Self::new_with_init(type_, true, true)
    }

    pub fn new_with_init(type_: &str, bubbles: bool, cancelable: bool) -> Result<Self> {
        let init = web_sys::EventInit::new();
        init.set_bubbles(bubbles);
        init.set_cancelable(cancelable);
        web_sys::Event::new_with_event_init_dict(type_, &init)
            .map(Event::from_raw)
            .map_err(js_error)
    }

    pub(crate) fn from_raw(raw: web_sys::Event) -> Self {
        Self { raw }
    }

    pub(crate) fn raw(&self) -> &web_sys::Event {
        &self.raw
    }

    pub fn type_(&self) -> String {
        self.raw.type_()
    }

    /// The target node.  `None` for window-level events.
    pub fn target(&self) -> Option<Node> {
        self.raw
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(Node::from_raw)
    }

    pub fn current_target(&self) -> Option<Node> {
        self.raw
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(Node::from_raw)
    }

    pub fn bubbles(&self) -> bool {
        self.raw.bubbles()
    }

    pub fn cancelable(&self) -> bool {
        self.raw.cancelable()
    }

    pub fn default_prevented(&self) -> bool {
        self.raw.default_prevented()
    }

    pub fn prevent_default(&self) {
        self.raw.prevent_default();
    }

    pub fn stop_propagation(&self) {
        self.raw.stop_propagation();
    }

    pub fn stop_immediate_propagation(&self) {
        self.raw.stop_immediate_propagation();
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("type", &self.type_())
            .field("target", &self.target())
            .finish()
    }
}
