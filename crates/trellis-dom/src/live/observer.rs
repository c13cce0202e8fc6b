use super::node::Node;
use super::js_error;
use crate::{Error, MutationObserverInit, Result};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

type Callback = Closure<dyn FnMut(JsValue, JsValue)>;

/// A host `MutationObserver`.  The callback closure is released by
/// [`disconnect`](Self::disconnect); observing afterwards is an error.
#[derive(Clone)]
pub struct MutationObserver {
    raw: web_sys::MutationObserver,
    callback: Rc<RefCell<Option<Callback>>>,
    observing: Rc<RefCell<bool>>,
}

impl MutationObserver {
    pub(crate) fn new(mut callback: impl FnMut() + 'static) -> Result<Self> {
        let closure = Callback::new(move |_records: JsValue, _observer: JsValue| callback());
        let raw = web_sys::MutationObserver::new(closure.as_ref().unchecked_ref()).map_err(js_error)?;
        Ok(Self {
            raw,
            callback: Rc::new(RefCell::new(Some(closure))),
            observing: Rc::new(RefCell::new(false)),
        })
    }

    pub fn observe(&self, target: &Node, init: MutationObserverInit) -> Result<()> {
        if self.callback.borrow().is_none() {
            return Err(Error::invalid("observer is disconnected"));
        }
        let attributes = init.attributes || !init.attribute_filter.is_empty();
        if !(init.child_list || attributes || init.character_data) {
            return Err(Error::invalid(
                "observe needs child_list, attributes or character_data",
            ));
        }
        let options = web_sys::MutationObserverInit::new();
        options.set_child_list(init.child_list);
        options.set_subtree(init.subtree);
        options.set_character_data(init.character_data);
        if attributes {
            options.set_attributes(true);
        }
        if !init.attribute_filter.is_empty() {
            let filter: js_sys::Array = init.attribute_filter.iter().map(|name| JsValue::from_str(name)).collect();
            options.set_attribute_filter(&filter);
        }
        tracing::trace!(target = %target.node_name(), ?init, "observing node");
        self.raw
            .observe_with_options(target.raw(), &options)
            .map_err(js_error)?;
        *self.observing.borrow_mut() = true;
        Ok(())
    }

    pub fn disconnect(&self) {
        self.raw.disconnect();
        self.callback.borrow_mut().take();
        *self.observing.borrow_mut() = false;
    }

    pub fn is_observing(&self) -> bool {
        *self.observing.borrow()
    }
}
