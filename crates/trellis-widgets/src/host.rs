//! Calls into the page's Bootstrap bundle.
//!
//! Interactive widgets (offcanvas, toast) hand `show`/`hide` to the
//! `bootstrap` global when the page loaded it.  Headless builds have no
//! script runtime, so every call is a logged no-op there.

#[cfg(feature = "web")]
mod imp {
    use js_sys::{Function, Reflect};
    use trellis_dom::Element;
    use wasm_bindgen::{JsCast, JsValue};

    fn lookup(target: &JsValue, key: &str) -> Option<JsValue> {
        Reflect::get(target, &JsValue::from_str(key))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    fn instance(plugin: &str, element: &Element, create: bool) -> Option<JsValue> {
        let class = lookup(&js_sys::global(), "bootstrap").and_then(|b| lookup(&b, plugin))?;
        let getter = if create { "getOrCreateInstance" } else { "getInstance" };
        let getter: Function = lookup(&class, getter)?.dyn_into().ok()?;
        getter
            .call1(&class, element.js_value())
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
    }

    /// Call `method` on the plugin instance bound to `element`, creating
    /// the instance first when `create` is set.  Returns whether it ran.
    pub(crate) fn invoke(plugin: &str, element: &Element, method: &str, create: bool) -> bool {
        let Some(instance) = instance(plugin, element, create) else {
            tracing::debug!(plugin, method, "no bootstrap instance");
            return false;
        };
        let Some(function) = lookup(&instance, method).and_then(|f| f.dyn_into::<Function>().ok()) else {
            tracing::warn!(plugin, method, "bootstrap plugin has no such method");
            return false;
        };
        match function.call0(&instance) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(plugin, method, error = ?err, "bootstrap call failed");
                false
            }
        }
    }

    /// A string property of the host element, such as a select's `value`.
    pub(crate) fn property(element: &Element, name: &str) -> Option<String> {
        Reflect::get(element.js_value(), &JsValue::from_str(name))
            .ok()?
            .as_string()
    }

    pub(crate) fn set_property(element: &Element, name: &str, value: &str) -> bool {
        Reflect::set(element.js_value(), &JsValue::from_str(name), &JsValue::from_str(value))
            .unwrap_or(false)
    }
}

#[cfg(not(feature = "web"))]
mod imp {
    use trellis_dom::Element;

    pub(crate) fn invoke(plugin: &str, _element: &Element, method: &str, _create: bool) -> bool {
        tracing::trace!(plugin, method, "no script runtime");
        false
    }

    pub(crate) fn property(_element: &Element, _name: &str) -> Option<String> {
        None
    }

    pub(crate) fn set_property(_element: &Element, _name: &str, _value: &str) -> bool {
        false
    }
}

pub(crate) use imp::{invoke, property, set_property};
