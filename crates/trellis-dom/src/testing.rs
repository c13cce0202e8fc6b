//! Helpers for asserting on DOM trees in tests.
//!
//! These work on either backend but are written with the headless backend
//! in mind, where a test builds a tree, pokes at it and compares markup.
//!
//! ```rust,ignore
//! use trellis_dom::testing::{class_set, fire};
//!
//! let button = document.create_element("button")?;
//! button.set_attribute("class", "btn btn-primary");
//! assert!(class_set(&button).contains("btn-primary"));
//! fire(&button, "click");
//! ```

use crate::{Element, Event, Node};
use std::collections::BTreeSet;

/// The element's classes as a sorted set, for order-insensitive asserts.
pub fn class_set(element: &Element) -> BTreeSet<String> {
    element.class_list().values().into_iter().collect()
}

/// Lower-case tag names of the element children of `node`, in order.
pub fn tag_names(node: &Node) -> Vec<String> {
    node.child_nodes()
        .iter()
        .filter_map(Node::as_element)
        .map(|e| e.tag_name().to_ascii_lowercase())
        .collect()
}

/// Dispatch a bubbling, cancelable event of type `event` at `target`.
/// Returns false if a handler prevented the default.
///
/// # Panics
///
/// Panics if `event` is not a valid event type.
pub fn fire(target: &Element, event: &str) -> bool {
    let event = Event::new(event).unwrap_or_else(|err| panic!("cannot build {event:?} event: {err}"));
    target.dispatch_event(&event)
}

/// Drop whitespace runs that sit between two tags, plus leading and
/// trailing whitespace, so hand-indented markup compares equal to
/// serializer output.  Whitespace inside text is kept.
pub fn normalize_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pending = String::new();
    for c in html.trim().chars() {
        if c.is_whitespace() {
            pending.push(c);
            continue;
        }
        if !(c == '<' && out.ends_with('>')) {
            out.push_str(&pending);
        }
        pending.clear();
        out.push(c);
    }
    out
}
