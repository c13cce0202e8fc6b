use super::node::{listen, listen_once, Node};
use super::{js_error, swallow, Event};
use crate::{InsertPosition, Result};
use std::fmt;
use std::ops::Deref;
use wasm_bindgen::JsCast;

/// An element in the browser document.  Dereferences to [`Node`].
#[derive(Clone, PartialEq, Eq)]
pub struct Element {
    node: Node,
    raw: web_sys::Element,
}

impl Element {
    pub(crate) fn from_raw(raw: web_sys::Element) -> Self {
        Self {
            node: Node::from_raw(raw.clone().into()),
            raw,
        }
    }

    pub fn tag_name(&self) -> String {
        self.raw.tag_name()
    }

    pub fn id(&self) -> String {
        self.raw.id()
    }

    pub fn set_id(&self, id: &str) {
        self.raw.set_id(id);
    }

    pub fn class_name(&self) -> String {
        self.raw.class_name()
    }

    pub fn set_class_name(&self, value: &str) {
        self.raw.set_class_name(value);
    }

    pub fn class_list(&self) -> ClassList {
        ClassList {
            raw: self.raw.class_list(),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.raw.get_attribute(name)
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        swallow("set_attribute", self.raw.set_attribute(name, value));
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.raw.has_attribute(name)
    }

    pub fn remove_attribute(&self, name: &str) {
        swallow("remove_attribute", self.raw.remove_attribute(name));
    }

    pub fn attributes(&self) -> Vec<Attr> {
        let map = self.raw.attributes();
        (0..map.length())
            .filter_map(|i| map.item(i))
            .map(Attr::from_raw)
            .collect()
    }

    pub fn get_attribute_node(&self, name: &str) -> Option<Attr> {
        self.raw.get_attribute_node(name).map(Attr::from_raw)
    }

    pub fn set_attribute_node(&self, attr: &Attr) -> Option<Attr> {
        if let Some(owner) = attr.owner_element() {
            if owner == *self {
                return None;
            }
            owner.remove_attribute(&attr.name());
        }
        swallow("set_attribute_node", self.raw.set_attribute_node(&attr.raw))
            .flatten()
            .map(Attr::from_raw)
    }

    pub fn children(&self) -> Vec<Element> {
        collection(&self.raw.children())
    }

    pub fn child_element_count(&self) -> usize {
        self.raw.child_element_count() as usize
    }

    pub fn first_element_child(&self) -> Option<Element> {
        self.raw.first_element_child().map(Element::from_raw)
    }

    pub fn last_element_child(&self) -> Option<Element> {
        self.raw.last_element_child().map(Element::from_raw)
    }

    pub fn next_element_sibling(&self) -> Option<Element> {
        self.raw.next_element_sibling().map(Element::from_raw)
    }

    pub fn previous_element_sibling(&self) -> Option<Element> {
        self.raw.previous_element_sibling().map(Element::from_raw)
    }

    pub fn get_elements_by_tag_name(&self, name: &str) -> Vec<Element> {
        collection(&self.raw.get_elements_by_tag_name(name))
    }

    pub fn get_elements_by_class_name(&self, names: &str) -> Vec<Element> {
        collection(&self.raw.get_elements_by_class_name(names))
    }

    pub fn inner_html(&self) -> String {
        self.raw.inner_html()
    }

    pub fn outer_html(&self) -> String {
        self.raw.outer_html()
    }

    pub fn remove(&self) {
        self.raw.remove();
    }

    pub fn replace_with(&self, node: &Node) -> Result<()> {
        self.raw.replace_with_with_node_1(node.raw()).map_err(js_error)
    }

    pub fn insert_adjacent_element(&self, position: InsertPosition, element: &Element) -> Result<Option<Element>> {
        self.raw
            .insert_adjacent_element(position.as_str(), &element.raw)
            .map(|inserted| inserted.map(Element::from_raw))
            .map_err(js_error)
    }

    /// Register `handler` for `event`.  The closure lives as long as the page.
    pub fn add_event_listener(&self, event: &str, handler: impl FnMut(&Event) + 'static) {
        listen(&self.raw, event, handler);
    }

    /// Like [`add_event_listener`](Self::add_event_listener), but the host
    /// drops the listener after it first runs.
    pub fn add_event_listener_once(&self, event: &str, handler: impl FnMut(&Event) + 'static) {
        listen_once(&self.raw, event, handler);
    }

    /// Dispatch through the host.  Returns false if a handler prevented the
    /// default.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        swallow("dispatch_event", self.raw.dispatch_event(event.raw())).unwrap_or(false)
    }

    pub fn focus(&self) {
        if let Some(html) = self.raw.dyn_ref::<web_sys::HtmlElement>() {
            swallow("focus", html.focus());
        }
    }

    pub fn blur(&self) {
        if let Some(html) = self.raw.dyn_ref::<web_sys::HtmlElement>() {
            swallow("blur", html.blur());
        }
    }

    /// Inline style of an HTML element.  `None` for SVG and other
    /// non-HTML elements.
    pub fn style(&self) -> Option<Style> {
        self.raw
            .dyn_ref::<web_sys::HtmlElement>()
            .map(|html| Style { raw: html.style() })
    }
}

fn collection(list: &web_sys::HtmlCollection) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(Element::from_raw)
        .collect()
}

impl Deref for Element {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.node
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        element.node
    }
}

impl AsRef<Node> for Element {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag_name())
            .field("id", &self.id())
            .field("class", &self.class_name())
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Attr {
    node: Node,
    raw: web_sys::Attr,
}

impl Attr {
    pub(crate) fn from_raw(raw: web_sys::Attr) -> Self {
        Self {
            node: Node::from_raw(raw.clone().into()),
            raw,
        }
    }

    pub fn name(&self) -> String {
        self.raw.name()
    }

    pub fn value(&self) -> String {
        self.raw.value()
    }

    pub fn set_value(&self, value: &str) {
        self.raw.set_value(value);
    }

    pub fn owner_element(&self) -> Option<Element> {
        self.raw.owner_element().map(Element::from_raw)
    }
}

impl Deref for Attr {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.node
    }
}

impl From<Attr> for Node {
    fn from(attr: Attr) -> Node {
        attr.node
    }
}

impl fmt::Debug for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attr")
            .field("name", &self.name())
            .field("value", &self.value())
            .finish()
    }
}

/// The host `DOMTokenList` behind `Element.classList`.
#[derive(Clone)]
pub struct ClassList {
    raw: web_sys::DomTokenList,
}

impl ClassList {
    pub fn len(&self) -> usize {
        self.raw.length() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.raw.length() == 0
    }

    pub fn contains(&self, token: &str) -> bool {
        self.raw.contains(token)
    }

    pub fn values(&self) -> Vec<String> {
        (0..self.raw.length())
            .filter_map(|i| self.raw.item(i))
            .collect()
    }

    pub fn value(&self) -> String {
        self.raw.value()
    }

    pub fn add(&self, token: &str) {
        for token in token.split_whitespace() {
            swallow("classList.add", self.raw.add_1(token));
        }
    }

    pub fn add_all<I, S>(&self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    pub fn remove(&self, token: &str) {
        swallow("classList.remove", self.raw.remove_1(token));
    }

    pub fn remove_matching(&self, mut predicate: impl FnMut(&str) -> bool) {
        for token in self.values() {
            if predicate(&token) {
                self.remove(&token);
            }
        }
    }

    pub fn toggle(&self, token: &str, force: Option<bool>) -> bool {
        let result = match force {
            Some(force) => self.raw.toggle_with_force(token, force),
            None => self.raw.toggle(token),
        };
        swallow("classList.toggle", result).unwrap_or(false)
    }
}

impl fmt::Debug for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Inline style declarations of an HTML element.
#[derive(Debug, Clone)]
pub struct Style {
    raw: web_sys::CssStyleDeclaration,
}

impl Style {
    pub fn get_property(&self, name: &str) -> String {
        self.raw.get_property_value(name).unwrap_or_default()
    }

    pub fn set_property(&self, name: &str, value: &str) -> Result<()> {
        self.raw.set_property(name, value).map_err(js_error)
    }

    pub fn remove_property(&self, name: &str) -> Result<String> {
        self.raw.remove_property(name).map_err(js_error)
    }
}
