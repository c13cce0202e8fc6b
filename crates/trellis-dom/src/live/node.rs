use super::{js_error, Attr, Comment, Document, DocumentType, Element, Event, Text};
use crate::registry::{self, Component};
use crate::{Error, NodeType, Result};
use std::cell::RefCell;
use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type RawListener = Closure<dyn FnMut(web_sys::Event)>;

thread_local! {
    // Closures handed to the host must outlive every dispatch to them.
    static LISTENERS: RefCell<Vec<RawListener>> = const { RefCell::new(Vec::new()) };
}

/// Attach `handler` to a host event target and keep its closure alive.
pub(crate) fn listen(target: &web_sys::EventTarget, event: &str, mut handler: impl FnMut(&Event) + 'static) {
    let closure = RawListener::new(move |raw: web_sys::Event| handler(&Event::from_raw(raw)));
    match target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        Ok(()) => {
            tracing::trace!(event, "added event listener");
            LISTENERS.with(|listeners| listeners.borrow_mut().push(closure));
        }
        Err(err) => tracing::warn!(event, error = ?err, "could not add event listener"),
    }
}

/// Attach `handler` for a single dispatch.  The host drops the listener
/// after it runs, and the closure frees itself.
pub(crate) fn listen_once(target: &web_sys::EventTarget, event: &str, mut handler: impl FnMut(&Event) + 'static) {
    let callback = Closure::once_into_js(move |raw: web_sys::Event| handler(&Event::from_raw(raw)));
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    match target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    ) {
        Ok(()) => tracing::trace!(event, "added one-shot event listener"),
        Err(err) => tracing::warn!(event, error = ?err, "could not add event listener"),
    }
}

/// A node in the browser document.
///
/// Clones refer to the same host node and compare equal.
#[derive(Clone)]
pub struct Node {
    raw: web_sys::Node,
}

impl Node {
    pub(crate) fn from_raw(raw: web_sys::Node) -> Self {
        Self { raw }
    }

    pub(crate) fn raw(&self) -> &web_sys::Node {
        &self.raw
    }

    /// The host object, for calling into page scripts.
    pub fn js_value(&self) -> &wasm_bindgen::JsValue {
        self.raw.as_ref()
    }

    /// Host-only kinds such as fragments and CDATA sections are reported as
    /// comments, since the toolkit treats them as opaque.
    pub fn node_type(&self) -> NodeType {
        NodeType::from_code(self.raw.node_type()).unwrap_or(NodeType::Comment)
    }

    pub fn node_name(&self) -> String {
        self.raw.node_name()
    }

    pub fn owner_document(&self) -> Option<Document> {
        self.raw.owner_document().map(Document::from_raw)
    }

    pub fn parent_node(&self) -> Option<Node> {
        self.raw.parent_node().map(Node::from_raw)
    }

    pub fn parent_element(&self) -> Option<Element> {
        self.raw.parent_element().map(Element::from_raw)
    }

    pub fn child_nodes(&self) -> Vec<Node> {
        node_list(&self.raw.child_nodes())
    }

    pub fn first_child(&self) -> Option<Node> {
        self.raw.first_child().map(Node::from_raw)
    }

    pub fn last_child(&self) -> Option<Node> {
        self.raw.last_child().map(Node::from_raw)
    }

    pub fn next_sibling(&self) -> Option<Node> {
        self.raw.next_sibling().map(Node::from_raw)
    }

    pub fn previous_sibling(&self) -> Option<Node> {
        self.raw.previous_sibling().map(Node::from_raw)
    }

    pub fn has_child_nodes(&self) -> bool {
        self.raw.has_child_nodes()
    }

    pub fn contains(&self, other: &Node) -> bool {
        self.raw.contains(Some(&other.raw))
    }

    pub fn text_content(&self) -> String {
        self.raw.text_content().unwrap_or_default()
    }

    pub fn set_text_content(&self, text: &str) {
        self.raw.set_text_content(Some(text));
    }

    pub fn append_child(&self, child: &Node) -> Result<Node> {
        self.insert_before(child, None)
    }

    pub fn insert_before(&self, child: &Node, reference: Option<&Node>) -> Result<Node> {
        if child.contains(self) {
            return Err(Error::invalid(format!(
                "{} is an ancestor of {}",
                child.node_name(),
                self.node_name()
            )));
        }
        if let Some(r) = reference {
            if r.parent_node().as_ref() != Some(self) {
                return Err(Error::not_found(format!(
                    "reference {} is not a child of {}",
                    r.node_name(),
                    self.node_name()
                )));
            }
        }
        tracing::trace!(parent = %self.node_name(), child = %child.node_name(), "inserting node");
        self.raw
            .insert_before(&child.raw, reference.map(|r| &r.raw))
            .map(Node::from_raw)
            .map_err(js_error)
    }

    pub fn remove_child(&self, child: &Node) -> Result<Node> {
        if child.parent_node().as_ref() != Some(self) {
            return Err(Error::not_found(format!(
                "{} is not a child of {}",
                child.node_name(),
                self.node_name()
            )));
        }
        self.raw.remove_child(&child.raw).map(Node::from_raw).map_err(js_error)
    }

    pub fn replace_child(&self, new_child: &Node, old_child: &Node) -> Result<Node> {
        if old_child.parent_node().as_ref() != Some(self) {
            return Err(Error::not_found(format!(
                "{} is not a child of {}",
                old_child.node_name(),
                self.node_name()
            )));
        }
        self.raw
            .replace_child(&new_child.raw, &old_child.raw)
            .map(Node::from_raw)
            .map_err(js_error)
    }

    pub fn clone_node(&self, deep: bool) -> Result<Node> {
        self.raw
            .clone_node_with_deep(deep)
            .map(Node::from_raw)
            .map_err(js_error)
    }

    pub fn is_same_node(&self, other: &Node) -> bool {
        self.raw.is_same_node(Some(&other.raw))
    }

    /// The innermost component whose root is this node or an ancestor.
    pub fn component(&self) -> Option<Box<dyn Component>> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if let Some(element) = node.as_element() {
                if let Some(component) = registry::component_for(&element) {
                    return Some(component);
                }
            }
            current = node.parent_node();
        }
        None
    }

    pub fn as_element(&self) -> Option<Element> {
        self.raw.dyn_ref::<web_sys::Element>().cloned().map(Element::from_raw)
    }

    pub fn as_text(&self) -> Option<Text> {
        self.raw.dyn_ref::<web_sys::Text>().cloned().map(Text::from_raw)
    }

    pub fn as_comment(&self) -> Option<Comment> {
        self.raw.dyn_ref::<web_sys::Comment>().cloned().map(Comment::from_raw)
    }

    pub fn as_attr(&self) -> Option<Attr> {
        self.raw.dyn_ref::<web_sys::Attr>().cloned().map(Attr::from_raw)
    }

    pub fn as_document(&self) -> Option<Document> {
        self.raw.dyn_ref::<web_sys::Document>().cloned().map(Document::from_raw)
    }

    pub fn as_document_type(&self) -> Option<DocumentType> {
        self.raw
            .dyn_ref::<web_sys::DocumentType>()
            .cloned()
            .map(DocumentType::from_raw)
    }
}

pub(crate) fn node_list(list: &web_sys::NodeList) -> Vec<Node> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(Node::from_raw)
        .collect()
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.raw.is_same_node(Some(&other.raw))
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.node_type())
            .field("name", &self.node_name())
            .finish()
    }
}
