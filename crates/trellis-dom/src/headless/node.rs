use super::{Attr, Comment, Document, DocumentType, Element, Event, Text};
use crate::registry::{self, Component};
use crate::{Error, NodeType, Result};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

pub(crate) type Handler = Rc<RefCell<dyn FnMut(&Event)>>;

/// An event listener registered on a node or window.
#[derive(Clone)]
pub(crate) struct Listener {
    pub(crate) event: String,
    pub(crate) handler: Handler,
    once: bool,
}

impl Listener {
    pub(crate) fn new(event: &str, handler: impl FnMut(&Event) + 'static) -> Self {
        Self {
            event: event.to_string(),
            handler: Rc::new(RefCell::new(handler)),
            once: false,
        }
    }

    /// A listener dropped after its first run.
    pub(crate) fn once(event: &str, handler: impl FnMut(&Event) + 'static) -> Self {
        Self {
            once: true,
            ..Self::new(event, handler)
        }
    }
}

/// Run the listeners for `event.type_()` in registration order.
///
/// The list is snapshotted first, so handlers may register more listeners
/// or mutate the tree.  A handler already running further up the stack is
/// skipped rather than re-entered.  One-shot listeners are removed before
/// any handler runs.
pub(crate) fn invoke(listeners: &RefCell<Vec<Listener>>, event: &Event) {
    let matching: Vec<Handler> = {
        let mut listeners = listeners.borrow_mut();
        let matching = listeners
            .iter()
            .filter(|l| l.event == event.type_())
            .map(|l| l.handler.clone())
            .collect();
        listeners.retain(|l| !(l.once && l.event == event.type_()));
        matching
    };
    for handler in matching {
        if let Ok(mut handler) = handler.try_borrow_mut() {
            (&mut *handler)(event);
        }
        if event.immediate_propagation_stopped() {
            break;
        }
    }
}

pub(crate) struct NodeData {
    kind: NodeType,
    name: String,
    document: Weak<NodeData>,
    parent: RefCell<Weak<NodeData>>,
    children: RefCell<Vec<Node>>,
    pub(crate) data: RefCell<String>,
    pub(crate) attributes: RefCell<Vec<Attr>>,
    pub(crate) listeners: RefCell<Vec<Listener>>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeType, name: String, document: Weak<NodeData>, data: String) -> Self {
        Self {
            kind,
            name,
            document,
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            data: RefCell::new(data),
            attributes: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

/// A node in an in-memory tree.
///
/// `Node` is a shared handle: clones refer to the same node and compare
/// equal.  Parents own their children; the parent link is weak, so dropping
/// the last handle to a detached subtree frees it.
#[derive(Clone)]
pub struct Node(pub(crate) Rc<NodeData>);

impl Node {
    pub(crate) fn create(kind: NodeType, name: impl Into<String>, document: Weak<NodeData>, data: impl Into<String>) -> Self {
        Node(Rc::new(NodeData::new(kind, name.into(), document, data.into())))
    }

    pub(crate) fn downgrade(&self) -> Weak<NodeData> {
        Rc::downgrade(&self.0)
    }

    pub(crate) fn document_weak(&self) -> Weak<NodeData> {
        self.0.document.clone()
    }

    pub fn node_type(&self) -> NodeType {
        self.0.kind
    }

    /// Upper-case tag for elements, `#text`, `#comment`, `#document`, the
    /// attribute name for attributes and `html` for the doctype.
    pub fn node_name(&self) -> String {
        self.0.name.clone()
    }

    /// The document this node was created by.  `None` for a document, and
    /// for nodes whose document has been dropped.
    pub fn owner_document(&self) -> Option<Document> {
        if self.0.kind == NodeType::Document {
            return None;
        }
        self.0.document.upgrade().map(|d| Document::from_node(Node(d)))
    }

    pub fn parent_node(&self) -> Option<Node> {
        if self.0.kind == NodeType::Attribute {
            return None;
        }
        self.0.parent.borrow().upgrade().map(Node)
    }

    pub fn parent_element(&self) -> Option<Element> {
        self.parent_node().and_then(|p| p.as_element())
    }

    /// A snapshot of the children.
    pub fn child_nodes(&self) -> Vec<Node> {
        self.0.children.borrow().clone()
    }

    pub fn first_child(&self) -> Option<Node> {
        self.0.children.borrow().first().cloned()
    }

    pub fn last_child(&self) -> Option<Node> {
        self.0.children.borrow().last().cloned()
    }

    pub fn next_sibling(&self) -> Option<Node> {
        let (parent, index) = self.position()?;
        let siblings = parent.0.children.borrow();
        siblings.get(index + 1).cloned()
    }

    pub fn previous_sibling(&self) -> Option<Node> {
        let (parent, index) = self.position()?;
        let siblings = parent.0.children.borrow();
        index.checked_sub(1).and_then(|i| siblings.get(i).cloned())
    }

    pub fn has_child_nodes(&self) -> bool {
        !self.0.children.borrow().is_empty()
    }

    /// Whether `other` is this node or one of its descendants.
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent_node();
        }
        false
    }

    /// Character data for text, comments and attributes; the concatenated
    /// text of every descendant text node for elements; empty otherwise.
    pub fn text_content(&self) -> String {
        match self.0.kind {
            NodeType::Text | NodeType::Comment | NodeType::Attribute => self.0.data.borrow().clone(),
            NodeType::Element => {
                let mut text = String::new();
                collect_text(self, &mut text);
                text
            }
            NodeType::Document | NodeType::DocumentType => String::new(),
        }
    }

    /// Replace the children of an element with a single text node, or set
    /// the data of a character node.
    pub fn set_text_content(&self, text: &str) {
        match self.0.kind {
            NodeType::Text | NodeType::Comment | NodeType::Attribute => {
                *self.0.data.borrow_mut() = text.to_string();
            }
            NodeType::Element => {
                for child in self.child_nodes() {
                    child.detach();
                }
                if !text.is_empty() {
                    let node = Node::create(NodeType::Text, "#text", self.document_weak(), text);
                    self.attach(&node, None);
                }
            }
            NodeType::Document | NodeType::DocumentType => {}
        }
    }

    /// Append `child`, detaching it from its current parent first.
    pub fn append_child(&self, child: &Node) -> Result<Node> {
        self.insert_before(child, None)
    }

    /// Insert `child` before `reference`, or append when `reference` is
    /// `None`.  `child` is detached from its current parent first.
    pub fn insert_before(&self, child: &Node, reference: Option<&Node>) -> Result<Node> {
        self.check_insertable(child)?;
        if let Some(r) = reference {
            if r.parent_node().as_ref() != Some(self) {
                return Err(Error::not_found(format!(
                    "reference {} is not a child of {}",
                    r.node_name(),
                    self.node_name()
                )));
            }
        }
        let reference = match reference {
            Some(r) if r == child => child.next_sibling(),
            other => other.cloned(),
        };
        child.detach();
        self.attach(child, reference.as_ref());
        tracing::trace!(parent = %self.0.name, child = %child.0.name, "inserted node");
        Ok(child.clone())
    }

    /// Remove `child` from this node.
    pub fn remove_child(&self, child: &Node) -> Result<Node> {
        if child.parent_node().as_ref() != Some(self) {
            return Err(Error::not_found(format!(
                "{} is not a child of {}",
                child.node_name(),
                self.node_name()
            )));
        }
        child.detach();
        Ok(child.clone())
    }

    /// Put `new_child` where `old_child` is and remove `old_child`.
    pub fn replace_child(&self, new_child: &Node, old_child: &Node) -> Result<Node> {
        if old_child.parent_node().as_ref() != Some(self) {
            return Err(Error::not_found(format!(
                "{} is not a child of {}",
                old_child.node_name(),
                self.node_name()
            )));
        }
        if new_child == old_child {
            return Ok(old_child.clone());
        }
        self.insert_before(new_child, Some(old_child))?;
        self.remove_child(old_child)
    }

    /// Copy this node, and its subtree when `deep` is set.  Listeners are
    /// not copied and the copy has no parent.
    pub fn clone_node(&self, deep: bool) -> Result<Node> {
        let copy = Node::create(
            self.0.kind,
            self.0.name.clone(),
            self.document_weak(),
            self.0.data.borrow().clone(),
        );
        if let Some(element) = copy.as_element() {
            for attr in self.0.attributes.borrow().iter() {
                element.set_attribute(&attr.name(), &attr.value());
            }
        }
        if deep {
            for child in self.child_nodes() {
                copy.attach(&child.clone_node(true)?, None);
            }
        }
        Ok(copy)
    }

    pub fn is_same_node(&self, other: &Node) -> bool {
        self == other
    }

    /// The innermost component whose root is this node or an ancestor.
    ///
    /// Walks up the parent chain and returns the first element carrying a
    /// registered `data-component` kind, rebuilt by its factory.
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
        (self.0.kind == NodeType::Element).then(|| Element::from_node(self.clone()))
    }

    pub fn as_text(&self) -> Option<Text> {
        (self.0.kind == NodeType::Text).then(|| Text::from_node(self.clone()))
    }

    pub fn as_comment(&self) -> Option<Comment> {
        (self.0.kind == NodeType::Comment).then(|| Comment::from_node(self.clone()))
    }

    pub fn as_attr(&self) -> Option<Attr> {
        (self.0.kind == NodeType::Attribute).then(|| Attr::from_node(self.clone()))
    }

    pub fn as_document(&self) -> Option<Document> {
        (self.0.kind == NodeType::Document).then(|| Document::from_node(self.clone()))
    }

    pub fn as_document_type(&self) -> Option<DocumentType> {
        (self.0.kind == NodeType::DocumentType).then(|| DocumentType::from_node(self.clone()))
    }

    pub(crate) fn add_listener(&self, listener: Listener) {
        tracing::trace!(node = %self.0.name, event = %listener.event, "added event listener");
        self.0.listeners.borrow_mut().push(listener);
    }

    /// Deliver `event` to this node and, while it bubbles, its ancestors.
    pub(crate) fn dispatch(&self, event: &Event) -> bool {
        tracing::trace!(node = %self.0.name, event = %event.type_(), "dispatching event");
        event.begin_dispatch(self);
        let mut current = Some(self.clone());
        while let Some(node) = current {
            event.set_current_target(Some(&node));
            invoke(&node.0.listeners, event);
            if !event.bubbles() || event.propagation_stopped() {
                break;
            }
            current = node.parent_node();
        }
        event.set_current_target(None);
        !event.default_prevented()
    }

    /// Parent and index of this node among its siblings.
    fn position(&self) -> Option<(Node, usize)> {
        let parent = self.parent_node()?;
        let index = parent.0.children.borrow().iter().position(|c| c == self)?;
        Some((parent, index))
    }

    fn check_insertable(&self, child: &Node) -> Result<()> {
        if !matches!(self.0.kind, NodeType::Element | NodeType::Document) {
            return Err(Error::invalid(format!("{} cannot have children", self.0.kind)));
        }
        if matches!(child.0.kind, NodeType::Document | NodeType::Attribute) {
            return Err(Error::invalid(format!("{} cannot be a child", child.0.kind)));
        }
        if child.contains(self) {
            return Err(Error::invalid(format!(
                "{} is an ancestor of {}",
                child.node_name(),
                self.node_name()
            )));
        }
        Ok(())
    }

    /// Unlink from the current parent, if any.
    pub(crate) fn detach(&self) {
        if let Some((parent, index)) = self.position() {
            parent.0.children.borrow_mut().remove(index);
        }
        *self.0.parent.borrow_mut() = Weak::new();
    }

    /// Link a parentless `child` before `reference` (or at the end).
    fn attach(&self, child: &Node, reference: Option<&Node>) {
        let mut children = self.0.children.borrow_mut();
        let index = reference
            .and_then(|r| children.iter().position(|c| c == r))
            .unwrap_or(children.len());
        children.insert(index, child.clone());
        *child.0.parent.borrow_mut() = self.downgrade();
    }

    pub(crate) fn set_owner(&self, owner: Weak<NodeData>) {
        *self.0.parent.borrow_mut() = owner;
    }

    pub(crate) fn owner(&self) -> Option<Node> {
        self.0.parent.borrow().upgrade().map(Node)
    }
}

fn collect_text(node: &Node, out: &mut String) {
    for child in node.0.children.borrow().iter() {
        match child.0.kind {
            NodeType::Text => out.push_str(&child.0.data.borrow()),
            NodeType::Element => collect_text(child, out),
            _ => {}
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.0.kind)
            .field("name", &self.0.name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{window, Node, NodeType};

    fn element(tag: &str) -> crate::Element {
        window().document().create_element(tag).unwrap()
    }

    #[test]
    fn append_sets_parent_and_siblings() {
        let parent = element("div");
        let a = element("span");
        let b = element("span");
        parent.append_child(&a).unwrap();
        parent.append_child(&b).unwrap();

        assert_eq!(a.parent_node().as_ref(), Some(&*parent));
        assert!(parent.contains(&a));
        assert_eq!(a.next_sibling().as_ref(), Some(&*b));
        assert_eq!(b.previous_sibling().as_ref(), Some(&*a));
        assert!(a.previous_sibling().is_none());
        assert!(b.next_sibling().is_none());
    }

    #[test]
    fn append_detaches_from_previous_parent() {
        let q = element("div");
        let p = element("div");
        let n = element("p");
        q.append_child(&n).unwrap();
        p.append_child(&n).unwrap();

        assert!(!q.contains(&n));
        assert!(!q.has_child_nodes());
        assert_eq!(n.parent_node().as_ref(), Some(&*p));
    }

    #[test]
    fn insert_before_none_appends() {
        let parent = element("ul");
        let a = element("li");
        let b = element("li");
        parent.append_child(&a).unwrap();
        parent.insert_before(&b, None).unwrap();
        assert_eq!(parent.last_child().as_ref(), Some(&*b));

        let c = element("li");
        parent.insert_before(&c, Some(&a)).unwrap();
        assert_eq!(parent.first_child().as_ref(), Some(&*c));
    }

    #[test]
    fn insert_before_foreign_reference_is_not_found() {
        let parent = element("div");
        let stranger = element("div");
        let child = element("p");
        let err = parent.insert_before(&child, Some(&stranger)).unwrap_err();
        assert!(matches!(err, crate::Error::NotFound(_)));
    }

    #[test]
    fn remove_child_of_other_parent_is_not_found() {
        let parent = element("div");
        let child = element("p");
        let err = parent.remove_child(&child).unwrap_err();
        assert!(matches!(err, crate::Error::NotFound(_)));

        parent.append_child(&child).unwrap();
        parent.remove_child(&child).unwrap();
        assert!(child.parent_node().is_none());
    }

    #[test]
    fn cycles_are_rejected() {
        let outer = element("div");
        let inner = element("div");
        outer.append_child(&inner).unwrap();
        assert!(inner.append_child(&outer).is_err());
        assert!(outer.append_child(&outer).is_err());
    }

    #[test]
    fn replace_child_keeps_position() {
        let parent = element("div");
        let a = element("a");
        let b = element("b");
        let c = element("i");
        parent.append_child(&a).unwrap();
        parent.append_child(&b).unwrap();
        parent.replace_child(&c, &a).unwrap();
        let names: Vec<_> = parent.child_nodes().iter().map(Node::node_name).collect();
        assert_eq!(names, vec!["I", "B"]);
        assert!(a.parent_node().is_none());
    }

    #[test]
    fn text_content_concatenates_descendants() {
        let doc = window().document();
        let p = element("p");
        p.append_child(&doc.create_text_node("Hello, ")).unwrap();
        let b = element("b");
        b.append_child(&doc.create_text_node("world")).unwrap();
        p.append_child(&b).unwrap();
        p.append_child(&doc.create_comment("ignored")).unwrap();
        assert_eq!(p.text_content(), "Hello, world");

        p.set_text_content("reset");
        assert_eq!(p.child_nodes().len(), 1);
        assert_eq!(p.first_child().unwrap().node_type(), NodeType::Text);
    }

    #[test]
    fn clone_node_deep_copies_attributes_and_children() {
        let doc = window().document();
        let a = element("a");
        a.set_attribute("href", "#top");
        a.append_child(&doc.create_text_node("top")).unwrap();
        let copy = a.clone_node(true).unwrap().as_element().unwrap();
        assert_ne!(copy, a);
        assert_eq!(copy.outer_html(), a.outer_html());

        let shallow = a.clone_node(false).unwrap();
        assert!(!shallow.has_child_nodes());
    }
}
