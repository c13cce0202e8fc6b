use super::serialize;
use super::node::{Listener, Node};
use super::Event;
use crate::{Error, InsertPosition, NodeType, Result, TokenList};
use std::fmt;
use std::ops::Deref;

/// An element node.  Dereferences to [`Node`].
#[derive(Clone, PartialEq, Eq)]
pub struct Element {
    node: Node,
}

impl Element {
    pub(crate) fn from_node(node: Node) -> Self {
        debug_assert_eq!(node.node_type(), NodeType::Element);
        Self { node }
    }

    /// Tag name, always upper case.
    pub fn tag_name(&self) -> String {
        self.node.node_name()
    }

    pub fn id(&self) -> String {
        self.get_attribute("id").unwrap_or_default()
    }

    pub fn set_id(&self, id: &str) {
        self.set_attribute("id", id);
    }

    pub fn class_name(&self) -> String {
        self.get_attribute("class").unwrap_or_default()
    }

    pub fn set_class_name(&self, value: &str) {
        self.set_attribute("class", value);
    }

    /// A live view over the `class` attribute.
    pub fn class_list(&self) -> ClassList {
        ClassList {
            element: self.clone(),
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<String> {
        self.get_attribute_node(name).map(|attr| attr.value())
    }

    /// Set `name` to `value`.  New attributes go last in serialization
    /// order; existing ones keep their position.
    pub fn set_attribute(&self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if let Some(attr) = self.get_attribute_node(&name) {
            attr.set_value(value);
            return;
        }
        let attr = Attr::create(&self.node, &name, value);
        attr.set_owner(self.node.downgrade());
        self.node.0.attributes.borrow_mut().push(attr);
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.get_attribute_node(name).is_some()
    }

    /// Remove `name`.  Absent attributes are ignored.
    pub fn remove_attribute(&self, name: &str) {
        let name = name.to_ascii_lowercase();
        let mut attributes = self.node.0.attributes.borrow_mut();
        if let Some(index) = attributes.iter().position(|a| a.name() == name) {
            let attr = attributes.remove(index);
            attr.set_owner(Default::default());
        }
    }

    /// The attributes in insertion order.
    pub fn attributes(&self) -> Vec<Attr> {
        self.node.0.attributes.borrow().clone()
    }

    pub fn get_attribute_node(&self, name: &str) -> Option<Attr> {
        let name = name.to_ascii_lowercase();
        self.node
            .0
            .attributes
            .borrow()
            .iter()
            .find(|a| a.name() == name)
            .cloned()
    }

    /// Attach `attr`, detaching it from its current owner first.  Returns
    /// the attribute of the same name that it replaced.
    pub fn set_attribute_node(&self, attr: &Attr) -> Option<Attr> {
        if let Some(owner) = attr.owner_element() {
            if owner == *self {
                return None;
            }
            owner.remove_attribute(&attr.name());
        }
        let mut attributes = self.node.0.attributes.borrow_mut();
        attr.set_owner(self.node.downgrade());
        match attributes.iter().position(|a| a.name() == attr.name()) {
            Some(index) => {
                let old = std::mem::replace(&mut attributes[index], attr.clone());
                old.set_owner(Default::default());
                Some(old)
            }
            None => {
                attributes.push(attr.clone());
                None
            }
        }
    }

    /// Direct children that are elements.
    pub fn children(&self) -> Vec<Element> {
        self.node
            .child_nodes()
            .iter()
            .filter_map(Node::as_element)
            .collect()
    }

    pub fn child_element_count(&self) -> usize {
        self.children().len()
    }

    pub fn first_element_child(&self) -> Option<Element> {
        self.children().into_iter().next()
    }

    pub fn last_element_child(&self) -> Option<Element> {
        self.children().pop()
    }

    pub fn next_element_sibling(&self) -> Option<Element> {
        let mut current = self.node.next_sibling();
        while let Some(node) = current {
            if let Some(element) = node.as_element() {
                return Some(element);
            }
            current = node.next_sibling();
        }
        None
    }

    pub fn previous_element_sibling(&self) -> Option<Element> {
        let mut current = self.node.previous_sibling();
        while let Some(node) = current {
            if let Some(element) = node.as_element() {
                return Some(element);
            }
            current = node.previous_sibling();
        }
        None
    }

    /// Descendants (not this element) with tag `name`, in document order.
    /// `"*"` matches every element.
    pub fn get_elements_by_tag_name(&self, name: &str) -> Vec<Element> {
        let name = name.to_ascii_uppercase();
        let mut found = Vec::new();
        self.descendants(&mut |e| {
            if name == "*" || e.tag_name() == name {
                found.push(e.clone());
            }
        });
        found
    }

    /// Descendants carrying every class in the space-separated `names`.
    pub fn get_elements_by_class_name(&self, names: &str) -> Vec<Element> {
        let wanted = TokenList::parse(names);
        if wanted.is_empty() {
            return Vec::new();
        }
        let mut found = Vec::new();
        self.descendants(&mut |e| {
            let classes = e.class_list();
            if wanted.iter().all(|c| classes.contains(c)) {
                found.push(e.clone());
            }
        });
        found
    }

    /// Serialized children.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in self.node.child_nodes() {
            serialize::write_node(&mut out, &child);
        }
        out
    }

    /// Serialized element, tag names lower-cased.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        serialize::write_node(&mut out, &self.node);
        out
    }

    /// Detach from the parent, if any.
    pub fn remove(&self) {
        self.node.detach();
    }

    /// Put `node` where this element is.  Does nothing without a parent.
    pub fn replace_with(&self, node: &Node) -> Result<()> {
        match self.node.parent_node() {
            Some(parent) => parent.replace_child(node, &self.node).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Insert `element` relative to this one.  Returns `None` when a
    /// sibling position is requested and this element has no parent.
    pub fn insert_adjacent_element(&self, position: InsertPosition, element: &Element) -> Result<Option<Element>> {
        let parent = self.node.parent_node();
        match position {
            InsertPosition::BeforeBegin => match parent {
                Some(parent) => parent.insert_before(element, Some(&self.node)).map(|_| Some(element.clone())),
                None => Ok(None),
            },
            InsertPosition::AfterBegin => {
                let first = self.node.first_child();
                self.node.insert_before(element, first.as_ref())?;
                Ok(Some(element.clone()))
            }
            InsertPosition::BeforeEnd => {
                self.node.append_child(element)?;
                Ok(Some(element.clone()))
            }
            InsertPosition::AfterEnd => match parent {
                Some(parent) => {
                    let next = self.node.next_sibling();
                    parent.insert_before(element, next.as_ref())?;
                    Ok(Some(element.clone()))
                }
                None => Ok(None),
            },
        }
    }

    /// Register `handler` for `event`.  Nothing fires on its own in headless
    /// mode; see [`dispatch_event`](Self::dispatch_event).
    pub fn add_event_listener(&self, event: &str, handler: impl FnMut(&Event) + 'static) {
        self.node.add_listener(Listener::new(event, handler));
    }

    /// Like [`add_event_listener`](Self::add_event_listener), but the
    /// listener is dropped after it first runs.
    pub fn add_event_listener_once(&self, event: &str, handler: impl FnMut(&Event) + 'static) {
        self.node.add_listener(Listener::once(event, handler));
    }

    /// Deliver `event` synchronously to this element and, while it bubbles,
    /// its ancestors.  Returns false if a handler prevented the default.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        self.node.dispatch(event)
    }

    pub fn focus(&self) {
        tracing::debug!(tag = %self.tag_name(), "focus is a no-op without a browser");
    }

    pub fn blur(&self) {
        tracing::debug!(tag = %self.tag_name(), "blur is a no-op without a browser");
    }

    /// Inline style access.  There is no style engine in headless mode.
    pub fn style(&self) -> Option<Style> {
        None
    }

    fn descendants(&self, visit: &mut dyn FnMut(&Element)) {
        for child in self.children() {
            visit(&child);
            child.descendants(visit);
        }
    }
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

/// A name/value pair owned by at most one element.
#[derive(Clone, PartialEq, Eq)]
pub struct Attr {
    node: Node,
}

impl Attr {
    pub(crate) fn from_node(node: Node) -> Self {
        Self { node }
    }

    pub(crate) fn create(context: &Node, name: &str, value: &str) -> Self {
        Self {
            node: Node::create(NodeType::Attribute, name, context.document_weak(), value),
        }
    }

    pub fn name(&self) -> String {
        self.node.node_name()
    }

    pub fn value(&self) -> String {
        self.node.0.data.borrow().clone()
    }

    pub fn set_value(&self, value: &str) {
        *self.node.0.data.borrow_mut() = value.to_string();
    }

    /// The element this attribute is attached to.
    pub fn owner_element(&self) -> Option<Element> {
        self.node.owner().and_then(|n| n.as_element())
    }

    fn set_owner(&self, owner: std::rc::Weak<super::node::NodeData>) {
        self.node.set_owner(owner);
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

/// The `class` attribute of an element viewed as a [`TokenList`].
///
/// Every call reparses the attribute, so changes made through
/// [`Element::set_attribute`] are always visible.
#[derive(Clone)]
pub struct ClassList {
    element: Element,
}

impl ClassList {
    fn tokens(&self) -> TokenList {
        TokenList::parse(&self.element.class_name())
    }

    fn update<R>(&self, f: impl FnOnce(&mut TokenList) -> R) -> R {
        let before = self.tokens();
        let mut after = before.clone();
        let result = f(&mut after);
        if after != before {
            self.element.set_attribute("class", &after.value());
        }
        result
    }

    pub fn len(&self) -> usize {
        self.tokens().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens().contains(token)
    }

    pub fn values(&self) -> Vec<String> {
        self.tokens().values()
    }

    pub fn value(&self) -> String {
        self.tokens().value()
    }

    pub fn add(&self, token: &str) {
        self.update(|list| list.add(token));
    }

    pub fn add_all<I, S>(&self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.update(|list| list.add_all(tokens));
    }

    pub fn remove(&self, token: &str) {
        self.update(|list| list.remove(token));
    }

    pub fn remove_matching(&self, predicate: impl FnMut(&str) -> bool) {
        self.update(|list| list.remove_matching(predicate));
    }

    pub fn toggle(&self, token: &str, force: Option<bool>) -> bool {
        self.update(|list| list.toggle(token, force))
    }
}

impl fmt::Debug for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

/// Inline style facade.  Headless elements never hand one out.
#[derive(Debug, Clone)]
pub struct Style {
    _private: (),
}

impl Style {
    pub fn get_property(&self, _name: &str) -> String {
        String::new()
    }

    pub fn set_property(&self, _name: &str, _value: &str) -> Result<()> {
        Err(Error::NotImplemented("style".into()))
    }

    pub fn remove_property(&self, _name: &str) -> Result<String> {
        Err(Error::NotImplemented("style".into()))
    }
}

#[cfg(test)]
mod tests {
    use crate::{window, InsertPosition};

    fn element(tag: &str) -> crate::Element {
        window().document().create_element(tag).unwrap()
    }

    #[test]
    fn tag_name_is_upper_case() {
        assert_eq!(element("div").tag_name(), "DIV");
        assert_eq!(element("Table").tag_name(), "TABLE");
    }

    #[test]
    fn attributes_keep_insertion_order() {
        let div = element("div");
        div.set_attribute("class", "a");
        div.set_attribute("role", "alert");
        div.set_attribute("class", "b");
        let names: Vec<_> = div.attributes().iter().map(|a| a.name()).collect();
        assert_eq!(names, vec!["class", "role"]);
        assert_eq!(div.get_attribute("class").as_deref(), Some("b"));

        div.remove_attribute("class");
        assert!(!div.has_attribute("class"));
        div.remove_attribute("missing");
    }

    #[test]
    fn class_list_tracks_the_attribute() {
        let div = element("div");
        div.class_list().add("alert");
        div.class_list().add("alert-primary");
        assert_eq!(div.get_attribute("class").as_deref(), Some("alert alert-primary"));

        div.set_attribute("class", "  x  y x ");
        assert_eq!(div.class_list().values(), vec!["x", "y"]);
        assert!(div.class_list().contains("y"));

        div.class_list().remove("x");
        assert_eq!(div.class_name(), "y");
        assert!(div.class_list().toggle("z", None));
        assert!(!div.class_list().toggle("z", None));
    }

    #[test]
    fn set_attribute_node_moves_between_elements() {
        let doc = window().document();
        let a = element("div");
        let b = element("div");
        let attr = doc.create_attribute("title").unwrap();
        attr.set_value("hello");
        a.set_attribute_node(&attr);
        assert_eq!(attr.owner_element().as_ref(), Some(&a));

        b.set_attribute_node(&attr);
        assert!(!a.has_attribute("title"));
        assert_eq!(b.get_attribute("title").as_deref(), Some("hello"));
        assert_eq!(attr.owner_element().as_ref(), Some(&b));
    }

    #[test]
    fn queries_search_descendants_only() {
        let root = element("div");
        root.set_attribute("class", "card");
        let body = element("div");
        body.set_attribute("class", "card-body extra");
        let inner = element("span");
        inner.set_attribute("class", "card-body");
        root.append_child(&body).unwrap();
        body.append_child(&inner).unwrap();

        assert!(root.get_elements_by_class_name("card").is_empty());
        assert_eq!(root.get_elements_by_class_name("card-body").len(), 2);
        assert_eq!(root.get_elements_by_class_name("card-body extra"), vec![body.clone()]);
        assert_eq!(root.get_elements_by_tag_name("span"), vec![inner.clone()]);
        assert_eq!(root.get_elements_by_tag_name("*").len(), 2);
    }

    #[test]
    fn element_siblings_skip_text() {
        let doc = window().document();
        let ul = element("ul");
        let a = element("li");
        let b = element("li");
        ul.append_child(&a).unwrap();
        ul.append_child(&doc.create_text_node(" ")).unwrap();
        ul.append_child(&b).unwrap();

        assert_eq!(a.next_element_sibling().as_ref(), Some(&b));
        assert_eq!(b.previous_element_sibling().as_ref(), Some(&a));
        assert_eq!(ul.child_element_count(), 2);
        assert_eq!(ul.first_element_child().as_ref(), Some(&a));
        assert_eq!(ul.last_element_child().as_ref(), Some(&b));
    }

    #[test]
    fn insert_adjacent_positions() {
        let parent = element("div");
        let target = element("p");
        parent.append_child(&target).unwrap();
        let before = element("h1");
        let first = element("b");
        let last = element("i");
        let after = element("hr");
        target.insert_adjacent_element(InsertPosition::BeforeBegin, &before).unwrap();
        target.insert_adjacent_element(InsertPosition::AfterBegin, &first).unwrap();
        target.insert_adjacent_element(InsertPosition::BeforeEnd, &last).unwrap();
        target.insert_adjacent_element(InsertPosition::AfterEnd, &after).unwrap();

        assert_eq!(parent.outer_html(), "<div><h1></h1><p><b></b><i></i></p><hr></div>");

        let orphan = element("p");
        let result = orphan
            .insert_adjacent_element(InsertPosition::AfterEnd, &element("br"))
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn remove_and_replace_with() {
        let parent = element("div");
        let old = element("p");
        let new = element("span");
        parent.append_child(&old).unwrap();
        old.replace_with(&new).unwrap();
        assert_eq!(parent.children(), vec![new.clone()]);
        new.remove();
        assert!(!parent.has_child_nodes());
        new.remove();
    }

    #[test]
    fn style_is_absent() {
        assert!(element("div").style().is_none());
    }

    #[test]
    fn once_listeners_run_once() {
        use crate::testing::fire;
        use std::cell::Cell;
        use std::rc::Rc;

        let div = element("div");
        let once = Rc::new(Cell::new(0));
        let always = Rc::new(Cell::new(0));
        let counter = once.clone();
        div.add_event_listener_once("animationend", move |_| counter.set(counter.get() + 1));
        let counter = always.clone();
        div.add_event_listener("animationend", move |_| counter.set(counter.get() + 1));

        fire(&div, "animationend");
        fire(&div, "click");
        fire(&div, "animationend");
        assert_eq!(once.get(), 1);
        assert_eq!(always.get(), 2);
    }
}
