//! The component base every widget is built on.
//!
//! A widget is a thin façade over a root element, plus a body element that
//! receives children (often the root itself).  Widgets keep no other state,
//! so the registry can rebuild one from its root at any time.

use crate::{ComponentKind, Error, Opt, Opts, Result};
use std::fmt;
use trellis_dom::{Document, Element, Node, DATA_COMPONENT};

/// Root and body of one component.
#[derive(Clone, PartialEq, Eq)]
pub struct Widget {
    kind: ComponentKind,
    root: Element,
    body: Element,
}

impl Widget {
    /// Create a `<tag>` root for `kind`, run `base` then `opts` over it and
    /// stamp it with `data-component`.
    pub(crate) fn create(
        kind: ComponentKind,
        tag: &str,
        base: Vec<Opt>,
        opts: impl IntoIterator<Item = Opt>,
    ) -> Result<Self> {
        crate::init();
        let root = document().create_element(tag)?;
        let mut acc = Opts::new(kind);
        acc.apply(base)?;
        acc.apply(opts)?;
        acc.write(&root);
        root.set_attribute(DATA_COMPONENT, kind.as_str());
        tracing::trace!(%kind, "created component");
        Ok(Self {
            kind,
            body: root.clone(),
            root,
        })
    }

    /// Rebuild over `root` if it is the root of a `kind` component.
    pub(crate) fn adopt(kind: ComponentKind, root: Element) -> Option<Self> {
        if root.get_attribute(DATA_COMPONENT).as_deref() != Some(kind.as_str()) {
            return None;
        }
        Some(Self {
            kind,
            body: root.clone(),
            root,
        })
    }

    pub(crate) fn with_body(mut self, body: Element) -> Self {
        self.body = body;
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn body(&self) -> &Element {
        &self.body
    }
}

impl fmt::Debug for Widget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Widget")
            .field("kind", &self.kind)
            .field("root", &self.root)
            .finish()
    }
}

pub(crate) fn document() -> Document {
    trellis_dom::window().document()
}

/// A bare element with `classes`, for the inner parts of a widget.
pub(crate) fn part(tag: &str, classes: &str) -> Result<Element> {
    let element = document().create_element(tag)?;
    if !classes.is_empty() {
        element.set_attribute("class", classes);
    }
    Ok(element)
}

/// The first child element of `parent` carrying `class`.
pub(crate) fn child_with_class(parent: &Element, class: &str) -> Option<Element> {
    parent
        .children()
        .into_iter()
        .find(|child| child.class_list().contains(class))
}

/// Something that can be attached to a component's body.
#[derive(Debug, Clone)]
pub enum Child {
    /// Becomes a text node.
    Text(String),
    /// Attached as is.
    Node(Node),
    /// Another component's root.
    Component { kind: ComponentKind, root: Element },
}

impl Child {
    /// The component kind, from the variant or the node's `data-component`.
    pub fn kind(&self) -> Option<ComponentKind> {
        match self {
            Child::Component { kind, .. } => Some(*kind),
            Child::Node(node) => node
                .as_element()?
                .get_attribute(DATA_COMPONENT)?
                .parse()
                .ok(),
            Child::Text(_) => None,
        }
    }

    /// The element behind this child, if any.
    pub fn element(&self) -> Option<Element> {
        match self {
            Child::Component { root, .. } => Some(root.clone()),
            Child::Node(node) => node.as_element(),
            Child::Text(_) => None,
        }
    }

    pub(crate) fn into_node(self, context: &Node) -> Result<Node> {
        Ok(match self {
            Child::Text(text) => {
                let doc = context.owner_document().unwrap_or_else(document);
                doc.create_text_node(&text).into()
            }
            Child::Node(node) => node,
            Child::Component { root, .. } => root.into(),
        })
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl From<Node> for Child {
    fn from(node: Node) -> Self {
        Child::Node(node)
    }
}

impl From<Element> for Child {
    fn from(element: Element) -> Self {
        Child::Node(element.into())
    }
}

impl From<&Element> for Child {
    fn from(element: &Element) -> Self {
        Child::Node(element.clone().into())
    }
}

impl<T: View> From<&T> for Child {
    fn from(view: &T) -> Self {
        Child::Component {
            kind: view.kind(),
            root: view.root().clone(),
        }
    }
}

/// Operations shared by every widget.
///
/// The `try_` methods report failures; the plain ones panic on them, for
/// call sites where a failure is a programming error.  All of them return
/// the receiver so calls chain.
pub trait View: trellis_dom::Component + Sized {
    fn widget(&self) -> &Widget;

    /// Rebuild the widget over its root element.
    fn from_element(element: Element) -> Option<Self>;

    fn kind(&self) -> ComponentKind {
        self.widget().kind()
    }

    fn root(&self) -> &Element {
        self.widget().root()
    }

    /// Where children go.
    fn body(&self) -> Element {
        self.widget().body().clone()
    }

    /// Vet a child before it is attached.  Strict containers refuse some
    /// children here; others adjust them.
    fn accept(&self, _child: &Child) -> Result<()> {
        Ok(())
    }

    fn try_append(&self, child: impl Into<Child>) -> Result<&Self> {
        let child = child.into();
        self.accept(&child)?;
        let body = self.body();
        body.append_child(&child.into_node(&body)?)?;
        Ok(self)
    }

    fn append(&self, child: impl Into<Child>) -> &Self {
        self.try_append(child)
            .unwrap_or_else(|err| panic!("cannot append to {}: {err}", self.kind()))
    }

    fn try_append_all<I, C>(&self, children: I) -> Result<&Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        for child in children {
            self.try_append(child)?;
        }
        Ok(self)
    }

    fn append_all<I, C>(&self, children: I) -> &Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.try_append_all(children)
            .unwrap_or_else(|err| panic!("cannot append to {}: {err}", self.kind()))
    }

    /// Attach `child` at the start of the body.
    fn try_insert(&self, child: impl Into<Child>) -> Result<&Self> {
        self.try_insert_all([child])
    }

    fn insert(&self, child: impl Into<Child>) -> &Self {
        self.try_insert(child)
            .unwrap_or_else(|err| panic!("cannot insert into {}: {err}", self.kind()))
    }

    /// Attach `children` at the start of the body, keeping their order.
    /// Nothing is attached unless every child is accepted.
    fn try_insert_all<I, C>(&self, children: I) -> Result<&Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let children: Vec<Child> = children.into_iter().map(Into::into).collect();
        for child in &children {
            self.accept(child)?;
        }
        let body = self.body();
        let mut previous: Option<Node> = None;
        for child in children {
            let node = child.into_node(&body)?;
            let reference = match &previous {
                Some(previous) => previous.next_sibling(),
                None => body.first_child(),
            };
            body.insert_before(&node, reference.as_ref())?;
            previous = Some(node);
        }
        Ok(self)
    }

    fn insert_all<I, C>(&self, children: I) -> &Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.try_insert_all(children)
            .unwrap_or_else(|err| panic!("cannot insert into {}: {err}", self.kind()))
    }

    /// Remove every child of the body.
    fn empty(&self) -> &Self {
        self.body().set_text_content("");
        self
    }

    /// Run `opts` against the current classes and attributes of the root.
    fn try_apply(&self, opts: impl IntoIterator<Item = Opt>) -> Result<&Self> {
        let mut acc = Opts::from_element(self.kind(), self.root());
        acc.apply(opts)?;
        acc.write(self.root());
        Ok(self)
    }

    fn apply(&self, opts: impl IntoIterator<Item = Opt>) -> &Self {
        self.try_apply(opts)
            .unwrap_or_else(|err| panic!("cannot apply options to {}: {err}", self.kind()))
    }

    /// Listen on the root.  `handler` gets the node the event was
    /// dispatched at, which may be any descendant.
    fn add_event_listener(&self, event: &str, mut handler: impl FnMut(&Node) + 'static) -> &Self {
        self.root().add_event_listener(event, move |event| {
            if let Some(target) = event.target() {
                handler(&target);
            }
        });
        self
    }
}

/// Refuse anything but components of `kind`.
pub(crate) fn expect_kind(owner: ComponentKind, child: &Child, kind: ComponentKind) -> Result<()> {
    if child.kind() == Some(kind) {
        Ok(())
    } else {
        Err(Error::invalid(format!("{owner} only accepts {kind} children, got {child:?}")))
    }
}

/// Implement [`trellis_dom::Component`] for a widget struct with a
/// `widget: Widget` field.
macro_rules! component {
    ($($ty:ty),+ $(,)?) => {$(
        impl trellis_dom::Component for $ty {
            fn name(&self) -> &str {
                self.widget.kind().as_str()
            }

            fn element(&self) -> &trellis_dom::Element {
                self.widget.root()
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    )+};
}

/// [`component!`] plus a [`View`] whose body is the root.
macro_rules! view {
    ($ty:ident, $kind:expr) => {
        $crate::component::component!($ty);

        impl $crate::View for $ty {
            fn widget(&self) -> &$crate::Widget {
                &self.widget
            }

            fn from_element(element: trellis_dom::Element) -> Option<Self> {
                $crate::Widget::adopt($kind, element).map(|widget| Self { widget })
            }
        }
    };
}

pub(crate) use {component, view};

#[cfg(test)]
mod tests {
    use crate::{with_attribute, with_class, with_id, Child, Para, Select, SelectOption, View};
    use std::collections::BTreeSet;
    use trellis_dom::testing::{class_set, tag_names};
    use trellis_dom::Component;

    #[test]
    fn append_mixes_text_nodes_and_components() {
        let inner = Para::new([with_id("inner")]);
        let doc = trellis_dom::window().document();
        let p = Para::new([]);
        p.append("one ")
            .append(&inner)
            .append(doc.create_element("br").unwrap());
        assert_eq!(tag_names(p.root()), ["p", "br"]);
        assert_eq!(p.root().child_nodes().len(), 3);
        assert_eq!(inner.root().parent_element().as_ref(), Some(p.root()));
    }

    #[test]
    fn insert_keeps_relative_order() {
        let p = Para::new([]);
        p.append("c").insert_all(["a", "b"]);
        assert_eq!(p.root().text_content(), "abc");
        p.insert("_");
        assert_eq!(p.root().text_content(), "_abc");
    }

    #[test]
    fn insert_can_move_the_first_child() {
        let doc = trellis_dom::window().document();
        let p = Para::new([]);
        let bold = doc.create_element("b").unwrap();
        p.append(&bold).append("z");
        p.insert_all(vec![Child::from(&bold), Child::from("a")]);
        assert_eq!(p.root().inner_html(), "<b></b>az");
    }

    #[test]
    fn refused_insert_leaves_the_body_alone() {
        let select = Select::new([]);
        select.append(&SelectOption::new("1", "One"));
        let err = select
            .try_insert_all(vec![Child::from(&SelectOption::new("0", "Zero")), Child::from("stray")])
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(select.root().children().len(), 1);
    }

    #[test]
    fn apply_cannot_restamp_the_kind() {
        let p = Para::new([]);
        p.apply([with_attribute("data-component", "alert")]);
        assert_eq!(p.root().get_attribute("data-component").as_deref(), Some("para"));
        assert_eq!(p.name(), "para");
    }

    #[test]
    fn empty_clears_the_body_only() {
        let p = Para::new([with_id("x")]);
        p.append("text").empty();
        assert!(!p.root().has_child_nodes());
        assert_eq!(p.id(), "x");
    }

    #[test]
    fn apply_keeps_existing_state() {
        let p = Para::new([with_class("lead"), with_id("p1")]);
        p.apply([with_class("small")]);
        let expected: BTreeSet<String> = ["lead", "small"].map(String::from).into();
        assert_eq!(class_set(p.root()), expected);
        assert_eq!(p.id(), "p1");
        assert_eq!(p.root().get_attribute("data-component").as_deref(), Some("para"));
    }

    #[test]
    fn listeners_get_the_target_node() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let p = Para::new([]);
        let inner = Para::new([with_id("inner")]);
        p.append(&inner);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        p.add_event_listener("click", move |node| {
            let owner = node.component().map(|c| c.id());
            log.borrow_mut().push(owner);
        });
        trellis_dom::testing::fire(inner.root(), "click");
        assert_eq!(*seen.borrow(), [Some("inner".to_string())]);
    }
}
