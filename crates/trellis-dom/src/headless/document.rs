use super::node::{Node, NodeData};
use super::{Attr, Comment, Element, Text};
use crate::{Error, NodeType, Result};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Root of an in-memory tree.
///
/// A new HTML document always has the skeleton
/// `<!DOCTYPE html><html><head><meta></head><body></body></html>`.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    node: Node,
}

impl Document {
    pub(crate) fn from_node(node: Node) -> Self {
        Self { node }
    }

    /// Build an HTML document, with a `<title>` when `title` is given.
    pub(crate) fn new_html(title: Option<&str>) -> Result<Self> {
        let node = Node(Rc::new_cyclic(|weak| {
            NodeData::new(NodeType::Document, "#document".into(), weak.clone(), String::new())
        }));
        let doc = Self { node };

        let doctype = Node::create(NodeType::DocumentType, "html", doc.node.downgrade(), "");
        doc.node.append_child(&doctype)?;

        let html = doc.create_element("html")?;
        let head = doc.create_element("head")?;
        let meta = doc.create_element("meta")?;
        head.append_child(&meta)?;
        if let Some(title) = title {
            let element = doc.create_element("title")?;
            element.append_child(&doc.create_text_node(title))?;
            head.append_child(&element)?;
        }
        html.append_child(&head)?;
        let body = doc.create_element("body")?;
        html.append_child(&body)?;
        doc.node.append_child(&html)?;
        Ok(doc)
    }

    /// The `<html>` element.
    pub fn document_element(&self) -> Option<Element> {
        self.node.child_nodes().iter().find_map(Node::as_element)
    }

    pub fn head(&self) -> Option<Element> {
        self.section("HEAD")
    }

    pub fn body(&self) -> Option<Element> {
        self.section("BODY")
    }

    pub fn doctype(&self) -> Option<DocumentType> {
        self.node.child_nodes().iter().find_map(Node::as_document_type)
    }

    /// Text of the `<title>` in the head, or empty.
    pub fn title(&self) -> String {
        self.head()
            .and_then(|head| head.get_elements_by_tag_name("title").into_iter().next())
            .map(|title| title.text_content())
            .unwrap_or_default()
    }

    /// Focus does not exist without a browser.
    pub fn active_element(&self) -> Option<Element> {
        None
    }

    /// Mint a detached element.  The tag is stored upper case.
    pub fn create_element(&self, tag: &str) -> Result<Element> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(Error::invalid(format!("invalid tag name {tag:?}")));
        }
        let node = Node::create(NodeType::Element, tag.to_ascii_uppercase(), self.node.downgrade(), "");
        Ok(Element::from_node(node))
    }

    pub fn create_text_node(&self, data: &str) -> Text {
        Text::from_node(Node::create(NodeType::Text, "#text", self.node.downgrade(), data))
    }

    pub fn create_comment(&self, data: &str) -> Comment {
        Comment::from_node(Node::create(NodeType::Comment, "#comment", self.node.downgrade(), data))
    }

    /// Mint a detached attribute with an empty value.
    pub fn create_attribute(&self, name: &str) -> Result<Attr> {
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || "\"'<>/=".contains(c)) {
            return Err(Error::invalid(format!("invalid attribute name {name:?}")));
        }
        Ok(Attr::create(&self.node, &name.to_ascii_lowercase(), ""))
    }

    fn section(&self, tag: &str) -> Option<Element> {
        self.document_element()?
            .children()
            .into_iter()
            .find(|e| e.tag_name() == tag)
    }
}

impl Deref for Document {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.node
    }
}

impl From<Document> for Node {
    fn from(document: Document) -> Node {
        document.node
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document").field("title", &self.title()).finish()
    }
}

/// The `<!DOCTYPE html>` node.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentType {
    node: Node,
}

impl DocumentType {
    pub(crate) fn from_node(node: Node) -> Self {
        Self { node }
    }

    pub fn name(&self) -> String {
        self.node.node_name()
    }
}

impl Deref for DocumentType {
    type Target = Node;

    fn deref(&self) -> &Node {
        &self.node
    }
}

impl fmt::Debug for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DocumentType").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{NodeType, Window, WindowOptions};

    #[test]
    fn skeleton() {
        let window = Window::new();
        let doc = window.document();
        assert_eq!(doc.node_type(), NodeType::Document);
        assert_eq!(doc.doctype().map(|d| d.name()).as_deref(), Some("html"));
        assert_eq!(doc.document_element().map(|e| e.tag_name()).as_deref(), Some("HTML"));
        assert!(doc.head().is_some());
        assert!(doc.body().is_some());
        assert!(doc.active_element().is_none());
        assert_eq!(doc.title(), "");
        assert!(doc.owner_document().is_none());
    }

    #[test]
    fn title_from_options() {
        let window = Window::with_options(WindowOptions {
            title: Some("Dashboard".into()),
            ..WindowOptions::default()
        });
        assert_eq!(window.document().title(), "Dashboard");
    }

    #[test]
    fn created_nodes_are_owned_by_the_document() {
        let window = Window::new();
        let doc = window.document();
        let div = doc.create_element("div").unwrap();
        assert_eq!(div.owner_document().as_ref(), Some(&doc));
        assert!(div.parent_node().is_none());
    }

    #[test]
    fn rejects_bad_names() {
        let doc = Window::new().document();
        assert!(doc.create_element("").is_err());
        assert!(doc.create_element("a b").is_err());
        assert!(doc.create_element("<p>").is_err());
        assert!(doc.create_attribute("x=y").is_err());
        assert!(doc.create_attribute("data-id").is_ok());
    }
}
