use super::node::Node;
use super::{js_error, Attr, Comment, Element, Text};
use crate::Result;
use std::fmt;
use std::ops::Deref;

/// The page's document.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    node: Node,
    raw: web_sys::Document,
}

impl Document {
    pub(crate) fn from_raw(raw: web_sys::Document) -> Self {
        Self {
            node: Node::from_raw(raw.clone().into()),
            raw,
        }
    }

    pub fn document_element(&self) -> Option<Element> {
        self.raw.document_element().map(Element::from_raw)
    }

    pub fn head(&self) -> Option<Element> {
        self.raw
            .head()
            .map(|head| Element::from_raw(web_sys::Element::from(head)))
    }

    pub fn body(&self) -> Option<Element> {
        self.raw
            .body()
            .map(|body| Element::from_raw(web_sys::Element::from(body)))
    }

    pub fn doctype(&self) -> Option<DocumentType> {
        self.raw.doctype().map(DocumentType::from_raw)
    }

    pub fn title(&self) -> String {
        self.raw.title()
    }

    pub fn active_element(&self) -> Option<Element> {
        self.raw.active_element().map(Element::from_raw)
    }

    pub fn create_element(&self, tag: &str) -> Result<Element> {
        self.raw
            .create_element(tag)
            .map(Element::from_raw)
            .map_err(js_error)
    }

    pub fn create_text_node(&self, data: &str) -> Text {
        Text::from_raw(self.raw.create_text_node(data))
    }

    pub fn create_comment(&self, data: &str) -> Comment {
        Comment::from_raw(self.raw.create_comment(data))
    }

    pub fn create_attribute(&self, name: &str) -> Result<Attr> {
        self.raw
            .create_attribute(name)
            .map(Attr::from_raw)
            .map_err(js_error)
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

#[derive(Clone, PartialEq, Eq)]
pub struct DocumentType {
    node: Node,
    raw: web_sys::DocumentType,
}

impl DocumentType {
    pub(crate) fn from_raw(raw: web_sys::DocumentType) -> Self {
        Self {
            node: Node::from_raw(raw.clone().into()),
            raw,
        }
    }

    pub fn name(&self) -> String {
        self.raw.name()
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
