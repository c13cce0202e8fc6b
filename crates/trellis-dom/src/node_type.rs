use std::fmt;

/// The kind of a DOM node, numbered the way the host reports `nodeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
}

impl NodeType {
    /// Map a host `nodeType` number to a kind.
    ///
    /// Kinds the toolkit never creates (CDATA, processing instructions,
    /// fragments) have no variant and yield `None`.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(NodeType::Element),
            2 => Some(NodeType::Attribute),
            3 => Some(NodeType::Text),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            10 => Some(NodeType::DocumentType),
            _ => None,
        }
    }

    /// The host `nodeType` number.
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeType::Element => "element",
            NodeType::Attribute => "attribute",
            NodeType::Text => "text",
            NodeType::Comment => "comment",
            NodeType::Document => "document",
            NodeType::DocumentType => "document-type",
        };
        f.write_str(name)
    }
}

/// Where [`Element::insert_adjacent_element`](crate::Element::insert_adjacent_element)
/// places the new element relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the target, as a sibling.
    BeforeBegin,
    /// Inside the target, before its first child.
    AfterBegin,
    /// Inside the target, after its last child.
    BeforeEnd,
    /// After the target, as a sibling.
    AfterEnd,
}

impl InsertPosition {
    /// The keyword the host `insertAdjacentElement` expects.
    pub fn as_str(self) -> &'static str {
        match self {
            InsertPosition::BeforeBegin => "beforebegin",
            InsertPosition::AfterBegin => "afterbegin",
            InsertPosition::BeforeEnd => "beforeend",
            InsertPosition::AfterEnd => "afterend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for kind in [
            NodeType::Element,
            NodeType::Attribute,
            NodeType::Text,
            NodeType::Comment,
            NodeType::Document,
            NodeType::DocumentType,
        ] {
            assert_eq!(NodeType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(NodeType::from_code(11), None);
    }
}
