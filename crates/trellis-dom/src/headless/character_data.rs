use super::node::Node;
use std::fmt;
use std::ops::Deref;

macro_rules! character_data {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            node: Node,
        }

        impl $name {
            pub(crate) fn from_node(node: Node) -> Self {
                Self { node }
            }

            pub fn data(&self) -> String {
                self.node.0.data.borrow().clone()
            }

            pub fn set_data(&self, data: &str) {
                *self.node.0.data.borrow_mut() = data.to_string();
            }

            /// Length in UTF-16 code units, as the host reports it.
            pub fn length(&self) -> usize {
                self.node.0.data.borrow().encode_utf16().count()
            }
        }

        impl Deref for $name {
            type Target = Node;

            fn deref(&self) -> &Node {
                &self.node
            }
        }

        impl From<$name> for Node {
            fn from(value: $name) -> Node {
                value.node
            }
        }

        impl AsRef<Node> for $name {
            fn as_ref(&self) -> &Node {
                &self.node
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.data()).finish()
            }
        }
    };
}

character_data! {
    /// A text leaf.  Serialized with HTML escaping.
    Text
}

character_data! {
    /// A comment leaf.  Serialized verbatim as `<!--data-->`.
    Comment
}

#[cfg(test)]
mod tests {
    use crate::window;

    #[test]
    fn data_is_mutable() {
        let doc = window().document();
        let text = doc.create_text_node("héllo");
        assert_eq!(text.length(), 5);
        text.set_data("bye");
        assert_eq!(text.data(), "bye");
        assert_eq!(text.text_content(), "bye");

        let comment = doc.create_comment("note");
        assert_eq!(comment.node_name(), "#comment");
        assert_eq!(comment.data(), "note");
    }
}
