use super::node::Node;
use std::fmt;
use std::ops::Deref;

macro_rules! character_data {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name {
            node: Node,
            raw: web_sys::$name,
        }

        impl $name {
            pub(crate) fn from_raw(raw: web_sys::$name) -> Self {
                Self {
                    node: Node::from_raw(raw.clone().into()),
                    raw,
                }
            }

            pub fn data(&self) -> String {
                self.raw.data()
            }

            pub fn set_data(&self, data: &str) {
                self.raw.set_data(data);
            }

            pub fn length(&self) -> usize {
                self.raw.length() as usize
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
    /// A host text node.
    Text
}

character_data! {
    /// A host comment node.
    Comment
}
