//! In-memory backend.
//!
//! Nodes live in an `Rc` tree: parents own their children and children keep
//! a weak link back.  Elements serialize to HTML through
//! [`Element::outer_html`] and [`Window::write`].  Listeners are stored and
//! only run on an explicit [`Element::dispatch_event`], since there is no
//! event loop.

mod character_data;
mod document;
mod element;
mod event;
mod serialize;
mod location;
mod node;
mod observer;
mod window;

pub use character_data::{Comment, Text};
pub use document::{Document, DocumentType};
pub use element::{Attr, ClassList, Element, Style};
pub use event::Event;
pub use location::Location;
pub use node::Node;
pub use observer::MutationObserver;
pub use window::{window, Window};
