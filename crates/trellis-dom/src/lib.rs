//! DOM abstraction for the **trellis** component toolkit.
//!
//! `trellis-dom` exposes one set of DOM types with two interchangeable
//! backends.  The default build is **headless**: documents live in memory,
//! listeners only run on explicit dispatch, and any subtree serializes to
//! HTML.  Enabling the `web` feature swaps in the **live** backend, which
//! wraps the browser's own objects through `web-sys`.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Window`] | Entry point: owns a [`Document`] and a [`Location`] |
//! | [`Node`] | Shared handle to any tree node; subtypes dereference to it |
//! | [`Element`] | Attributes, classes, queries, listeners and markup |
//! | [`Event`] | Event object passed to listeners |
//! | [`MutationObserver`] | Watches a subtree for changes (live backend only reports them) |
//! | [`Component`] | A UI object anchored on an element, found with [`Node::component`] |
//! | [`Error`] | Closed error taxonomy shared by both backends |
//!
//! # Backends
//!
//! | Build | Backend | Tree | Events |
//! |-------|---------|------|--------|
//! | default | headless | `Rc` tree in memory | synchronous [`Element::dispatch_event`] with bubbling |
//! | `--features web` | live | browser DOM | host event loop |
//!
//! Both backends export the same names with the same signatures, so widget
//! code compiles unchanged against either.
//!
//! # Quick example
//!
//! ```rust,ignore
//! use trellis_dom::{window, Result};
//!
//! fn greet() -> Result<String> {
//!     let doc = window().document();
//!     let p = doc.create_element("p")?;
//!     p.append_child(&doc.create_text_node("Hello"))?;
//!     doc.body().expect("body").append_child(&p)?;
//!     Ok(p.outer_html()) // "<p>Hello</p>"
//! }
//! ```

mod error;
pub mod html;
mod node_type;
mod observer;
mod options;
mod registry;
pub mod testing;
mod token_list;

#[cfg(not(feature = "web"))]
mod headless;
#[cfg(not(feature = "web"))]
pub use headless::*;

#[cfg(feature = "web")]
mod live;
#[cfg(feature = "web")]
pub use live::*;

pub use error::{Error, Result};
pub use node_type::{InsertPosition, NodeType};
pub use observer::MutationObserverInit;
pub use options::WindowOptions;
pub use registry::{is_registered, register_component, Component, ComponentFactory, DATA_COMPONENT};
pub use token_list::TokenList;
