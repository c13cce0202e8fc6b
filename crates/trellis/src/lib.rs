//! **trellis** -- Bootstrap-styled UI components over a portable DOM.
//!
//! This is the umbrella crate that re-exports everything you need to build a
//! trellis page from a single dependency:
//!
//! ```toml
//! [dependencies]
//! trellis = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`trellis_dom`] are available at the crate root
//!   ([`Window`], [`Document`], [`Element`], [`Node`], [`Event`],
//!   [`window`], etc.).
//! * The [`widgets`] module re-exports everything from [`trellis_widgets`]
//!   (alerts, navbars, tables, the router, every option).
//! * The [`prelude`] brings the widgets, the [`View`](prelude::View) trait
//!   and the most used DOM names into scope at once.
//!
//! # Backends
//!
//! The default build renders into an in-memory document that serializes to
//! HTML.  Build with `--features web` for `wasm32` targets to drive the
//! browser's document instead; the code does not change.
//!
//! # Quick start
//!
//! ```
//! use trellis::prelude::*;
//!
//! let card = Card::new([with_color(Color::Light)]);
//! card.heading("Welcome").unwrap();
//! let para = Para::new([]);
//! para.append("Hello, trellis!");
//! card.append(&para);
//!
//! let body = window().document().body().unwrap();
//! body.append_child(card.root()).unwrap();
//! assert!(body.inner_html().contains("Hello, trellis!"));
//! ```

pub use trellis_dom::*;

pub mod widgets {
    pub use trellis_widgets::*;
}

/// Widgets, options and the common DOM handles.
pub mod prelude {
    pub use trellis_dom::{window, Component, Document, Element, Event, Node, Window};
    pub use trellis_widgets::*;
}
