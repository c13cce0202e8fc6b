//! Bootstrap widgets for the **trellis** DOM.
//!
//! Every widget is a small configuration of one [`Widget`]: a root element,
//! a body element that receives children, and a `data-component` attribute
//! naming its [`ComponentKind`].  Widgets implement [`View`] for child
//! management and [`trellis_dom::Component`] so they can be recovered from
//! any node with [`Node::component`](trellis_dom::Node::component).
//!
//! Constructors take a list of options ([`Opt`]), each bound to the kinds it
//! makes sense for.  `new` panics on a misplaced option; `try_new` returns it
//! as an [`Error`].
//!
//! ```
//! use trellis_widgets::{with_color, Alert, Color, View};
//!
//! let alert = Alert::new([with_color(Color::Warning)]);
//! alert.append("Low disk space");
//! assert_eq!(
//!     alert.root().outer_html(),
//!     r#"<div class="alert alert-warning" role="alert" data-component="alert">Low disk space</div>"#,
//! );
//! ```
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`alert`] | Alerts, optionally dismissible |
//! | [`app`] | Application shell mounted on the document body |
//! | [`badge`] | Badges and pill badges |
//! | [`button`] | Buttons, outline and close buttons, button groups |
//! | [`card`] | Cards with header, body and footer |
//! | [`container`] | Fixed, fluid and responsive containers |
//! | [`form`] | Forms, inputs and labels |
//! | [`heading`] | `h1` to `h6` |
//! | [`icon`] | Bootstrap Icons glyphs |
//! | [`image`] | Images |
//! | [`link`] | Anchors |
//! | [`nav`] | Navs, navbars, items and dropdowns |
//! | [`offcanvas`] | Offcanvas panels |
//! | [`pagination`] | Pagination bars |
//! | [`router`] | Hash routes and the router that toggles them |
//! | [`rule`] | Horizontal and vertical rules |
//! | [`select`] | Selects and their options |
//! | [`table`] | Tables with row editing and optional row animation |
//! | [`text`] | Paragraphs and spans |
//! | [`toast`] | Toasts |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`component`] | [`Widget`], the [`View`] trait and [`Child`] |
//! | [`opts`] | The options accumulator and every option |
//! | [`kind`] | [`ComponentKind`] |
//! | [`color`] | [`Color`] |
//! | [`position`] | [`Position`], [`Size`], [`Breakpoint`], [`Theme`] and [`Cursor`] |

pub mod alert;
pub mod app;
pub mod badge;
pub mod button;
pub mod card;
pub mod color;
pub mod component;
pub mod container;
mod error;
pub mod form;
pub mod heading;
mod host;
pub mod icon;
pub mod image;
pub mod kind;
pub mod link;
pub mod nav;
pub mod offcanvas;
pub mod opts;
pub mod pagination;
pub mod position;
mod registry;
pub mod router;
pub mod rule;
pub mod select;
pub mod table;
pub mod text;
pub mod toast;

pub use alert::Alert;
pub use app::{App, AppOptions};
pub use badge::Badge;
pub use button::{Button, ButtonGroup};
pub use card::Card;
pub use color::Color;
pub use component::{Child, View, Widget};
pub use container::Container;
pub use error::{Error, Result};
pub use form::{Form, Input, Label};
pub use heading::Heading;
pub use icon::Icon;
pub use image::Image;
pub use kind::ComponentKind;
pub use link::Link;
pub use nav::{Nav, NavBar, NavDivider, NavDropdown, NavDropdownHeader, NavItem, NavSpacer};
pub use offcanvas::Offcanvas;
pub use opts::{
    with_action, with_animation, with_aria_label, with_attribute, with_background, with_border,
    with_bordered, with_borderless, with_breakpoint, with_class, with_classes, with_color,
    with_cursor, with_disabled, with_flex, with_group_divider, with_hover, with_id, with_margin,
    with_method, with_multiple, with_name, with_padding, with_pills, with_placeholder,
    with_position, with_readonly, with_required, with_responsive, with_role, with_scroll,
    with_selected, with_size, with_static_backdrop, with_striped_columns, with_striped_rows,
    with_tabs, with_text_align, with_theme, with_timeout, with_toast_position, with_underline,
    with_value, without_animation, without_backdrop, without_class, without_keyboard,
    without_validation, Opt, Opts,
};
pub use pagination::{Pagination, PaginationItem};
pub use position::{Breakpoint, Cursor, Position, Size, Theme};
pub use registry::init;
pub use router::{Route, Router};
pub use rule::Rule;
pub use select::{Select, SelectOption};
pub use table::{Row, Table};
pub use text::{Para, Span};
pub use toast::Toast;
