//! Options configure a component's classes and attributes.
//!
//! An [`Opt`] is a boxed function over an [`Opts`] accumulator.  The
//! accumulator knows the component kind, so options that only make sense on
//! some kinds refuse the others with [`Error::InvalidOption`].  Options that
//! belong to a group of mutually exclusive classes clear the group before
//! adding their own token.
//!
//! ```
//! use trellis_widgets::{with_color, with_margin, Alert, Color, Position, View};
//!
//! let alert = Alert::new([with_color(Color::Warning), with_margin(Position::TOP, 3)]);
//! assert!(alert.root().class_list().contains("alert-warning"));
//! assert!(alert.root().class_list().contains("mt-3"));
//! ```

use crate::{Breakpoint, Color, ComponentKind, Cursor, Error, Position, Result, Size, Theme};
use std::time::Duration;
use trellis_dom::{Element, TokenList, DATA_COMPONENT};

/// A component option.
pub type Opt = Box<dyn Fn(&mut Opts) -> Result<()>>;

/// Accumulated classes and attributes for one component kind.
///
/// Attributes keep their first-write position; a later write to the same
/// name replaces the value in place.
#[derive(Debug, Clone)]
pub struct Opts {
    kind: ComponentKind,
    classes: TokenList,
    attributes: Vec<(String, String)>,
    removed: Vec<String>,
}

impl Opts {
    pub fn new(kind: ComponentKind) -> Self {
        Self {
            kind,
            classes: TokenList::new(),
            attributes: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Seed the accumulator from an existing root element.
    pub(crate) fn from_element(kind: ComponentKind, element: &Element) -> Self {
        let mut opts = Self::new(kind);
        opts.classes = TokenList::parse(&element.class_name());
        opts.attributes = element
            .attributes()
            .into_iter()
            .map(|attr| (attr.name(), attr.value()))
            .filter(|(name, _)| name != "class" && name != DATA_COMPONENT)
            .collect();
        opts
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn classes(&self) -> &TokenList {
        &self.classes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn add_class(&mut self, class: &str) {
        self.classes.add(class);
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    pub fn remove_classes_matching(&mut self, predicate: impl FnMut(&str) -> bool) {
        self.classes.remove_matching(predicate);
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.removed.retain(|removed| removed != name);
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, current)) => *current = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|(key, _)| key != name);
        if !self.removed.iter().any(|removed| removed == name) {
            self.removed.push(name.to_string());
        }
    }

    /// Run `opts` in order, stopping at the first failure.
    pub fn apply(&mut self, opts: impl IntoIterator<Item = Opt>) -> Result<()> {
        opts.into_iter().try_for_each(|opt| opt(self))
    }

    /// Fail unless this accumulator is for one of `expected`.
    pub fn require(&self, option: &'static str, expected: &'static [ComponentKind]) -> Result<()> {
        if expected.contains(&self.kind) {
            Ok(())
        } else {
            Err(Error::InvalidOption {
                option,
                kind: self.kind,
                expected,
            })
        }
    }

    /// Write the classes, then the attributes, onto `element`.  The
    /// `data-component` stamp belongs to the widget and is never written.
    pub(crate) fn write(&self, element: &Element) {
        if self.classes.is_empty() {
            element.remove_attribute("class");
        } else {
            element.set_attribute("class", &self.classes.value());
        }
        for name in self.removed.iter().filter(|name| *name != DATA_COMPONENT) {
            element.remove_attribute(name);
        }
        for (name, value) in &self.attributes {
            if name == DATA_COMPONENT {
                tracing::debug!(kind = %self.kind, value, "ignoring data-component option");
                continue;
            }
            element.set_attribute(name, value);
        }
    }
}

fn opt(f: impl Fn(&mut Opts) -> Result<()> + 'static) -> Opt {
    Box::new(f)
}

fn set(name: &'static str, value: impl Into<String>) -> Opt {
    let value = value.into();
    opt(move |o| {
        o.set_attribute(name, &value);
        Ok(())
    })
}

fn flag(
    option: &'static str,
    expected: &'static [ComponentKind],
    name: &'static str,
    value: &'static str,
) -> Opt {
    opt(move |o| {
        o.require(option, expected)?;
        o.set_attribute(name, value);
        Ok(())
    })
}

/// Swap `class` in for any other member of `group`.
fn exclusive(
    option: &'static str,
    expected: &'static [ComponentKind],
    group: &'static [&'static str],
    class: &'static str,
) -> Opt {
    opt(move |o| {
        o.require(option, expected)?;
        o.remove_classes_matching(|c| group.contains(&c));
        o.add_class(class);
        Ok(())
    })
}

// general

/// Add each whitespace-separated class in `class`.
pub fn with_class(class: impl Into<String>) -> Opt {
    let class = class.into();
    opt(move |o| {
        o.add_class(&class);
        Ok(())
    })
}

pub fn with_classes<I, S>(classes: I) -> Opt
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
    opt(move |o| {
        classes.iter().for_each(|class| o.add_class(class));
        Ok(())
    })
}

pub fn without_class(class: impl Into<String>) -> Opt {
    let class = class.into();
    opt(move |o| {
        o.remove_class(&class);
        Ok(())
    })
}

/// Set an arbitrary attribute.  An empty name is ignored.
pub fn with_attribute(name: impl Into<String>, value: impl Into<String>) -> Opt {
    let (name, value) = (name.into(), value.into());
    opt(move |o| {
        if !name.is_empty() {
            o.set_attribute(&name, &value);
        }
        Ok(())
    })
}

pub fn with_id(id: impl Into<String>) -> Opt {
    set("id", id)
}

pub fn with_name(name: impl Into<String>) -> Opt {
    set("name", name)
}

/// Set `role`, unless `role` is empty.
pub fn with_role(role: impl Into<String>) -> Opt {
    let role = role.into();
    opt(move |o| {
        if !role.is_empty() {
            o.set_attribute("role", &role);
        }
        Ok(())
    })
}

/// Set `aria-label`, unless `label` is empty.
pub fn with_aria_label(label: impl Into<String>) -> Opt {
    let label = label.into();
    opt(move |o| {
        if !label.is_empty() {
            o.set_attribute("aria-label", &label);
        }
        Ok(())
    })
}

// colour

const COLOR_KINDS: &[ComponentKind] = &[
    ComponentKind::Alert,
    ComponentKind::Badge,
    ComponentKind::Button,
    ComponentKind::Card,
    ComponentKind::Icon,
    ComponentKind::Link,
    ComponentKind::NavBar,
    ComponentKind::Table,
    ComponentKind::Toast,
];

fn color_prefix(kind: ComponentKind) -> Option<&'static str> {
    Some(match kind {
        ComponentKind::Badge | ComponentKind::Card | ComponentKind::Toast => "text-bg",
        ComponentKind::Alert => "alert",
        ComponentKind::Button => "btn",
        ComponentKind::Icon => "text",
        ComponentKind::Link => "link",
        ComponentKind::Table => "table",
        ComponentKind::NavBar => "bg",
        _ => return None,
    })
}

fn swap_color(o: &mut Opts, prefix: &str, color: Color) {
    o.remove_classes_matching(|c| Color::is_class(c, prefix));
    if let Some(class) = color.class(prefix) {
        o.add_class(&class);
    }
}

/// The kind's contextual colour: `alert-*` on alerts, `btn-*` on buttons,
/// `text-bg-*` on badges, cards and toasts and so on.
pub fn with_color(color: Color) -> Opt {
    opt(move |o| {
        let prefix = color_prefix(o.kind()).ok_or(Error::InvalidOption {
            option: "with_color",
            kind: o.kind(),
            expected: COLOR_KINDS,
        })?;
        swap_color(o, prefix, color);
        Ok(())
    })
}

/// `bg-<color>` on any kind.
pub fn with_background(color: Color) -> Opt {
    opt(move |o| {
        swap_color(o, "bg", color);
        Ok(())
    })
}

const BORDER_KINDS: &[ComponentKind] = &[
    ComponentKind::Alert,
    ComponentKind::Badge,
    ComponentKind::ButtonGroup,
    ComponentKind::Container,
    ComponentKind::Heading,
];

/// Borders on the sides in `position`, optionally coloured.
pub fn with_border(position: Position, color: Option<Color>) -> Opt {
    opt(move |o| {
        o.require("with_border", BORDER_KINDS)?;
        o.remove_classes_matching(|c| {
            matches!(c, "border" | "border-top" | "border-bottom" | "border-start" | "border-end")
                || Color::is_class(c, "border")
        });
        if position.contains(Position::ALL) {
            o.add_class("border");
        } else {
            for (side, _) in position.sides() {
                if let Some(name) = side.name() {
                    o.add_class(&format!("border-{name}"));
                }
            }
        }
        if let Some(color) = color {
            swap_color(o, "border", color);
        }
        Ok(())
    })
}

// layout

const SIZE_KINDS: &[ComponentKind] = &[
    ComponentKind::Button,
    ComponentKind::ButtonGroup,
    ComponentKind::Table,
];

pub fn with_size(size: Size) -> Opt {
    opt(move |o| {
        o.require("with_size", SIZE_KINDS)?;
        let (small, large) = match o.kind() {
            ComponentKind::Button => ("btn-sm", Some("btn-lg")),
            ComponentKind::ButtonGroup => ("btn-group-sm", Some("btn-group-lg")),
            _ => ("table-sm", None),
        };
        o.remove_classes_matching(|c| c == small || Some(c) == large);
        match size {
            Size::Default => {}
            Size::Small => o.add_class(small),
            Size::Large => match large {
                Some(large) => o.add_class(large),
                None => return Err(Error::invalid(format!("{} has no large size", o.kind()))),
            },
        }
        Ok(())
    })
}

/// Shortest spacing class set for `position`: `m-3`, `my-2`, `mx-n1`,
/// `mt-1 me-1` and so on.
fn spacing(prefix: char, position: Position, size: i8) -> Vec<String> {
    let n = if size < 0 {
        format!("n{}", size.unsigned_abs())
    } else {
        size.to_string()
    };
    if position.contains(Position::ALL) {
        return vec![format!("{prefix}-{n}")];
    }
    let mut classes = Vec::new();
    let mut rest = position;
    let vertical = Position::TOP | Position::BOTTOM;
    let horizontal = Position::START | Position::END;
    if rest.contains(vertical) {
        classes.push(format!("{prefix}y-{n}"));
        rest = rest.difference(vertical);
    }
    if rest.contains(horizontal) {
        classes.push(format!("{prefix}x-{n}"));
        rest = rest.difference(horizontal);
    }
    classes.extend(rest.sides().map(|(_, side)| format!("{prefix}{side}-{n}")));
    classes
}

/// Margin on the sides in `position`.  Negative sizes give `-n` classes.
pub fn with_margin(position: Position, size: i8) -> Opt {
    opt(move |o| {
        spacing('m', position, size)
            .iter()
            .for_each(|class| o.add_class(class));
        Ok(())
    })
}

/// Padding on the sides in `position`.  `size` must be positive.
pub fn with_padding(position: Position, size: i8) -> Opt {
    opt(move |o| {
        if size <= 0 {
            return Err(Error::invalid(format!("padding must be positive, got {size}")));
        }
        spacing('p', position, size)
            .iter()
            .for_each(|class| o.add_class(class));
        Ok(())
    })
}

/// The container's responsive width.
pub fn with_breakpoint(breakpoint: Breakpoint) -> Opt {
    opt(move |o| {
        o.require("with_breakpoint", &[ComponentKind::Container])?;
        o.remove_classes_matching(|c| c == "container" || c.starts_with("container-"));
        match breakpoint.suffix() {
            Some(suffix) => o.add_class(&format!("container-{suffix}")),
            None => o.add_class("container"),
        }
        Ok(())
    })
}

/// `table-responsive[-bp]` on tables, `navbar-expand[-bp]` on navbars.
pub fn with_responsive(breakpoint: Breakpoint) -> Opt {
    opt(move |o| {
        o.require("with_responsive", &[ComponentKind::Table, ComponentKind::NavBar])?;
        let base = match o.kind() {
            ComponentKind::Table => "table-responsive",
            _ => "navbar-expand",
        };
        o.remove_classes_matching(|c| c == base || c.starts_with(&format!("{base}-")));
        match breakpoint {
            Breakpoint::Default if o.kind() == ComponentKind::NavBar => {}
            Breakpoint::Default | Breakpoint::Fluid => o.add_class(base),
            _ => {
                if let Some(suffix) = breakpoint.suffix() {
                    o.add_class(&format!("{base}-{suffix}"));
                }
            }
        }
        Ok(())
    })
}

/// `d-flex` with alignment and direction taken from `position`.
pub fn with_flex(position: Position) -> Opt {
    opt(move |o| {
        o.add_class("d-flex");
        let has = |p| position.contains(p);
        if has(Position::CENTER) || has(Position::MIDDLE) {
            o.add_class("align-items-center");
        } else if (has(Position::START) && !has(Position::END))
            || (has(Position::TOP) && !has(Position::BOTTOM))
        {
            o.add_class("align-items-start");
        } else if (has(Position::END) && !has(Position::START))
            || (has(Position::BOTTOM) && !has(Position::TOP))
        {
            o.add_class("align-items-end");
        }
        if has(Position::START | Position::END) {
            o.add_class("flex-row");
        }
        if has(Position::TOP | Position::BOTTOM) {
            o.add_class("flex-column");
        }
        Ok(())
    })
}

pub fn with_text_align(position: Position) -> Opt {
    opt(move |o| {
        for (flag, class) in [
            (Position::CENTER, "text-center"),
            (Position::START, "text-start"),
            (Position::END, "text-end"),
        ] {
            if position.contains(flag) {
                o.add_class(class);
            }
        }
        Ok(())
    })
}

pub fn with_cursor(cursor: Cursor) -> Opt {
    opt(move |o| {
        if cursor != Cursor::Auto {
            o.set_attribute("style", &format!("cursor: {cursor};"));
        }
        Ok(())
    })
}

/// Sets `data-bs-theme`.  Dark also adds `text-bg-dark`.
pub fn with_theme(theme: Theme) -> Opt {
    opt(move |o| {
        o.set_attribute("data-bs-theme", theme.as_str());
        match theme {
            Theme::Dark => o.add_class("text-bg-dark"),
            Theme::Light => o.remove_class("text-bg-dark"),
        }
        Ok(())
    })
}

/// The edge an offcanvas slides in from.
pub fn with_position(position: Position) -> Opt {
    opt(move |o| {
        o.require("with_position", &[ComponentKind::Offcanvas])?;
        let side = [Position::START, Position::END, Position::TOP, Position::BOTTOM]
            .into_iter()
            .find(|side| *side == position)
            .and_then(Position::name)
            .ok_or_else(|| Error::invalid(format!("offcanvas needs a single side, got {position:?}")))?;
        o.remove_classes_matching(|c| {
            matches!(c, "offcanvas-start" | "offcanvas-end" | "offcanvas-top" | "offcanvas-bottom")
        });
        o.add_class(&format!("offcanvas-{side}"));
        Ok(())
    })
}

// nav

const NAV_STYLES: &[&str] = &["nav-tabs", "nav-pills", "nav-underline"];

pub fn with_tabs() -> Opt {
    exclusive("with_tabs", &[ComponentKind::Nav], NAV_STYLES, "nav-tabs")
}

pub fn with_pills() -> Opt {
    exclusive("with_pills", &[ComponentKind::Nav], NAV_STYLES, "nav-pills")
}

pub fn with_underline() -> Opt {
    exclusive("with_underline", &[ComponentKind::Nav], NAV_STYLES, "nav-underline")
}

// table

const TABLE: &[ComponentKind] = &[ComponentKind::Table];
const STRIPES: &[&str] = &["table-striped", "table-striped-columns"];
const BORDERS: &[&str] = &["table-bordered", "table-borderless"];

/// Class marking a table whose row operations animate.
pub(crate) const TABLE_ANIMATED: &str = "table-animated";

pub fn with_striped_rows() -> Opt {
    exclusive("with_striped_rows", TABLE, STRIPES, "table-striped")
}

pub fn with_striped_columns() -> Opt {
    exclusive("with_striped_columns", TABLE, STRIPES, "table-striped-columns")
}

pub fn with_hover() -> Opt {
    exclusive("with_hover", TABLE, &[], "table-hover")
}

pub fn with_bordered() -> Opt {
    exclusive("with_bordered", TABLE, BORDERS, "table-bordered")
}

pub fn with_borderless() -> Opt {
    exclusive("with_borderless", TABLE, BORDERS, "table-borderless")
}

pub fn with_group_divider() -> Opt {
    exclusive("with_group_divider", TABLE, &[], "table-group-divider")
}

/// Fade rows in on insert and out on delete or replace.
pub fn with_animation() -> Opt {
    exclusive("with_animation", TABLE, &[], TABLE_ANIMATED)
}

// offcanvas

const OFFCANVAS: &[ComponentKind] = &[ComponentKind::Offcanvas];

/// Keep the page scrollable while the offcanvas is open.
pub fn with_scroll() -> Opt {
    flag("with_scroll", OFFCANVAS, "data-bs-scroll", "true")
}

/// A backdrop that does not close the offcanvas when clicked.
pub fn with_static_backdrop() -> Opt {
    flag("with_static_backdrop", OFFCANVAS, "data-bs-backdrop", "static")
}

pub fn without_backdrop() -> Opt {
    flag("without_backdrop", OFFCANVAS, "data-bs-backdrop", "false")
}

/// Do not close on escape.
pub fn without_keyboard() -> Opt {
    flag("without_keyboard", OFFCANVAS, "data-bs-keyboard", "false")
}

// toast

const TOAST: &[ComponentKind] = &[ComponentKind::Toast];

/// Pin the toast to a corner of the viewport.
pub fn with_toast_position(position: Position) -> Opt {
    opt(move |o| {
        o.require("with_toast_position", TOAST)?;
        o.remove_classes_matching(|c| {
            matches!(c, "position-fixed" | "top-0" | "bottom-0" | "start-0" | "end-0")
        });
        o.add_class("position-fixed");
        if position.contains(Position::TOP) {
            o.add_class("top-0");
        } else if position.contains(Position::BOTTOM) {
            o.add_class("bottom-0");
        }
        if position.contains(Position::START) {
            o.add_class("start-0");
        } else if position.contains(Position::END) {
            o.add_class("end-0");
        }
        Ok(())
    })
}

pub fn without_animation() -> Opt {
    flag("without_animation", TOAST, "data-bs-animation", "false")
}

/// Hide the toast after `timeout`.  A zero timeout disables autohide.
pub fn with_timeout(timeout: Duration) -> Opt {
    opt(move |o| {
        o.require("with_timeout", TOAST)?;
        let millis = timeout.as_millis();
        if millis == 0 {
            o.set_attribute("data-bs-autohide", "false");
            o.remove_attribute("data-bs-delay");
        } else {
            o.set_attribute("data-bs-autohide", "true");
            o.set_attribute("data-bs-delay", &millis.to_string());
        }
        Ok(())
    })
}

// forms

const INPUT: &[ComponentKind] = &[ComponentKind::Input];
const FORM: &[ComponentKind] = &[ComponentKind::Form];

pub fn with_placeholder(text: impl Into<String>) -> Opt {
    let text = text.into();
    opt(move |o| {
        o.require("with_placeholder", INPUT)?;
        o.set_attribute("placeholder", &text);
        Ok(())
    })
}

pub fn with_value(value: impl Into<String>) -> Opt {
    let value = value.into();
    opt(move |o| {
        o.require(
            "with_value",
            &[ComponentKind::Input, ComponentKind::Option, ComponentKind::Button],
        )?;
        o.set_attribute("value", &value);
        Ok(())
    })
}

pub fn with_readonly() -> Opt {
    flag("with_readonly", INPUT, "readonly", "")
}

pub fn with_disabled() -> Opt {
    flag(
        "with_disabled",
        &[
            ComponentKind::Button,
            ComponentKind::Input,
            ComponentKind::Option,
            ComponentKind::Select,
        ],
        "disabled",
        "",
    )
}

pub fn with_required() -> Opt {
    flag(
        "with_required",
        &[ComponentKind::Input, ComponentKind::Select],
        "required",
        "",
    )
}

pub fn with_multiple() -> Opt {
    flag(
        "with_multiple",
        &[ComponentKind::Input, ComponentKind::Select],
        "multiple",
        "",
    )
}

pub fn with_selected() -> Opt {
    flag("with_selected", &[ComponentKind::Option], "selected", "")
}

pub fn with_action(url: impl Into<String>) -> Opt {
    let url = url.into();
    opt(move |o| {
        o.require("with_action", FORM)?;
        o.set_attribute("action", &url);
        Ok(())
    })
}

pub fn with_method(method: impl Into<String>) -> Opt {
    let method = method.into();
    opt(move |o| {
        o.require("with_method", FORM)?;
        o.set_attribute("method", &method);
        Ok(())
    })
}

/// Leave validation to the browser instead of Bootstrap's styles.
pub fn without_validation() -> Opt {
    opt(|o| {
        o.require("without_validation", FORM)?;
        o.remove_class("needs-validation");
        o.remove_attribute("novalidate");
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(kind: ComponentKind, opts: impl IntoIterator<Item = Opt>) -> Result<Opts> {
        let mut o = Opts::new(kind);
        o.apply(opts)?;
        Ok(o)
    }

    fn classes(o: &Opts) -> Vec<&str> {
        o.classes().iter().collect()
    }

    #[test]
    fn color_replaces_previous_color() {
        let o = build(
            ComponentKind::Button,
            [with_color(Color::Primary), with_color(Color::Danger)],
        )
        .unwrap();
        assert_eq!(classes(&o), ["btn-danger"]);

        let o = build(ComponentKind::Badge, [with_color(Color::Info)]).unwrap();
        assert_eq!(classes(&o), ["text-bg-info"]);

        let o = build(ComponentKind::Alert, [with_color(Color::Transparent)]).unwrap();
        assert!(o.classes().is_empty());
    }

    #[test]
    fn color_refuses_unsupported_kinds() {
        let err = build(ComponentKind::Container, [with_color(Color::Primary)]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOption { option: "with_color", kind: ComponentKind::Container, .. }
        ));
    }

    #[test]
    fn margin_uses_shortest_classes() {
        assert_eq!(spacing('m', Position::ALL, 3), ["m-3"]);
        assert_eq!(spacing('m', Position::TOP | Position::BOTTOM, 2), ["my-2"]);
        assert_eq!(spacing('m', Position::START | Position::END, -1), ["mx-n1"]);
        assert_eq!(
            spacing('m', Position::TOP | Position::BOTTOM | Position::END, 1),
            ["my-1", "me-1"]
        );
        assert_eq!(spacing('p', Position::START | Position::TOP, 4), ["pt-4", "ps-4"]);
    }

    #[test]
    fn padding_must_be_positive() {
        let err = build(ComponentKind::Para, [with_padding(Position::ALL, 0)]).unwrap_err();
        assert!(err.is_invalid_parameter());
        let o = build(ComponentKind::Para, [with_padding(Position::ALL, 2)]).unwrap();
        assert_eq!(classes(&o), ["p-2"]);
    }

    #[test]
    fn border_sides_and_color() {
        let o = build(
            ComponentKind::Heading,
            [
                with_border(Position::ALL, None),
                with_border(Position::TOP | Position::END, Some(Color::Success)),
            ],
        )
        .unwrap();
        assert_eq!(classes(&o), ["border-top", "border-end", "border-success"]);
        assert!(build(ComponentKind::Button, [with_border(Position::ALL, None)]).is_err());
    }

    #[test]
    fn sizes_per_kind() {
        let o = build(ComponentKind::Button, [with_size(Size::Large)]).unwrap();
        assert_eq!(classes(&o), ["btn-lg"]);
        let o = build(ComponentKind::ButtonGroup, [with_size(Size::Small)]).unwrap();
        assert_eq!(classes(&o), ["btn-group-sm"]);
        let o = build(ComponentKind::Table, [with_size(Size::Small)]).unwrap();
        assert_eq!(classes(&o), ["table-sm"]);

        let err = build(ComponentKind::Table, [with_size(Size::Large)]).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(build(ComponentKind::Link, [with_size(Size::Small)]).is_err());
    }

    #[test]
    fn breakpoint_is_container_only() {
        let o = build(
            ComponentKind::Container,
            [with_class("container"), with_breakpoint(Breakpoint::Fluid)],
        )
        .unwrap();
        assert_eq!(classes(&o), ["container-fluid"]);
        assert!(build(ComponentKind::Button, [with_breakpoint(Breakpoint::Large)]).is_err());
    }

    #[test]
    fn responsive_per_kind() {
        let o = build(ComponentKind::Table, [with_responsive(Breakpoint::Medium)]).unwrap();
        assert_eq!(classes(&o), ["table-responsive-md"]);
        let o = build(ComponentKind::Table, [with_responsive(Breakpoint::Default)]).unwrap();
        assert_eq!(classes(&o), ["table-responsive"]);
        let o = build(ComponentKind::NavBar, [with_responsive(Breakpoint::Large)]).unwrap();
        assert_eq!(classes(&o), ["navbar-expand-lg"]);
        let o = build(ComponentKind::NavBar, [with_responsive(Breakpoint::Default)]).unwrap();
        assert!(o.classes().is_empty());
    }

    #[test]
    fn flex_alignment_and_direction() {
        let o = build(ComponentKind::Container, [with_flex(Position::CENTER)]).unwrap();
        assert_eq!(classes(&o), ["d-flex", "align-items-center"]);
        let o = build(ComponentKind::Container, [with_flex(Position::TOP | Position::BOTTOM)]).unwrap();
        assert_eq!(classes(&o), ["d-flex", "flex-column"]);
        let o = build(ComponentKind::Container, [with_flex(Position::END)]).unwrap();
        assert_eq!(classes(&o), ["d-flex", "align-items-end"]);
    }

    #[test]
    fn attribute_helpers_skip_empty_values() {
        let o = build(
            ComponentKind::Span,
            [with_role(""), with_aria_label(""), with_attribute("", "x"), with_id("a")],
        )
        .unwrap();
        assert_eq!(o.attribute("role"), None);
        assert_eq!(o.attribute("aria-label"), None);
        assert_eq!(o.attribute("id"), Some("a"));
    }

    #[test]
    fn later_attribute_writes_win() {
        let o = build(ComponentKind::Span, [with_id("a"), with_name("n"), with_id("b")]).unwrap();
        assert_eq!(o.attribute("id"), Some("b"));
        assert_eq!(o.attributes, [("id".to_string(), "b".to_string()), ("name".into(), "n".into())]);
    }

    #[test]
    fn table_styles_are_exclusive() {
        let o = build(
            ComponentKind::Table,
            [with_striped_columns(), with_striped_rows(), with_bordered(), with_borderless()],
        )
        .unwrap();
        assert_eq!(classes(&o), ["table-striped", "table-borderless"]);
        assert!(build(ComponentKind::Card, [with_hover()]).is_err());
    }

    #[test]
    fn nav_styles_are_nav_only() {
        let o = build(ComponentKind::Nav, [with_tabs(), with_pills()]).unwrap();
        assert_eq!(classes(&o), ["nav-pills"]);
        assert!(build(ComponentKind::NavBar, [with_underline()]).is_err());
    }

    #[test]
    fn toast_timeout() {
        let o = build(ComponentKind::Toast, [with_timeout(Duration::from_secs(2))]).unwrap();
        assert_eq!(o.attribute("data-bs-autohide"), Some("true"));
        assert_eq!(o.attribute("data-bs-delay"), Some("2000"));
        let o = build(
            ComponentKind::Toast,
            [with_timeout(Duration::from_secs(2)), with_timeout(Duration::ZERO)],
        )
        .unwrap();
        assert_eq!(o.attribute("data-bs-autohide"), Some("false"));
        assert_eq!(o.attribute("data-bs-delay"), None);
    }

    #[test]
    fn toast_position_corners() {
        let o = build(
            ComponentKind::Toast,
            [with_toast_position(Position::BOTTOM | Position::END)],
        )
        .unwrap();
        assert_eq!(classes(&o), ["position-fixed", "bottom-0", "end-0"]);
    }

    #[test]
    fn offcanvas_side() {
        let o = build(
            ComponentKind::Offcanvas,
            [with_position(Position::START), with_position(Position::BOTTOM)],
        )
        .unwrap();
        assert_eq!(classes(&o), ["offcanvas-bottom"]);
        assert!(build(ComponentKind::Offcanvas, [with_position(Position::ALL)]).is_err());
    }

    #[test]
    fn theme_and_cursor() {
        let o = build(ComponentKind::Card, [with_theme(Theme::Dark), with_cursor(Cursor::Pointer)]).unwrap();
        assert_eq!(o.attribute("data-bs-theme"), Some("dark"));
        assert_eq!(o.attribute("style"), Some("cursor: pointer;"));
        assert_eq!(classes(&o), ["text-bg-dark"]);
    }

    #[test]
    fn option_order_does_not_change_the_result() {
        use std::collections::BTreeMap;
        use trellis_dom::testing::class_set;

        let doc = trellis_dom::window().document();
        let written = |opts: Vec<Opt>| {
            let o = build(ComponentKind::Card, opts).unwrap();
            let element = doc.create_element("div").unwrap();
            o.write(&element);
            let attributes: BTreeMap<String, String> = element
                .attributes()
                .into_iter()
                .map(|attr| (attr.name(), attr.value()))
                .filter(|(name, _)| name != "class")
                .collect();
            (class_set(&element), attributes)
        };
        let forward = written(vec![
            with_id("c1"),
            with_class("shadow"),
            with_margin(Position::TOP, 2),
            with_color(Color::Info),
        ]);
        let backward = written(vec![
            with_color(Color::Info),
            with_margin(Position::TOP, 2),
            with_class("shadow"),
            with_id("c1"),
        ]);
        assert_eq!(forward, backward);
        assert!(forward.0.contains("mt-2") && forward.0.contains("text-bg-info"));
        assert_eq!(forward.1.get("id").map(String::as_str), Some("c1"));
    }

    #[test]
    fn data_component_is_never_written() {
        let doc = trellis_dom::window().document();
        let element = doc.create_element("p").unwrap();
        element.set_attribute(DATA_COMPONENT, "para");
        let mut o = Opts::from_element(ComponentKind::Para, &element);
        o.apply([with_attribute(DATA_COMPONENT, "alert")]).unwrap();
        o.write(&element);
        assert_eq!(element.get_attribute(DATA_COMPONENT).as_deref(), Some("para"));

        o.remove_attribute(DATA_COMPONENT);
        o.write(&element);
        assert_eq!(element.get_attribute(DATA_COMPONENT).as_deref(), Some("para"));
    }

    #[test]
    fn form_validation_toggle() {
        let mut o = Opts::new(ComponentKind::Form);
        o.add_class("needs-validation");
        o.set_attribute("novalidate", "");
        o.apply([without_validation()]).unwrap();
        assert!(o.classes().is_empty());
        assert_eq!(o.attribute("novalidate"), None);
        assert!(build(ComponentKind::Input, [with_method("post")]).is_err());
    }
}
