//! Buttons and button groups.

use crate::component::{view, Widget};
use crate::{with_aria_label, with_attribute, with_class, with_role, Color, ComponentKind, Opt, Result, View};
use trellis_dom::Element;

/// `<button class="btn" type="button">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    widget: Widget,
}

view!(Button, ComponentKind::Button);

impl Button {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("button: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Self::build(vec![with_class("btn")], opts)
    }

    /// A button drawn with a `color` outline instead of a fill.
    pub fn outline(color: Color, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_outline(color, opts).unwrap_or_else(|err| panic!("button: {err}"))
    }

    pub fn try_outline(color: Color, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let mut base = vec![with_class("btn")];
        base.extend(color.class("btn-outline").map(with_class));
        Self::build(base, opts)
    }

    /// The `×` button used to dismiss alerts, toasts and offcanvases.
    pub fn close(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_close(opts).unwrap_or_else(|err| panic!("button: {err}"))
    }

    pub fn try_close(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Self::build(vec![with_class("btn-close"), with_aria_label("Close")], opts)
    }

    fn build(mut base: Vec<Opt>, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        base.push(with_attribute("type", "button"));
        Widget::create(ComponentKind::Button, "button", base, opts).map(|widget| Self { widget })
    }

    pub fn set_disabled(&self, disabled: bool) -> &Self {
        if disabled {
            self.root().set_attribute("disabled", "");
        } else {
            self.root().remove_attribute("disabled");
        }
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.root().has_attribute("disabled")
    }

    pub fn set_active(&self, active: bool) -> &Self {
        self.root().class_list().toggle("active", Some(active));
        self
    }

    pub fn is_active(&self) -> bool {
        self.root().class_list().contains("active")
    }
}

/// Buttons laid out as one control: `<div class="btn-group" role="group">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonGroup {
    widget: Widget,
}

view!(ButtonGroup, ComponentKind::ButtonGroup);

impl ButtonGroup {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("button group: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Self::build("btn-group", opts)
    }

    /// Buttons stacked vertically.
    pub fn vertical(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_vertical(opts).unwrap_or_else(|err| panic!("button group: {err}"))
    }

    pub fn try_vertical(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Self::build("btn-group-vertical", opts)
    }

    fn build(class: &str, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(
            ComponentKind::ButtonGroup,
            "div",
            vec![with_class(class), with_role("group")],
            opts,
        )
        .map(|widget| Self { widget })
    }

    /// Children carrying the `active` class.
    pub fn active(&self) -> Vec<Element> {
        self.body()
            .children()
            .into_iter()
            .filter(|child| child.class_list().contains("active"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_color, with_size, Size};

    #[test]
    fn button_markup() {
        let button = Button::new([with_color(Color::Primary), with_size(Size::Small)]);
        button.append("Save");
        assert_eq!(
            button.root().outer_html(),
            r#"<button class="btn btn-primary btn-sm" type="button" data-component="button">Save</button>"#
        );
    }

    #[test]
    fn outline_and_close() {
        let outline = Button::outline(Color::Danger, []);
        assert_eq!(outline.root().class_name(), "btn btn-outline-danger");
        let close = Button::close([]);
        assert_eq!(close.root().class_name(), "btn-close");
        assert_eq!(close.root().get_attribute("aria-label").as_deref(), Some("Close"));
    }

    #[test]
    fn disabled_and_active() {
        let button = Button::new([]);
        assert!(button.set_disabled(true).set_active(true).is_active());
        assert!(button.is_disabled());
        assert!(!button.set_active(false).is_active());
        button.set_disabled(false);
        assert!(!button.is_disabled());
    }

    #[test]
    fn group_reports_active_buttons() {
        let group = ButtonGroup::vertical([]);
        let a = Button::new([]);
        let b = Button::new([]);
        group.append(&a).append(&b);
        b.set_active(true);
        assert_eq!(group.active(), [b.root().clone()]);
        assert_eq!(group.root().get_attribute("role").as_deref(), Some("group"));
        assert!(group.root().class_list().contains("btn-group-vertical"));
    }
}
