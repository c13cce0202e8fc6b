use crate::component::{child_with_class, component, part, Widget};
use crate::{host, with_attribute, with_class, with_position, Child, ComponentKind, Opt, Position, Result, View};
use trellis_dom::Element;

/// A panel that slides in from an edge of the viewport.
///
/// Starts at the left edge; pass [`with_position`] to change that.
/// Children go into `.offcanvas-body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offcanvas {
    widget: Widget,
}

component!(Offcanvas);

impl View for Offcanvas {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let body = child_with_class(&element, "offcanvas-body")?;
        let widget = Widget::adopt(ComponentKind::Offcanvas, element)?.with_body(body);
        Some(Self { widget })
    }
}

impl Offcanvas {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("offcanvas: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(
            ComponentKind::Offcanvas,
            "div",
            vec![
                with_class("offcanvas"),
                with_position(Position::START),
                with_attribute("tabindex", "-1"),
            ],
            opts,
        )?;
        let body = part("div", "offcanvas-body")?;
        widget.root().append_child(&body)?;
        Ok(Self {
            widget: widget.with_body(body),
        })
    }

    /// Append to `.offcanvas-header`, creating it above the body on first
    /// use.
    pub fn header(&self, child: impl Into<Child>) -> Result<&Self> {
        let root = self.root();
        let header = match child_with_class(root, "offcanvas-header") {
            Some(header) => header,
            None => {
                let header = part("div", "offcanvas-header")?;
                root.insert_before(&header, root.first_child().as_ref())?;
                header
            }
        };
        header.append_child(&child.into().into_node(&header)?)?;
        Ok(self)
    }

    pub fn show(&self) -> &Self {
        host::invoke("Offcanvas", self.root(), "show", true);
        self
    }

    pub fn hide(&self) -> &Self {
        host::invoke("Offcanvas", self.root(), "hide", false);
        self
    }

    pub fn toggle(&self) -> &Self {
        host::invoke("Offcanvas", self.root(), "toggle", true);
        self
    }
}
