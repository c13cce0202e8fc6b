//! Navigation: plain navs, the responsive navbar and their items.
//!
//! | Type | Markup |
//! |------|--------|
//! | [`Nav`] | `<nav class="nav">` |
//! | [`NavBar`] | `<nav class="navbar"><div class="container-fluid">` |
//! | [`NavItem`] | `<li class="nav-item"><a class="nav-link">` |
//! | [`NavDropdown`] | `<li class="nav-item dropdown">` with a toggle and a menu |
//! | [`NavDivider`] | `<li><hr class="dropdown-divider"></li>` |
//! | [`NavDropdownHeader`] | `<li><h6 class="dropdown-header"></li>` |
//! | [`NavSpacer`] | `<li class="flex-grow-1">` |

use crate::component::{child_with_class, component, part, view, Widget};
use crate::{with_attribute, with_class, Child, ComponentKind, Opt, Result, View};
use trellis_dom::Element;

/// Id of the collapsible region [`NavBar::header`] creates.
pub const NAVBAR_COLLAPSE_ID: &str = "navbarNav";

/// A horizontal list of links: `<nav class="nav">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    widget: Widget,
}

view!(Nav, ComponentKind::Nav);

impl Nav {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("nav: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Nav, "nav", vec![with_class("nav")], opts)
            .map(|widget| Self { widget })
    }
}

/// The top-of-page navigation bar.
///
/// Children land in the container until [`header`](NavBar::header) builds
/// the collapsible `<ul class="navbar-nav">`; from then on they land in
/// that list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    widget: Widget,
}

component!(NavBar);

impl View for NavBar {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let container = child_with_class(&element, "container-fluid")?;
        let widget = Widget::adopt(ComponentKind::NavBar, element)?.with_body(container);
        Some(Self { widget })
    }

    fn body(&self) -> Element {
        self.container()
            .get_elements_by_class_name("navbar-nav")
            .into_iter()
            .next()
            .unwrap_or_else(|| self.container().clone())
    }
}

impl NavBar {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("navbar: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::NavBar, "nav", vec![with_class("navbar")], opts)?;
        let container = part("div", "container-fluid")?;
        widget.root().append_child(&container)?;
        Ok(Self {
            widget: widget.with_body(container),
        })
    }

    fn container(&self) -> &Element {
        self.widget.body()
    }

    /// Set the brand link at the start of the bar, replacing any previous
    /// one.
    pub fn brand(&self, child: impl Into<Child>) -> Result<&Self> {
        let container = self.container();
        if let Some(old) = child_with_class(container, "navbar-brand") {
            old.remove();
        }
        let brand = part("a", "navbar-brand")?;
        brand.set_attribute("href", "#");
        brand.append_child(&child.into().into_node(&brand)?)?;
        container.insert_before(&brand, container.first_child().as_ref())?;
        Ok(self)
    }

    /// Add the button that collapses the element with id `target`, unless
    /// the bar already has one.
    pub fn toggler(&self, target: &str) -> Result<&Self> {
        let container = self.container();
        if child_with_class(container, "navbar-toggler").is_some() {
            return Ok(self);
        }
        let button = part("button", "navbar-toggler")?;
        button.set_attribute("type", "button");
        button.set_attribute("data-bs-toggle", "collapse");
        button.set_attribute("data-bs-target", &format!("#{target}"));
        button.set_attribute("aria-controls", target);
        button.set_attribute("aria-expanded", "false");
        button.set_attribute("aria-label", "Toggle navigation");
        let icon = part("span", "navbar-toggler-icon")?;
        button.append_child(&icon)?;
        // Right after the brand, or first when there is none.
        let reference = match child_with_class(container, "navbar-brand") {
            Some(brand) => brand.next_sibling(),
            None => container.first_child(),
        };
        container.insert_before(&button, reference.as_ref())?;
        Ok(self)
    }

    /// Brand, toggler and the collapsible item list in one go.
    pub fn header(&self, child: impl Into<Child>) -> Result<&Self> {
        self.brand(child)?.toggler(NAVBAR_COLLAPSE_ID)?;
        let container = self.container();
        if child_with_class(container, "navbar-collapse").is_none() {
            let collapse = part("div", "collapse navbar-collapse")?;
            collapse.set_attribute("id", NAVBAR_COLLAPSE_ID);
            let list = part("ul", "navbar-nav")?;
            collapse.append_child(&list)?;
            container.append_child(&collapse)?;
        }
        Ok(self)
    }
}

/// One link in a nav or navbar.  Children go into the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    widget: Widget,
}

component!(NavItem);

impl View for NavItem {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let link = element.first_element_child()?;
        let widget = Widget::adopt(ComponentKind::NavItem, element)?.with_body(link);
        Some(Self { widget })
    }
}

impl NavItem {
    pub fn new(href: &str, label: impl Into<Child>) -> Self {
        Self::try_new(href, label, []).unwrap_or_else(|err| panic!("nav item: {err}"))
    }

    pub fn try_new(href: &str, label: impl Into<Child>, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::NavItem, "li", vec![with_class("nav-item")], opts)?;
        let link = part("a", "nav-link")?;
        link.set_attribute("href", href);
        link.append_child(&label.into().into_node(&link)?)?;
        widget.root().append_child(&link)?;
        Ok(Self {
            widget: widget.with_body(link),
        })
    }

    fn link(&self) -> &Element {
        self.widget.body()
    }

    /// Mark as the current page.
    pub fn set_active(&self, active: bool) -> &Self {
        self.link().class_list().toggle("active", Some(active));
        if active {
            self.link().set_attribute("aria-current", "page");
        } else {
            self.link().remove_attribute("aria-current");
        }
        self
    }

    pub fn is_active(&self) -> bool {
        self.link().class_list().contains("active")
    }

    pub fn set_disabled(&self, disabled: bool) -> &Self {
        self.link().class_list().toggle("disabled", Some(disabled));
        if disabled {
            self.link().set_attribute("aria-disabled", "true");
        } else {
            self.link().remove_attribute("aria-disabled");
        }
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.link().class_list().contains("disabled")
    }
}

/// A nav item that opens a menu.  Nav items appended to it become
/// dropdown items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDropdown {
    widget: Widget,
}

component!(NavDropdown);

impl View for NavDropdown {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let menu = child_with_class(&element, "dropdown-menu")?;
        let widget = Widget::adopt(ComponentKind::NavDropdown, element)?.with_body(menu);
        Some(Self { widget })
    }

    fn accept(&self, child: &Child) -> Result<()> {
        if child.kind() == Some(ComponentKind::NavItem) {
            if let Some(link) = child.element().and_then(|item| item.first_element_child()) {
                link.class_list().remove("nav-link");
                link.class_list().add("dropdown-item");
            }
        }
        Ok(())
    }
}

impl NavDropdown {
    pub fn new(label: impl Into<Child>) -> Self {
        Self::try_new(label, []).unwrap_or_else(|err| panic!("nav dropdown: {err}"))
    }

    pub fn try_new(label: impl Into<Child>, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(
            ComponentKind::NavDropdown,
            "li",
            vec![with_class("nav-item dropdown")],
            opts,
        )?;
        let toggle = part("a", "nav-link dropdown-toggle")?;
        toggle.set_attribute("href", "#");
        toggle.set_attribute("role", "button");
        toggle.set_attribute("data-bs-toggle", "dropdown");
        toggle.set_attribute("aria-expanded", "false");
        toggle.append_child(&label.into().into_node(&toggle)?)?;
        let menu = part("ul", "dropdown-menu")?;
        widget.root().append_child(&toggle)?;
        widget.root().append_child(&menu)?;
        Ok(Self {
            widget: widget.with_body(menu),
        })
    }
}

/// A line between dropdown items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDivider {
    widget: Widget,
}

view!(NavDivider, ComponentKind::NavDivider);

impl NavDivider {
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|err| panic!("nav divider: {err}"))
    }

    pub fn try_new() -> Result<Self> {
        let widget = Widget::create(ComponentKind::NavDivider, "li", vec![], [])?;
        let rule = part("hr", "dropdown-divider")?;
        widget.root().append_child(&rule)?;
        Ok(Self { widget })
    }
}

impl Default for NavDivider {
    fn default() -> Self {
        Self::new()
    }
}

/// A caption between dropdown items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDropdownHeader {
    widget: Widget,
}

component!(NavDropdownHeader);

impl View for NavDropdownHeader {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let header = element.first_element_child()?;
        let widget = Widget::adopt(ComponentKind::NavHeader, element)?.with_body(header);
        Some(Self { widget })
    }
}

impl NavDropdownHeader {
    pub fn new(label: impl Into<Child>) -> Self {
        Self::try_new(label).unwrap_or_else(|err| panic!("nav header: {err}"))
    }

    pub fn try_new(label: impl Into<Child>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::NavHeader, "li", vec![], [])?;
        let header = part("h6", "dropdown-header")?;
        header.append_child(&label.into().into_node(&header)?)?;
        widget.root().append_child(&header)?;
        Ok(Self {
            widget: widget.with_body(header),
        })
    }
}

/// Pushes the items after it to the far end of a flex nav.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSpacer {
    widget: Widget,
}

view!(NavSpacer, ComponentKind::NavSpacer);

impl NavSpacer {
    pub fn new() -> Self {
        Self::try_new().unwrap_or_else(|err| panic!("nav spacer: {err}"))
    }

    pub fn try_new() -> Result<Self> {
        Widget::create(
            ComponentKind::NavSpacer,
            "li",
            vec![with_class("flex-grow-1"), with_attribute("aria-hidden", "true")],
            [],
        )
        .map(|widget| Self { widget })
    }
}

impl Default for NavSpacer {
    fn default() -> Self {
        Self::new()
    }
}
