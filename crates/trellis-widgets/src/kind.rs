use std::fmt;
use std::str::FromStr;

/// The closed set of component kinds.
///
/// Each kind serializes to the kebab-case name stored in the root element's
/// `data-component` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentKind {
    Alert,
    App,
    Badge,
    Button,
    ButtonGroup,
    Card,
    Container,
    Form,
    Heading,
    Icon,
    Image,
    Input,
    Label,
    Link,
    Nav,
    NavBar,
    NavDivider,
    NavDropdown,
    NavHeader,
    NavItem,
    NavSpacer,
    Offcanvas,
    Option,
    Pagination,
    PaginationItem,
    Para,
    Route,
    Router,
    Rule,
    Select,
    Span,
    Table,
    TableRow,
    Toast,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 34] = [
        ComponentKind::Alert,
        ComponentKind::App,
        ComponentKind::Badge,
        ComponentKind::Button,
        ComponentKind::ButtonGroup,
        ComponentKind::Card,
        ComponentKind::Container,
        ComponentKind::Form,
        ComponentKind::Heading,
        ComponentKind::Icon,
        ComponentKind::Image,
        ComponentKind::Input,
        ComponentKind::Label,
        ComponentKind::Link,
        ComponentKind::Nav,
        ComponentKind::NavBar,
        ComponentKind::NavDivider,
        ComponentKind::NavDropdown,
        ComponentKind::NavHeader,
        ComponentKind::NavItem,
        ComponentKind::NavSpacer,
        ComponentKind::Offcanvas,
        ComponentKind::Option,
        ComponentKind::Pagination,
        ComponentKind::PaginationItem,
        ComponentKind::Para,
        ComponentKind::Route,
        ComponentKind::Router,
        ComponentKind::Rule,
        ComponentKind::Select,
        ComponentKind::Span,
        ComponentKind::Table,
        ComponentKind::TableRow,
        ComponentKind::Toast,
    ];

    /// The `data-component` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Alert => "alert",
            ComponentKind::App => "app",
            ComponentKind::Badge => "badge",
            ComponentKind::Button => "button",
            ComponentKind::ButtonGroup => "button-group",
            ComponentKind::Card => "card",
            ComponentKind::Container => "container",
            ComponentKind::Form => "form",
            ComponentKind::Heading => "heading",
            ComponentKind::Icon => "icon",
            ComponentKind::Image => "image",
            ComponentKind::Input => "input",
            ComponentKind::Label => "label",
            ComponentKind::Link => "link",
            ComponentKind::Nav => "nav",
            ComponentKind::NavBar => "navbar",
            ComponentKind::NavDivider => "nav-divider",
            ComponentKind::NavDropdown => "nav-dropdown",
            ComponentKind::NavHeader => "nav-header",
            ComponentKind::NavItem => "nav-item",
            ComponentKind::NavSpacer => "nav-spacer",
            ComponentKind::Offcanvas => "offcanvas",
            ComponentKind::Option => "option",
            ComponentKind::Pagination => "pagination",
            ComponentKind::PaginationItem => "pagination-item",
            ComponentKind::Para => "para",
            ComponentKind::Route => "route",
            ComponentKind::Router => "router",
            ComponentKind::Rule => "rule",
            ComponentKind::Select => "select",
            ComponentKind::Span => "span",
            ComponentKind::Table => "table",
            ComponentKind::TableRow => "table-row",
            ComponentKind::Toast => "toast",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::Error::invalid(format!("unknown component kind {s:?}")))
    }
}
