//! Registration of every widget kind with the DOM's component registry.

use crate::{
    Alert, App, Badge, Button, ButtonGroup, Card, ComponentKind, Container, Form, Heading, Icon,
    Image, Input, Label, Link, Nav, NavBar, NavDivider, NavDropdown, NavDropdownHeader, NavItem,
    NavSpacer, Offcanvas, Pagination, PaginationItem, Para, Row, Rule, Select, SelectOption, Span,
    Table, Toast, View,
};
use std::sync::Once;
use trellis_dom::{Component, ComponentFactory, Element};

fn factory<T: View>(element: Element) -> Option<Box<dyn Component>> {
    T::from_element(element).map(|view| Box::new(view) as Box<dyn Component>)
}

/// The factory for `kind`.  Routers and routes carry compiled patterns that
/// markup cannot restore, so they have none.
fn factory_for(kind: ComponentKind) -> Option<ComponentFactory> {
    use ComponentKind as K;
    let factory: ComponentFactory = match kind {
        K::Alert => factory::<Alert>,
        K::App => factory::<App>,
        K::Badge => factory::<Badge>,
        K::Button => factory::<Button>,
        K::ButtonGroup => factory::<ButtonGroup>,
        K::Card => factory::<Card>,
        K::Container => factory::<Container>,
        K::Form => factory::<Form>,
        K::Heading => factory::<Heading>,
        K::Icon => factory::<Icon>,
        K::Image => factory::<Image>,
        K::Input => factory::<Input>,
        K::Label => factory::<Label>,
        K::Link => factory::<Link>,
        K::Nav => factory::<Nav>,
        K::NavBar => factory::<NavBar>,
        K::NavDivider => factory::<NavDivider>,
        K::NavDropdown => factory::<NavDropdown>,
        K::NavHeader => factory::<NavDropdownHeader>,
        K::NavItem => factory::<NavItem>,
        K::NavSpacer => factory::<NavSpacer>,
        K::Offcanvas => factory::<Offcanvas>,
        K::Option => factory::<SelectOption>,
        K::Pagination => factory::<Pagination>,
        K::PaginationItem => factory::<PaginationItem>,
        K::Para => factory::<Para>,
        K::Rule => factory::<Rule>,
        K::Select => factory::<Select>,
        K::Span => factory::<Span>,
        K::Table => factory::<Table>,
        K::TableRow => factory::<Row>,
        K::Toast => factory::<Toast>,
        K::Route | K::Router => return None,
    };
    Some(factory)
}

static INIT: Once = Once::new();

/// Register every widget kind with [`trellis_dom::register_component`].
///
/// Idempotent.  Widget constructors call it, so explicit calls are only
/// needed before looking up components in markup built elsewhere.
pub fn init() {
    INIT.call_once(|| {
        for kind in ComponentKind::ALL {
            let Some(factory) = factory_for(kind) else {
                continue;
            };
            if let Err(err) = trellis_dom::register_component(kind.as_str(), factory) {
                tracing::warn!(%kind, error = %err, "could not register component");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_id, Route, Router};
    use trellis_dom::testing::fire;

    #[test]
    fn every_kind_but_routing_is_registered() {
        init();
        for kind in ComponentKind::ALL {
            let routing = matches!(kind, ComponentKind::Route | ComponentKind::Router);
            assert_eq!(trellis_dom::is_registered(kind.as_str()), !routing, "{kind}");
        }
    }

    #[test]
    fn lookups_rebuild_the_owning_widget() {
        let table = Table::new([with_id("stock")]);
        let row = Row::new(["apples", "3"]);
        table.append(&row);
        let cell = row.cells()[1].clone();

        let owner = cell.component().unwrap();
        assert_eq!(owner.name(), "table-row");
        let rebuilt = owner.downcast_ref::<Row>().unwrap();
        assert_eq!(rebuilt, &row);

        let owner = table.body().component().unwrap();
        let rebuilt = owner.downcast_ref::<Table>().unwrap();
        assert_eq!(rebuilt.id(), "stock");
        assert_eq!(rebuilt.count(), 1);
        assert_eq!(rebuilt.body(), table.body());
    }

    #[test]
    fn lookups_skip_unregistered_kinds() {
        let card = Card::new([with_id("outer")]);
        let router = Router::new([]);
        let route = Route::new(["^$"]);
        router.add_route(&route).unwrap();
        card.append(&router);
        let owner = route.root().component().unwrap();
        assert!(owner.is::<Card>());
        assert_eq!(owner.id(), "outer");
        assert!(fire(route.root(), "click"));
    }
}
