use crate::component::{view, Widget};
use crate::{with_class, ComponentKind, Opt, Result};

/// A layout container: `<div class="container">`.  Use
/// [`with_breakpoint`](crate::with_breakpoint) for responsive or fluid widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    widget: Widget,
}

view!(Container, ComponentKind::Container);

impl Container {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("container: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Container, "div", vec![with_class("container")], opts)
            .map(|widget| Self { widget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_breakpoint, Breakpoint, Button, View};

    #[test]
    fn breakpoint_exchange() {
        let container = Container::new([with_breakpoint(Breakpoint::Fluid)]);
        assert_eq!(container.root().class_list().values(), ["container-fluid"]);
        container.apply([with_breakpoint(Breakpoint::Large)]);
        assert_eq!(container.root().class_list().values(), ["container-lg"]);
    }

    #[test]
    fn breakpoint_is_refused_elsewhere() {
        let err = Button::try_new([with_breakpoint(Breakpoint::Large)]).unwrap_err();
        assert!(err.is_invalid_parameter());
        let container = Container::new([]);
        let err = container.try_apply([crate::with_tabs()]).unwrap_err();
        assert!(err.is_invalid_parameter());
        assert_eq!(container.root().class_name(), "container");
    }
}
