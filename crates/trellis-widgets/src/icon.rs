use crate::component::{view, Widget};
use crate::{with_class, ComponentKind, Opt, Result};

/// A Bootstrap Icons glyph: `<i class="bi bi-NAME">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    widget: Widget,
}

view!(Icon, ComponentKind::Icon);

impl Icon {
    pub fn new(name: &str, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(name, opts).unwrap_or_else(|err| panic!("icon: {err}"))
    }

    pub fn try_new(name: &str, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(
            ComponentKind::Icon,
            "i",
            vec![with_class("bi"), with_class(format!("bi-{name}"))],
            opts,
        )
        .map(|widget| Self { widget })
    }
}
