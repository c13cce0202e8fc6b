use crate::component::{view, Widget};
use crate::{with_class, ComponentKind, Opt, Result};

/// A small count or label: `<span class="badge">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    widget: Widget,
}

view!(Badge, ComponentKind::Badge);

impl Badge {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("badge: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Badge, "span", vec![with_class("badge")], opts)
            .map(|widget| Self { widget })
    }

    /// A badge with fully rounded corners.
    pub fn pill(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_pill(opts).unwrap_or_else(|err| panic!("badge: {err}"))
    }

    pub fn try_pill(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(
            ComponentKind::Badge,
            "span",
            vec![with_class("badge rounded-pill")],
            opts,
        )
        .map(|widget| Self { widget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_color, Color, View};

    #[test]
    fn colored_pill() {
        let badge = Badge::pill([with_color(Color::Success)]);
        badge.append("4");
        assert_eq!(
            badge.root().outer_html(),
            r#"<span class="badge rounded-pill text-bg-success" data-component="badge">4</span>"#
        );
    }

    #[test]
    fn rebuilt_from_text_node() {
        let badge = Badge::new([crate::with_id("count")]);
        badge.append("1");
        let text = badge.root().first_child().unwrap();
        let found = text.component().unwrap();
        assert!(found.is::<Badge>());
        assert_eq!(found.downcast_ref::<Badge>(), Some(&badge));
    }
}
