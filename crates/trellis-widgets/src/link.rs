use crate::component::{view, Widget};
use crate::{with_attribute, ComponentKind, Opt, Result, View};

/// A hyperlink, `<a href="…">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    widget: Widget,
}

view!(Link, ComponentKind::Link);

impl Link {
    pub fn new(href: &str, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(href, opts).unwrap_or_else(|err| panic!("link: {err}"))
    }

    pub fn try_new(href: &str, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Link, "a", vec![with_attribute("href", href)], opts)
            .map(|widget| Self { widget })
    }

    pub fn href(&self) -> String {
        self.root().get_attribute("href").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_color, Color};

    #[test]
    fn link_with_color() {
        let link = Link::new("#home", [with_color(Color::Secondary)]);
        link.append("Home");
        assert_eq!(link.href(), "#home");
        assert_eq!(
            link.root().outer_html(),
            r##"<a class="link-secondary" href="#home" data-component="link">Home</a>"##
        );
    }
}
