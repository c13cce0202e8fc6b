//! Plain text containers.

use crate::component::{view, Widget};
use crate::{ComponentKind, Opt, Result};

/// A paragraph, `<p>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Para {
    widget: Widget,
}

view!(Para, ComponentKind::Para);

impl Para {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("para: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Para, "p", vec![], opts).map(|widget| Self { widget })
    }
}

/// Inline text, `<span>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    widget: Widget,
}

view!(Span, ComponentKind::Span);

impl Span {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("span: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Span, "span", vec![], opts).map(|widget| Self { widget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_class, with_margin, Position, View};

    #[test]
    fn para_and_span() {
        let p = Para::new([with_class("lead"), with_margin(Position::TOP | Position::BOTTOM, 2)]);
        let span = Span::new([with_class("fw-bold")]);
        span.append("bold");
        p.append("a ").append(&span);
        assert_eq!(
            p.root().outer_html(),
            r#"<p class="lead my-2" data-component="para">a <span class="fw-bold" data-component="span">bold</span></p>"#
        );
    }
}
