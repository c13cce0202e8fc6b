use crate::component::{view, Widget};
use crate::{with_class, ComponentKind, Opt, Result};

/// A divider.  [`Rule::new`] is a horizontal `<hr>`; [`Rule::vertical`]
/// is a `<div class="vr">` for flex rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    widget: Widget,
}

view!(Rule, ComponentKind::Rule);

impl Rule {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("rule: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Rule, "hr", vec![], opts).map(|widget| Self { widget })
    }

    pub fn vertical(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_vertical(opts).unwrap_or_else(|err| panic!("rule: {err}"))
    }

    pub fn try_vertical(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Rule, "div", vec![with_class("vr")], opts)
            .map(|widget| Self { widget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::View;

    #[test]
    fn horizontal_and_vertical() {
        assert_eq!(Rule::new([]).root().outer_html(), r#"<hr data-component="rule">"#);
        assert_eq!(
            Rule::vertical([]).root().outer_html(),
            r#"<div class="vr" data-component="rule"></div>"#
        );
    }
}
