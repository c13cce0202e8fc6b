use crate::component::{child_with_class, component, part, Widget};
use crate::{with_class, Child, ComponentKind, Opt, Result, View};
use trellis_dom::Element;

/// A bordered content box.  Children go into its `.card-body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    widget: Widget,
}

component!(Card);

impl View for Card {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let body = child_with_class(&element, "card-body")?;
        let widget = Widget::adopt(ComponentKind::Card, element)?.with_body(body);
        Some(Self { widget })
    }
}

impl Card {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("card: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::Card, "div", vec![with_class("card")], opts)?;
        let body = part("div", "card-body")?;
        widget.root().append_child(&body)?;
        Ok(Self {
            widget: widget.with_body(body),
        })
    }

    /// Set the `.card-header`, replacing any previous one.
    pub fn heading(&self, child: impl Into<Child>) -> Result<&Self> {
        let header = self.section("card-header", child)?;
        let root = self.root();
        root.insert_before(&header, root.first_child().as_ref())?;
        Ok(self)
    }

    /// Set the `.card-footer`, replacing any previous one.
    pub fn footer(&self, child: impl Into<Child>) -> Result<&Self> {
        let footer = self.section("card-footer", child)?;
        self.root().append_child(&footer)?;
        Ok(self)
    }

    fn section(&self, class: &str, child: impl Into<Child>) -> Result<Element> {
        if let Some(old) = child_with_class(self.root(), class) {
            old.remove();
        }
        let section = part("div", class)?;
        section.append_child(&child.into().into_node(&section)?)?;
        Ok(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_dom::testing::normalize_html;

    #[test]
    fn header_body_footer_order() {
        let card = Card::new([]);
        card.append("content");
        card.footer("old footer").unwrap();
        card.heading("old").unwrap();
        card.heading("Title").unwrap();
        card.footer("Footer").unwrap();
        card.append("!");
        let expected = normalize_html(
            r#"<div class="card" data-component="card">
                <div class="card-header">Title</div>
                <div class="card-body">content!</div>
                <div class="card-footer">Footer</div>
            </div>"#,
        );
        assert_eq!(card.root().outer_html(), expected);
    }

    #[test]
    fn rebuilt_card_appends_to_body() {
        let card = Card::new([]);
        let rebuilt = Card::from_element(card.root().clone()).unwrap();
        rebuilt.append("x");
        assert_eq!(card.body().text_content(), "x");
    }
}
