use crate::component::{child_with_class, component, expect_kind, part, Widget};
use crate::{with_aria_label, with_class, Child, ComponentKind, Opt, Result, View};
use trellis_dom::Element;

/// Page links: `<nav aria-label="Page navigation"><ul class="pagination">`.
///
/// Only [`PaginationItem`]s may be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    widget: Widget,
}

component!(Pagination);

impl View for Pagination {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let list = child_with_class(&element, "pagination")?;
        let widget = Widget::adopt(ComponentKind::Pagination, element)?.with_body(list);
        Some(Self { widget })
    }

    fn accept(&self, child: &Child) -> Result<()> {
        expect_kind(ComponentKind::Pagination, child, ComponentKind::PaginationItem)
    }
}

impl Pagination {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("pagination: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(
            ComponentKind::Pagination,
            "nav",
            vec![with_aria_label("Page navigation")],
            opts,
        )?;
        let list = part("ul", "pagination")?;
        widget.root().append_child(&list)?;
        Ok(Self {
            widget: widget.with_body(list),
        })
    }

    fn items(&self) -> Vec<Element> {
        self.body().children()
    }

    /// Mark exactly the items at `indices` as the current page.
    pub fn set_active(&self, indices: &[usize]) -> &Self {
        for (i, item) in self.items().into_iter().enumerate() {
            let active = indices.contains(&i);
            item.class_list().toggle("active", Some(active));
            if active {
                item.set_attribute("aria-current", "page");
            } else {
                item.remove_attribute("aria-current");
            }
        }
        self
    }

    /// Indices of the active items, ascending.
    pub fn active(&self) -> Vec<usize> {
        self.flagged("active")
    }

    /// Disable exactly the items at `indices`.
    pub fn set_disabled(&self, indices: &[usize]) -> &Self {
        for (i, item) in self.items().into_iter().enumerate() {
            item.class_list().toggle("disabled", Some(indices.contains(&i)));
        }
        self
    }

    pub fn disabled(&self) -> Vec<usize> {
        self.flagged("disabled")
    }

    fn flagged(&self, class: &str) -> Vec<usize> {
        self.items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.class_list().contains(class))
            .map(|(i, _)| i)
            .collect()
    }
}

/// One page link.  Children go into the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationItem {
    widget: Widget,
}

component!(PaginationItem);

impl View for PaginationItem {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let link = element.first_element_child()?;
        let widget = Widget::adopt(ComponentKind::PaginationItem, element)?.with_body(link);
        Some(Self { widget })
    }
}

impl PaginationItem {
    pub fn new(label: impl Into<Child>) -> Self {
        Self::try_new(label, []).unwrap_or_else(|err| panic!("pagination item: {err}"))
    }

    pub fn try_new(label: impl Into<Child>, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(
            ComponentKind::PaginationItem,
            "li",
            vec![with_class("page-item")],
            opts,
        )?;
        let link = part("a", "page-link")?;
        link.set_attribute("href", "#");
        link.append_child(&label.into().into_node(&link)?)?;
        widget.root().append_child(&link)?;
        Ok(Self {
            widget: widget.with_body(link),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn pagination_markup() {
        let pages = Pagination::new([]);
        pages
            .append(&PaginationItem::new("1"))
            .append(&PaginationItem::new("2"));
        assert_eq!(
            pages.root().outer_html(),
            concat!(
                r#"<nav aria-label="Page navigation" data-component="pagination"><ul class="pagination">"#,
                r##"<li class="page-item" data-component="pagination-item"><a class="page-link" href="#">1</a></li>"##,
                r##"<li class="page-item" data-component="pagination-item"><a class="page-link" href="#">2</a></li>"##,
                "</ul></nav>",
            )
        );
    }

    #[test]
    fn refuses_other_children() {
        let pages = Pagination::new([]);
        let err = pages.try_append("not a pagination item").unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
        assert!(pages.try_append(&crate::Badge::new([])).is_err());
        assert!(!pages.body().has_child_nodes());
    }

    #[test]
    #[should_panic(expected = "cannot append to pagination")]
    fn append_panics_on_wrong_child() {
        Pagination::new([]).append("oops");
    }

    #[test]
    fn active_and_disabled_sets() {
        let pages = Pagination::new([crate::with_aria_label("Results")]);
        for label in ["«", "1", "2", "3", "»"] {
            pages.append(&PaginationItem::new(label));
        }
        pages.set_active(&[2]).set_disabled(&[0, 4]);
        assert_eq!(pages.active(), [2]);
        assert_eq!(pages.disabled(), [0, 4]);
        pages.set_active(&[1]);
        assert_eq!(pages.active(), [1]);
        assert_eq!(pages.root().get_attribute("aria-label").as_deref(), Some("Results"));
        let rebuilt = Pagination::from_element(pages.root().clone()).unwrap();
        assert_eq!(rebuilt.active(), [1]);
    }
}
