use crate::component::{component, expect_kind, view, Widget};
use crate::{host, with_attribute, with_class, Child, ComponentKind, Opt, Result, View};
use trellis_dom::{Element, Event};

/// A drop-down choice: `<select class="form-select">`.
///
/// Only [`SelectOption`]s may be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    widget: Widget,
}

component!(Select);

impl View for Select {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        Widget::adopt(ComponentKind::Select, element).map(|widget| Self { widget })
    }

    fn accept(&self, child: &Child) -> Result<()> {
        expect_kind(ComponentKind::Select, child, ComponentKind::Option)
    }
}

impl Select {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("select: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Select, "select", vec![with_class("form-select")], opts)
            .map(|widget| Self { widget })
    }

    /// Run `handler` whenever the selection changes.  The event's target is
    /// the select element.
    pub fn on_change(&self, handler: impl FnMut(&Event) + 'static) -> &Self {
        self.root().add_event_listener("change", handler);
        self
    }

    fn options(&self) -> Vec<Element> {
        self.root()
            .children()
            .into_iter()
            .filter(|child| child.tag_name().eq_ignore_ascii_case("option"))
            .collect()
    }

    /// The selected value.  Without a live selection this is the first
    /// option marked `selected`, else the first option.
    pub fn value(&self) -> String {
        if let Some(value) = host::property(self.root(), "value") {
            return value;
        }
        let options = self.options();
        options
            .iter()
            .find(|option| option.has_attribute("selected"))
            .or_else(|| options.first())
            .map(option_value)
            .unwrap_or_default()
    }

    /// Select the option whose value is `value`.
    pub fn set_value(&self, value: &str) -> &Self {
        host::set_property(self.root(), "value", value);
        for option in self.options() {
            if option_value(&option) == value {
                option.set_attribute("selected", "");
            } else {
                option.remove_attribute("selected");
            }
        }
        self
    }
}

fn option_value(option: &Element) -> String {
    option
        .get_attribute("value")
        .unwrap_or_else(|| option.text_content())
}

/// One choice in a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    widget: Widget,
}

view!(SelectOption, ComponentKind::Option);

impl SelectOption {
    pub fn new(value: &str, label: impl Into<Child>) -> Self {
        Self::try_new(value, label, []).unwrap_or_else(|err| panic!("option: {err}"))
    }

    pub fn try_new(value: &str, label: impl Into<Child>, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(
            ComponentKind::Option,
            "option",
            vec![with_attribute("value", value)],
            opts,
        )?;
        let option = Self { widget };
        option.try_append(label)?;
        Ok(option)
    }

    pub fn value(&self) -> String {
        option_value(self.root())
    }

    pub fn is_selected(&self) -> bool {
        self.root().has_attribute("selected")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_selected, Span};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sizes() -> Select {
        let select = Select::new([crate::with_name("size")]);
        select
            .append(&SelectOption::new("s", "Small"))
            .append(&SelectOption::try_new("m", "Medium", [with_selected()]).unwrap())
            .append(&SelectOption::new("l", "Large"));
        select
    }

    #[test]
    fn option_markup() {
        let option = SelectOption::new("m", "Medium");
        assert_eq!(
            option.root().outer_html(),
            r#"<option value="m" data-component="option">Medium</option>"#
        );
    }

    #[test]
    fn value_follows_selection() {
        let select = sizes();
        assert_eq!(select.value(), "m");
        select.set_value("l");
        assert_eq!(select.value(), "l");
        let selected: Vec<bool> = select
            .root()
            .children()
            .into_iter()
            .map(|o| SelectOption::from_element(o).unwrap().is_selected())
            .collect();
        assert_eq!(selected, [false, false, true]);
        assert_eq!(Select::new([]).value(), "");
    }

    #[test]
    fn only_options_are_accepted() {
        let select = sizes();
        assert!(select.try_append(&Span::new([])).unwrap_err().is_invalid_parameter());
        assert!(select.try_insert("text").is_err());
        assert_eq!(select.root().child_element_count(), 3);
    }

    #[test]
    fn change_handler_sees_the_select() {
        let select = sizes();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        select.on_change(move |event| {
            let target = event.target().and_then(|node| node.as_element());
            log.borrow_mut().push(target.map(|e| e.tag_name()));
        });
        trellis_dom::testing::fire(select.root(), "change");
        assert_eq!(*seen.borrow(), [Some("SELECT".to_string())]);
    }
}
