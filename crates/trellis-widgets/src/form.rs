//! Forms and their controls.

use crate::component::{view, Widget};
use crate::{host, with_attribute, with_class, ComponentKind, Opt, Result, View};
use trellis_dom::Event;

/// `<form class="needs-validation" novalidate>`.
///
/// Bootstrap's validation styles are on by default;
/// [`without_validation`](crate::without_validation) hands validation back
/// to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    widget: Widget,
}

view!(Form, ComponentKind::Form);

impl Form {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("form: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(
            ComponentKind::Form,
            "form",
            vec![with_class("needs-validation"), with_attribute("novalidate", "")],
            opts,
        )
        .map(|widget| Self { widget })
    }

    /// Run `handler` on submit.  Call `prevent_default` on the event to keep
    /// the page.
    pub fn on_submit(&self, handler: impl FnMut(&Event) + 'static) -> &Self {
        self.root().add_event_listener("submit", handler);
        self
    }
}

/// `<input>` with the control class that fits its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    widget: Widget,
}

view!(Input, ComponentKind::Input);

impl Input {
    pub fn new(kind: &str, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(kind, opts).unwrap_or_else(|err| panic!("input: {err}"))
    }

    pub fn try_new(kind: &str, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let class = match kind {
            "checkbox" | "radio" => "form-check-input",
            "range" => "form-range",
            _ => "form-control",
        };
        Widget::create(
            ComponentKind::Input,
            "input",
            vec![with_class(class), with_attribute("type", kind)],
            opts,
        )
        .map(|widget| Self { widget })
    }

    /// The live value when there is one, else the `value` attribute.
    pub fn value(&self) -> String {
        host::property(self.root(), "value")
            .or_else(|| self.root().get_attribute("value"))
            .unwrap_or_default()
    }

    pub fn set_value(&self, value: &str) -> &Self {
        host::set_property(self.root(), "value", value);
        self.root().set_attribute("value", value);
        self
    }
}

/// `<label class="form-label" for="…">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    widget: Widget,
}

view!(Label, ComponentKind::Label);

impl Label {
    pub fn new(for_id: &str, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(for_id, opts).unwrap_or_else(|err| panic!("label: {err}"))
    }

    pub fn try_new(for_id: &str, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(
            ComponentKind::Label,
            "label",
            vec![with_class("form-label"), with_attribute("for", for_id)],
            opts,
        )
        .map(|widget| Self { widget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_id, with_method, with_placeholder, with_required, without_validation};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn form_markup() {
        let form = Form::new([with_method("post")]);
        let label = Label::new("email", []);
        label.append("Email");
        let input = Input::new("email", [with_id("email"), with_placeholder("you@example.com"), with_required()]);
        form.append(&label).append(&input);
        assert_eq!(
            form.root().outer_html(),
            concat!(
                r#"<form class="needs-validation" novalidate="" method="post" data-component="form">"#,
                r#"<label class="form-label" for="email" data-component="label">Email</label>"#,
                r#"<input class="form-control" type="email" id="email" placeholder="you@example.com" required="" data-component="input">"#,
                "</form>",
            )
        );
    }

    #[test]
    fn browser_validation() {
        let form = Form::new([without_validation()]);
        assert_eq!(form.root().outer_html(), r#"<form data-component="form"></form>"#);
    }

    #[test]
    fn input_classes_and_value() {
        assert_eq!(Input::new("checkbox", []).root().class_name(), "form-check-input");
        assert_eq!(Input::new("range", []).root().class_name(), "form-range");
        let input = Input::new("text", [crate::with_value("a")]);
        assert_eq!(input.value(), "a");
        assert_eq!(input.set_value("b").value(), "b");
        assert!(Input::try_new("text", [crate::with_selected()]).is_err());
    }

    #[test]
    fn submit_handler_can_prevent_default() {
        let form = Form::new([]);
        let submitted = Rc::new(Cell::new(0));
        let count = submitted.clone();
        form.on_submit(move |event| {
            event.prevent_default();
            count.set(count.get() + 1);
        });
        assert!(!trellis_dom::testing::fire(form.root(), "submit"));
        assert_eq!(submitted.get(), 1);
    }
}
