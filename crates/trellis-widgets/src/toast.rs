use crate::component::{child_with_class, component, part, Widget};
use crate::{host, with_attribute, with_class, with_role, Child, ComponentKind, Opt, Result, View};
use trellis_dom::Element;

/// A transient notification.
///
/// Children go into `.toast-body`; [`header`](Toast::header) adds a
/// `.toast-header` above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    widget: Widget,
}

component!(Toast);

impl View for Toast {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let body = child_with_class(&element, "toast-body")?;
        let widget = Widget::adopt(ComponentKind::Toast, element)?.with_body(body);
        Some(Self { widget })
    }
}

impl Toast {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("toast: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(
            ComponentKind::Toast,
            "div",
            vec![
                with_class("toast"),
                with_role("alert"),
                with_attribute("aria-live", "assertive"),
                with_attribute("aria-atomic", "true"),
            ],
            opts,
        )?;
        let body = part("div", "toast-body")?;
        widget.root().append_child(&body)?;
        Ok(Self {
            widget: widget.with_body(body),
        })
    }

    /// Append to `.toast-header`, creating it before the body on first use.
    pub fn header(&self, child: impl Into<Child>) -> Result<&Self> {
        let header = match child_with_class(self.root(), "toast-header") {
            Some(header) => header,
            None => {
                let header = part("div", "toast-header")?;
                self.root().insert_before(&header, Some(&self.body()))?;
                header
            }
        };
        header.append_child(&child.into().into_node(&header)?)?;
        Ok(self)
    }

    pub fn show(&self) -> &Self {
        host::invoke("Toast", self.root(), "show", true);
        self
    }

    pub fn hide(&self) -> &Self {
        host::invoke("Toast", self.root(), "hide", false);
        self
    }

    /// Drop the script-side instance.  The element stays in the document.
    pub fn dispose(&self) -> &Self {
        host::invoke("Toast", self.root(), "dispose", false);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_color, with_timeout, without_animation, Button, Color};
    use std::time::Duration;
    use trellis_dom::testing::tag_names;

    #[test]
    fn toast_markup() {
        let toast = Toast::new([
            with_color(Color::Light),
            with_timeout(Duration::from_millis(1500)),
            without_animation(),
        ]);
        toast.append("Saved");
        let expected = concat!(
            r#"<div class="toast text-bg-light" role="alert" aria-live="assertive" aria-atomic="true" "#,
            r#"data-bs-autohide="true" data-bs-delay="1500" data-bs-animation="false" data-component="toast">"#,
            r#"<div class="toast-body">Saved</div></div>"#,
        );
        assert_eq!(toast.root().outer_html(), expected);
    }

    #[test]
    fn header_is_created_once_before_body() {
        let toast = Toast::new([]);
        toast.header("Title").unwrap();
        toast.header(&Button::close([])).unwrap();
        assert_eq!(tag_names(toast.root()), ["div", "div"]);
        let header = toast.root().first_element_child().unwrap();
        assert_eq!(header.class_name(), "toast-header");
        assert_eq!(tag_names(&header), ["button"]);
        toast.show().hide().dispose();
        assert!(toast.root().parent_node().is_none());
    }
}
