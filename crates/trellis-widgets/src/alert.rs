use crate::component::{part, view, Widget};
use crate::{with_class, with_role, Child, ComponentKind, Opt, Result, View};

/// A contextual feedback message: `<div class="alert" role="alert">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    widget: Widget,
}

view!(Alert, ComponentKind::Alert);

impl Alert {
    /// # Panics
    ///
    /// Panics if an option does not apply to alerts.
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("alert: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Self::build(vec![], opts)
    }

    /// An alert with a close button.
    pub fn dismissible(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_dismissible(opts).unwrap_or_else(|err| panic!("alert: {err}"))
    }

    pub fn try_dismissible(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let alert = Self::build(vec![with_class("alert-dismissible fade show")], opts)?;
        let close = part("button", "")?;
        close.set_attribute("type", "button");
        close.set_attribute("class", "btn-close");
        close.set_attribute("data-bs-dismiss", "alert");
        close.set_attribute("aria-label", "Close");
        alert.root().append_child(&close)?;
        Ok(alert)
    }

    fn build(extra: Vec<Opt>, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let mut base = vec![with_class("alert"), with_role("alert")];
        base.extend(extra);
        let widget = Widget::create(ComponentKind::Alert, "div", base, opts)?;
        Ok(Self { widget })
    }

    /// Put an `<h4 class="alert-heading">` at the top, below the close
    /// button if there is one.
    pub fn heading(&self, child: impl Into<Child>) -> Result<&Self> {
        let heading = part("h4", "alert-heading")?;
        heading.append_child(&child.into().into_node(&heading)?)?;
        let root = self.root();
        let reference = match root.first_element_child() {
            Some(first) if first.class_list().contains("btn-close") => first.next_sibling(),
            _ => root.first_child(),
        };
        root.insert_before(&heading, reference.as_ref())?;
        Ok(self)
    }

    pub fn is_dismissible(&self) -> bool {
        self.root().class_list().contains("alert-dismissible")
    }
}
