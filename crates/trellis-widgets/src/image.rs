use crate::component::{view, Widget};
use crate::{with_attribute, ComponentKind, Opt, Result};

/// `<img src="…">`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    widget: Widget,
}

view!(Image, ComponentKind::Image);

impl Image {
    pub fn new(src: &str, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(src, opts).unwrap_or_else(|err| panic!("image: {err}"))
    }

    pub fn try_new(src: &str, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Widget::create(ComponentKind::Image, "img", vec![with_attribute("src", src)], opts)
            .map(|widget| Self { widget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_class, View};

    #[test]
    fn void_element() {
        let img = Image::new("/logo.png", [with_class("img-fluid")]);
        assert_eq!(
            img.root().outer_html(),
            r#"<img class="img-fluid" src="/logo.png" data-component="image">"#
        );
    }
}
