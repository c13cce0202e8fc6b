use crate::component::{view, Widget};
use crate::{ComponentKind, Error, Opt, Result, View};

/// A section heading, `<h1>` to `<h6>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    widget: Widget,
}

view!(Heading, ComponentKind::Heading);

impl Heading {
    /// # Panics
    ///
    /// Panics unless `level` is between 1 and 6.
    pub fn new(level: u8, opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(level, opts).unwrap_or_else(|err| panic!("heading: {err}"))
    }

    pub fn try_new(level: u8, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(Error::invalid(format!("heading level {level} is not between 1 and 6")));
        }
        Widget::create(ComponentKind::Heading, &format!("h{level}"), vec![], opts)
            .map(|widget| Self { widget })
    }

    /// The level, read back from the tag name.
    pub fn level(&self) -> u8 {
        let tag = self.root().tag_name();
        tag.get(1..).and_then(|n| n.parse().ok()).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        let h = Heading::new(3, []);
        h.append("Section");
        assert_eq!(h.level(), 3);
        assert_eq!(h.root().outer_html(), r#"<h3 data-component="heading">Section</h3>"#);
        assert!(Heading::try_new(0, []).unwrap_err().is_invalid_parameter());
        assert!(Heading::try_new(7, []).is_err());
    }

    #[test]
    #[should_panic(expected = "heading level 9")]
    fn bad_level_panics() {
        Heading::new(9, []);
    }
}
