/// What a [`MutationObserver`](crate::MutationObserver) should report.
///
/// Field names follow the host `MutationObserverInit` dictionary; the live
/// backend translates them key for key and converts `attribute_filter` to a
/// host array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MutationObserverInit {
    /// Report attribute changes.
    pub attributes: bool,
    /// Only report changes to these attribute names.
    pub attribute_filter: Vec<String>,
    /// Extend observation to the whole subtree of the target.
    pub subtree: bool,
    /// Report additions and removals of children.
    pub child_list: bool,
    /// Report changes to text and comment data.
    pub character_data: bool,
}

impl MutationObserverInit {
    /// Watch children of the target and everything below it.
    pub fn subtree_changes() -> Self {
        Self {
            child_list: true,
            subtree: true,
            ..Self::default()
        }
    }

    /// Watch the named attributes on the target only.
    pub fn attributes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: true,
            attribute_filter: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
