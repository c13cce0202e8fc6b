use crate::ComponentKind;

/// Errors raised while building or composing widgets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An option was used on a component kind it does not apply to.
    #[error("{option} cannot be used with {kind} (expected {})", kind_list(.expected))]
    InvalidOption {
        option: &'static str,
        kind: ComponentKind,
        expected: &'static [ComponentKind],
    },

    /// A bad argument: a wrong child for a strict container, an out of range
    /// heading level, a non-positive padding and the like.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A DOM operation failed.
    #[error(transparent)]
    Dom(#[from] trellis_dom::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }

    /// Whether this is a caller error rather than a backend failure.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Error::InvalidOption { .. }
                | Error::InvalidParameter(_)
                | Error::Dom(trellis_dom::Error::InvalidParameter(_))
        )
    }
}

fn kind_list(kinds: &[ComponentKind]) -> String {
    kinds
        .iter()
        .map(ComponentKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Shorthand for results carrying a widget [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_option_names_the_kinds() {
        let err = Error::InvalidOption {
            option: "with_breakpoint",
            kind: ComponentKind::Button,
            expected: &[ComponentKind::Container],
        };
        assert_eq!(err.to_string(), "with_breakpoint cannot be used with button (expected container)");
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn dom_errors_keep_their_class() {
        let err = Error::from(trellis_dom::Error::NotFound("row".into()));
        assert!(!err.is_invalid_parameter());
        assert_eq!(err.to_string(), "not found: row");
    }
}
