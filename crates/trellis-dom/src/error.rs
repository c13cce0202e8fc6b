/// Errors raised by DOM operations on either backend.
///
/// The variants form a closed taxonomy.  Widget code wraps these in its own
/// error type, so match on the variant rather than on the message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A caller passed something the operation cannot accept: a missing
    /// target, a malformed tag name, or a node that would create a cycle.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Reserved for registries keyed by name.
    #[error("duplicate entry: {0}")]
    DuplicateEntry(String),
    /// A node was expected in the tree but is not there.
    #[error("not found: {0}")]
    NotFound(String),
    /// The operation exists on the interface but not on this backend.
    #[error("not implemented: {0}")]
    NotImplemented(String),
    /// A backend invariant was violated, or the host raised an exception.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter(message.into())
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Error::Internal(message.into())
    }
}

/// Shorthand for results carrying a DOM [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_class() {
        let err = Error::NotFound("child".into());
        assert_eq!(err.to_string(), "not found: child");
        let err = Error::invalid("nil target");
        assert_eq!(err.to_string(), "invalid parameter: nil target");
    }
}
