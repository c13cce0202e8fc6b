//! Ordered, duplicate-free set of whitespace-trimmed tokens.
//!
//! [`TokenList`] is a plain value.  It backs the headless `classList`, and
//! the options layer uses it to accumulate class tokens before they are
//! written to an element.  Element-bound views live in each backend as
//! [`ClassList`](crate::ClassList) and share these semantics.

use std::fmt;

/// An ordered list of unique, non-empty tokens.
///
/// Inputs are split on ASCII whitespace, so `add("btn btn-primary")` adds two
/// tokens and `add("  ")` adds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a space-separated attribute value such as `class="a b a"`.
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        list.add(value);
        list
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate the tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// A snapshot of the tokens.  Mutating it does not affect the list.
    pub fn values(&self) -> Vec<String> {
        self.tokens.clone()
    }

    /// The tokens joined with single spaces.
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Whether `token` (trimmed) is present.  Empty input is never present.
    pub fn contains(&self, token: &str) -> bool {
        let token = token.trim();
        !token.is_empty() && self.tokens.iter().any(|t| t == token)
    }

    /// Add every whitespace-separated token in `value` that is not already
    /// present.  Returns whether the list changed.
    pub fn add(&mut self, value: &str) -> bool {
        let mut changed = false;
        for token in value.split_ascii_whitespace() {
            if !self.tokens.iter().any(|t| t == token) {
                self.tokens.push(token.to_string());
                changed = true;
            }
        }
        changed
    }

    /// Add each value in turn.
    pub fn add_all<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .fold(false, |changed, v| self.add(v.as_ref()) | changed)
    }

    /// Remove every occurrence of each whitespace-separated token in `value`.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.tokens.len();
        for token in value.split_ascii_whitespace() {
            self.tokens.retain(|t| t != token);
        }
        before != self.tokens.len()
    }

    /// Remove every token for which `predicate` returns true.
    pub fn remove_matching(&mut self, mut predicate: impl FnMut(&str) -> bool) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| !predicate(t));
        before != self.tokens.len()
    }

    /// Flip `token`, or force it on (`Some(true)`) or off (`Some(false)`).
    ///
    /// Returns whether the token is present afterwards.  An empty token is
    /// ignored and reported absent.
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        let present = self.contains(token);
        match force {
            Some(true) => {
                self.add(token);
                true
            }
            Some(false) => {
                self.remove(token);
                false
            }
            None if present => {
                self.remove(token);
                false
            }
            None => {
                self.add(token);
                true
            }
        }
    }
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl<S: AsRef<str>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = TokenList::new();
        list.add_all(iter);
        list
    }
}

impl<S: AsRef<str>> Extend<S> for TokenList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}
