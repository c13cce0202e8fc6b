use super::swallow;
use std::fmt;

/// The host `window.location`.  Getters return empty strings when the host
/// refuses access.
#[derive(Clone)]
pub struct Location {
    raw: web_sys::Location,
}

impl Location {
    pub(crate) fn from_raw(raw: web_sys::Location) -> Self {
        Self { raw }
    }

    pub fn hash(&self) -> String {
        swallow("location.hash", self.raw.hash()).unwrap_or_default()
    }

    pub fn set_hash(&self, hash: &str) {
        swallow("location.hash", self.raw.set_hash(hash));
    }

    pub fn href(&self) -> String {
        swallow("location.href", self.raw.href()).unwrap_or_default()
    }

    pub fn set_href(&self, href: &str) {
        swallow("location.href", self.raw.set_href(href));
    }

    pub fn hostname(&self) -> String {
        swallow("location.hostname", self.raw.hostname()).unwrap_or_default()
    }

    pub fn pathname(&self) -> String {
        swallow("location.pathname", self.raw.pathname()).unwrap_or_default()
    }

    pub fn port(&self) -> String {
        swallow("location.port", self.raw.port()).unwrap_or_default()
    }

    pub fn protocol(&self) -> String {
        swallow("location.protocol", self.raw.protocol()).unwrap_or_default()
    }

    pub fn search(&self) -> String {
        swallow("location.search", self.raw.search()).unwrap_or_default()
    }

    pub fn set_search(&self, search: &str) {
        swallow("location.search", self.raw.set_search(search));
    }

    pub fn reload(&self) {
        swallow("location.reload", self.raw.reload());
    }

    pub fn replace(&self, url: &str) {
        swallow("location.replace", self.raw.replace(url));
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Location").field(&self.href()).finish()
    }
}
