use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use url::Url;

const DEFAULT_URL: &str = "file:///";

fn parse(href: &str) -> Url {
    Url::parse(href).unwrap_or_else(|err| {
        tracing::warn!(href, error = %err, "unparsable location, using {DEFAULT_URL}");
        Url::parse(DEFAULT_URL).unwrap_or_else(|_| unreachable!("{DEFAULT_URL} is a valid URL"))
    })
}

/// `value` without its leading `marker`, or `None` when nothing is left.
fn strip_marker(value: &str, marker: char) -> Option<&str> {
    let value = value.strip_prefix(marker).unwrap_or(value);
    (!value.is_empty()).then_some(value)
}

/// `part` with `marker` in front, or empty.
fn with_marker(part: Option<&str>, marker: char) -> String {
    match part {
        Some(part) if !part.is_empty() => format!("{marker}{part}"),
        _ => String::new(),
    }
}

/// The window's URL.  Every part is mutable and readable; navigation and
/// reloading do nothing without a browser.
#[derive(Clone)]
pub struct Location(Rc<RefCell<Url>>);

impl Location {
    pub(crate) fn new(href: &str) -> Self {
        Location(Rc::new(RefCell::new(parse(href))))
    }

    /// The fragment including its leading `#`, or empty.
    pub fn hash(&self) -> String {
        with_marker(self.0.borrow().fragment(), '#')
    }

    /// Set the fragment.  A missing `#` is added.
    pub fn set_hash(&self, hash: &str) {
        self.0.borrow_mut().set_fragment(strip_marker(hash, '#'));
    }

    pub fn href(&self) -> String {
        self.0.borrow().as_str().to_string()
    }

    /// Navigate to `href`, resolved against the current URL, so values
    /// starting with `#`, `?` or `/` only replace the trailing parts.
    pub fn set_href(&self, href: &str) {
        let next = self.0.borrow().join(href);
        match next {
            Ok(url) => *self.0.borrow_mut() = url,
            Err(err) => tracing::warn!(href, error = %err, "ignoring unparsable location"),
        }
    }

    pub fn hostname(&self) -> String {
        self.0.borrow().host_str().unwrap_or_default().to_string()
    }

    pub fn pathname(&self) -> String {
        self.0.borrow().path().to_string()
    }

    /// The explicit port, or empty for the scheme's default.
    pub fn port(&self) -> String {
        self.0.borrow().port().map(|port| port.to_string()).unwrap_or_default()
    }

    /// Scheme with its trailing colon, e.g. `file:`.
    pub fn protocol(&self) -> String {
        format!("{}:", self.0.borrow().scheme())
    }

    /// The query including its leading `?`, or empty.
    pub fn search(&self) -> String {
        with_marker(self.0.borrow().query(), '?')
    }

    pub fn set_search(&self, search: &str) {
        self.0.borrow_mut().set_query(strip_marker(search, '?'));
    }

    pub fn reload(&self) {
        tracing::debug!("reload is a no-op without a browser");
    }

    /// Navigate to `url` without a history entry.  Only the stored URL
    /// changes in headless mode.
    pub fn replace(&self, url: &str) {
        self.set_href(url);
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Location").field(&self.href()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_file_root() {
        let location = Location::new("file:///");
        assert_eq!(location.protocol(), "file:");
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.hostname(), "");
        assert_eq!(location.hash(), "");
        assert_eq!(location.href(), "file:///");
    }

    #[test]
    fn parses_every_part() {
        let location = Location::new("http://localhost:8080/app/index.html?page=2#users/42");
        assert_eq!(location.protocol(), "http:");
        assert_eq!(location.hostname(), "localhost");
        assert_eq!(location.port(), "8080");
        assert_eq!(location.pathname(), "/app/index.html");
        assert_eq!(location.search(), "?page=2");
        assert_eq!(location.hash(), "#users/42");
        assert_eq!(location.href(), "http://localhost:8080/app/index.html?page=2#users/42");
    }

    #[test]
    fn hash_is_mutable() {
        let location = Location::new("file:///");
        location.set_hash("home");
        assert_eq!(location.hash(), "#home");
        location.set_hash("#user/1");
        assert_eq!(location.hash(), "#user/1");
        assert_eq!(location.href(), "file:///#user/1");
        location.set_hash("");
        assert_eq!(location.hash(), "");
    }

    #[test]
    fn relative_hrefs() {
        let location = Location::new("https://example.com/a?x=1#top");
        location.set_href("#bottom");
        assert_eq!(location.href(), "https://example.com/a?x=1#bottom");
        location.set_href("/b?y=2");
        assert_eq!(location.href(), "https://example.com/b?y=2");
        location.set_href("?z=3");
        assert_eq!(location.href(), "https://example.com/b?z=3");
        location.replace("http://other.org");
        assert_eq!(location.hostname(), "other.org");
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.href(), "http://other.org/");
        location.reload();
    }

    #[test]
    fn search_is_mutable() {
        let location = Location::new("http://localhost/list#top");
        location.set_search("page=3");
        assert_eq!(location.search(), "?page=3");
        assert_eq!(location.href(), "http://localhost/list?page=3#top");
        location.set_search("");
        assert_eq!(location.search(), "");
        assert_eq!(location.port(), "");
    }

    #[test]
    fn bad_urls_fall_back_to_the_file_root() {
        let location = Location::new("not a url");
        assert_eq!(location.href(), "file:///");
        location.set_href("http://[::1");
        assert_eq!(location.href(), "file:///");
    }
}
