use super::node::{invoke, Listener, Node};
use super::{Document, Event, Location, MutationObserver};
use crate::{Error, NodeType, Result, WindowOptions};
use std::cell::RefCell;
use std::fmt;
use std::io;
use std::rc::Rc;

struct WindowData {
    document: Document,
    location: Location,
    listeners: RefCell<Vec<Listener>>,
}

/// The environment entry point: a fresh HTML document and a location.
///
/// Every [`Window::new`] builds an independent document.  Widgets use the
/// thread's default window from [`window()`](crate::window).
#[derive(Clone)]
pub struct Window(Rc<WindowData>);

impl Window {
    pub fn new() -> Self {
        Self::with_options(WindowOptions::default())
    }

    pub fn with_options(options: WindowOptions) -> Self {
        let document = match Document::new_html(options.title.as_deref()) {
            Ok(document) => document,
            // The skeleton uses fixed, valid tag names.
            Err(err) => unreachable!("building the document skeleton failed: {err}"),
        };
        let location = Location::new(options.url.as_deref().unwrap_or("file:///"));
        Window(Rc::new(WindowData {
            document,
            location,
            listeners: RefCell::new(Vec::new()),
        }))
    }

    pub fn document(&self) -> Document {
        self.0.document.clone()
    }

    pub fn location(&self) -> Location {
        self.0.location.clone()
    }

    /// Serialize `node` as HTML into `w`, returning the bytes written.
    ///
    /// Documents start with `<!DOCTYPE html>`; attributes have nothing to
    /// serialize and are rejected.
    pub fn write<W: io::Write + ?Sized>(&self, w: &mut W, node: &Node) -> Result<usize> {
        let mut html = String::new();
        match node.node_type() {
            NodeType::Attribute => {
                return Err(Error::invalid("cannot write an attribute node"));
            }
            _ => super::serialize::write_node(&mut html, node),
        }
        w.write_all(html.as_bytes())
            .map_err(|err| Error::internal(format!("write failed: {err}")))?;
        Ok(html.len())
    }

    /// An observer whose callback never runs in headless mode.
    pub fn mutation_observer(&self, callback: impl FnMut() + 'static) -> Result<MutationObserver> {
        Ok(MutationObserver::new(callback))
    }

    /// Register `handler` for window-level events such as `hashchange`.
    pub fn add_event_listener(&self, event: &str, handler: impl FnMut(&Event) + 'static) {
        tracing::trace!(event, "added window event listener");
        self.0.listeners.borrow_mut().push(Listener::new(event, handler));
    }

    /// Run the window's listeners for `event`.  The event has no target.
    pub fn dispatch_event(&self, event: &Event) -> bool {
        invoke(&self.0.listeners, event);
        !event.default_prevented()
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("location", &self.0.location)
            .finish()
    }
}

thread_local! {
    static DEFAULT_WINDOW: Window = Window::new();
}

/// The thread's default window, created on first use.
pub fn window() -> Window {
    DEFAULT_WINDOW.with(Window::clone)
}

#[cfg(test)]
mod tests {
    use crate::{window, Event, Window, WindowOptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn default_window_is_shared_per_thread() {
        let a = window();
        let b = window();
        assert_eq!(a.document(), b.document());
        assert_ne!(Window::new().document(), a.document());
    }

    #[test]
    fn writes_a_document() {
        let window = Window::new();
        let mut out = Vec::new();
        let written = window.write(&mut out, &window.document()).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert_eq!(written, html.len());
        assert_eq!(
            html,
            "<!DOCTYPE html><html><head><meta></head><body></body></html>"
        );
    }

    #[test]
    fn writes_an_element() {
        let window = Window::new();
        let doc = window.document();
        let p = doc.create_element("p").unwrap();
        p.append_child(&doc.create_text_node("hi")).unwrap();
        let mut out = Vec::new();
        window.write(&mut out, &p).unwrap();
        assert_eq!(out, b"<p>hi</p>");

        let attr = doc.create_attribute("id").unwrap();
        assert!(window.write(&mut out, &attr).is_err());
    }

    #[test]
    fn url_from_options() {
        let window = Window::with_options(WindowOptions {
            url: Some("http://localhost:9000/#home".into()),
            ..WindowOptions::default()
        });
        assert_eq!(window.location().hash(), "#home");
        assert_eq!(window.location().port(), "9000");
    }

    #[test]
    fn window_listeners_run_on_dispatch() {
        let window = Window::new();
        let hashes = Rc::new(RefCell::new(Vec::new()));
        let log = hashes.clone();
        let location = window.location();
        window.add_event_listener("hashchange", move |event| {
            assert!(event.target().is_none());
            log.borrow_mut().push(location.hash());
        });
        window.location().set_hash("a");
        window.dispatch_event(&Event::new("hashchange").unwrap());
        assert_eq!(*hashes.borrow(), vec!["#a"]);
    }
}
