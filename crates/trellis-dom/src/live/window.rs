use super::node::{listen, Node};
use super::{swallow, Document, Event, Location, MutationObserver};
use crate::html::escape;
use crate::{Error, NodeType, Result, WindowOptions};
use std::fmt;
use std::io;

/// The browser window hosting the page.
#[derive(Clone)]
pub struct Window {
    raw: web_sys::Window,
}

impl Window {
    pub fn new() -> Self {
        Self {
            raw: web_sys::window().expect("no global `window` exists"),
        }
    }

    /// The host provides the document and URL, so only `title` is applied.
    pub fn with_options(options: WindowOptions) -> Self {
        let window = Self::new();
        if let Some(title) = options.title {
            if let Some(document) = window.raw.document() {
                document.set_title(&title);
            }
        }
        if options.url.is_some() {
            tracing::debug!("ignoring url option in the browser");
        }
        window
    }

    pub fn document(&self) -> Document {
        Document::from_raw(self.raw.document().expect("window has no document"))
    }

    pub fn location(&self) -> Location {
        Location::from_raw(self.raw.location())
    }

    /// Serialize `node` as HTML into `w`, returning the bytes written.
    pub fn write<W: io::Write + ?Sized>(&self, w: &mut W, node: &Node) -> Result<usize> {
        let html = match node.node_type() {
            NodeType::Attribute => return Err(Error::invalid("cannot write an attribute node")),
            NodeType::Element => node.as_element().map(|e| e.outer_html()).unwrap_or_default(),
            NodeType::Text => escape(&node.text_content()),
            NodeType::Comment => format!("<!--{}-->", node.text_content()),
            NodeType::DocumentType => "<!DOCTYPE html>".to_string(),
            NodeType::Document => {
                let mut html = String::new();
                for child in node.child_nodes() {
                    match child.node_type() {
                        NodeType::DocumentType => html.push_str("<!DOCTYPE html>"),
                        _ => {
                            if let Some(element) = child.as_element() {
                                html.push_str(&element.outer_html());
                            }
                        }
                    }
                }
                html
            }
        };
        w.write_all(html.as_bytes())
            .map_err(|err| Error::internal(format!("write failed: {err}")))?;
        Ok(html.len())
    }

    pub fn mutation_observer(&self, callback: impl FnMut() + 'static) -> Result<MutationObserver> {
        MutationObserver::new(callback)
    }

    pub fn add_event_listener(&self, event: &str, handler: impl FnMut(&Event) + 'static) {
        listen(&self.raw, event, handler);
    }

    pub fn dispatch_event(&self, event: &Event) -> bool {
        swallow("dispatch_event", self.raw.dispatch_event(event.raw())).unwrap_or(false)
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
            .field("location", &self.location())
            .finish()
    }
}

thread_local! {
    static DEFAULT_WINDOW: Window = Window::new();
}

/// The page's window.
pub fn window() -> Window {
    DEFAULT_WINDOW.with(Window::clone)
}
