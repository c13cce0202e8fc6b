//! Browser backend.
//!
//! Every type wraps the matching `web-sys` handle.  Host exceptions become
//! [`Error::Internal`](crate::Error::Internal) where the operation returns a
//! `Result`, and are logged at `warn` where it does not.  Event listener
//! closures are kept for the lifetime of the page.

mod character_data;
mod document;
mod element;
mod event;
mod location;
mod node;
mod observer;
mod window;

pub use character_data::{Comment, Text};
pub use document::{Document, DocumentType};
pub use element::{Attr, ClassList, Element, Style};
pub use event::Event;
pub use location::Location;
pub use node::Node;
pub use observer::MutationObserver;
pub use window::{window, Window};

use crate::Error;
use wasm_bindgen::JsValue;

/// Convert a host exception into a DOM error.
pub(crate) fn js_error(err: JsValue) -> Error {
    Error::internal(format!("{err:?}"))
}

/// Log and drop a host exception from an operation with no error channel.
pub(crate) fn swallow<T>(op: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(op, error = ?err, "host call failed");
            None
        }
    }
}
