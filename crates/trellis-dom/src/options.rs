/// Configuration for a [`Window`](crate::Window).
///
/// All fields default to "unset".  Use struct update syntax to override only
/// what you need:
///
/// ```rust,ignore
/// use trellis_dom::{Window, WindowOptions};
///
/// let window = Window::with_options(WindowOptions {
///     title: Some("Dashboard".into()),
///     ..WindowOptions::default()
/// });
/// ```
///
/// The live backend reads everything from the host and ignores these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowOptions {
    /// Text for a `<title>` element in the document head.
    pub title: Option<String>,
    /// Initial location, e.g. `"http://localhost:8080/app#users"`.
    /// Defaults to `file:///`.
    pub url: Option<String>,
}
