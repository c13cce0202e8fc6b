//! The application shell: a root `<div>` attached to the document body.

use crate::component::{document, view, Widget};
use crate::{with_id, ComponentKind, Opt, Result, Router, View};

/// Settings for [`App`].
///
/// ```
/// use trellis_widgets::{App, AppOptions, View};
///
/// let app = App::with_options(AppOptions { id: "root".into() }, []).unwrap();
/// assert_eq!(app.root().get_attribute("id").as_deref(), Some("root"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// Id of the root element.
    pub id: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            id: "trellis-app".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    widget: Widget,
}

view!(App, ComponentKind::App);

impl App {
    pub fn new() -> Self {
        Self::try_new([]).unwrap_or_else(|err| panic!("app: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        Self::with_options(AppOptions::default(), opts)
    }

    pub fn with_options(options: AppOptions, opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::App, "div", vec![with_id(options.id)], opts)?;
        match document().body() {
            Some(body) => {
                body.append_child(widget.root())?;
            }
            None => tracing::warn!("document has no body; app root left detached"),
        }
        Ok(Self { widget })
    }

    /// Mount `router` and keep it in step with the location fragment.
    pub fn with_router(&self, router: &Router) -> Result<&Self> {
        self.try_append(router)?;
        let window = trellis_dom::window();
        let listener = router.clone();
        let location = window.location();
        window.add_event_listener("hashchange", move |_| {
            listener.navigate(&location.hash());
        });
        router.navigate(&window.location().hash());
        Ok(self)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Route;
    use trellis_dom::{Component, Event};

    #[test]
    fn mounts_on_the_body() {
        let app = App::new();
        assert_eq!(app.id(), "trellis-app");
        let body = document().body().unwrap();
        assert_eq!(app.root().parent_element(), Some(body));
        assert_eq!(app.root().get_attribute("data-component").as_deref(), Some("app"));
    }

    #[test]
    fn hashchange_drives_the_router() {
        let window = trellis_dom::window();
        window.location().set_hash("");
        let app = App::with_options(AppOptions { id: "routed".into() }, []).unwrap();
        let router = Router::new([]);
        let home = Route::new(["^$"]);
        let about = Route::new(["^about$"]);
        router.add_route(&home).unwrap().add_route(&about).unwrap();
        app.with_router(&router).unwrap();
        assert!(home.is_visible());

        window.location().set_hash("about");
        window.dispatch_event(&Event::new("hashchange").unwrap());
        assert!(!home.is_visible());
        assert!(about.is_visible());
        window.location().set_hash("");
    }
}
