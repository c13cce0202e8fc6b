//! Hash routing.
//!
//! A [`Router`] keeps an ordered list of [`Route`]s.  Each route owns a
//! hidden `<div>` and a set of regular expressions over the URL fragment.
//! [`Router::navigate`] hides every route and then shows each one with a
//! matching pattern, so overlapping patterns show several routes at once.
//!
//! Routes hold compiled patterns that cannot be recovered from markup, so
//! neither type is rebuilt from an element by the component registry.

use crate::component::{component, part, Widget};
use crate::{Child, ComponentKind, Error, Opt, Result, View};
use regex::Regex;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use trellis_dom::Element;

const HIDDEN: &str = "display:none";
const SHOWN: &str = "display:block";

/// A page of content shown when the fragment matches one of its patterns.
#[derive(Clone)]
pub struct Route {
    widget: Widget,
    patterns: Rc<[Regex]>,
    /// Whether any pattern was given, compiled or not.
    declared: bool,
}

component!(Route);

impl View for Route {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(_element: Element) -> Option<Self> {
        None
    }
}

impl Route {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::try_new(patterns, []).unwrap_or_else(|err| panic!("route: {err}"))
    }

    /// Patterns that fail to compile are logged and dropped.  A route whose
    /// patterns all failed matches nothing.
    pub fn try_new<I, S>(patterns: I, opts: impl IntoIterator<Item = Opt>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut declared = false;
        let mut compiled = Vec::new();
        for pattern in patterns {
            declared = true;
            match Regex::new(pattern.as_ref()) {
                Ok(regex) => compiled.push(regex),
                Err(err) => {
                    tracing::warn!(pattern = pattern.as_ref(), error = %err, "dropping route pattern");
                }
            }
        }
        let widget = Widget::create(ComponentKind::Route, "div", vec![], opts)?;
        widget.root().set_attribute("style", HIDDEN);
        Ok(Self {
            widget,
            patterns: compiled.into(),
            declared,
        })
    }

    /// Whether `hash` (with or without its leading `#`) selects this route.
    /// A route without patterns matches only the empty fragment.
    pub fn matches(&self, hash: &str) -> bool {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        if !self.declared {
            return hash.is_empty();
        }
        self.patterns.iter().any(|pattern| pattern.is_match(hash))
    }

    pub fn is_visible(&self) -> bool {
        self.root().get_attribute("style").as_deref() == Some(SHOWN)
    }

    fn set_visible(&self, visible: bool) {
        self.root()
            .set_attribute("style", if visible { SHOWN } else { HIDDEN });
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<&str> = self.patterns.iter().map(Regex::as_str).collect();
        f.debug_struct("Route")
            .field("widget", &self.widget)
            .field("patterns", &patterns)
            .finish()
    }
}

/// The route table.
#[derive(Debug, Clone)]
pub struct Router {
    widget: Widget,
    routes: Rc<RefCell<Vec<Route>>>,
}

component!(Router);

impl View for Router {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(_element: Element) -> Option<Self> {
        None
    }

    fn accept(&self, child: &Child) -> Result<()> {
        if child.kind() == Some(ComponentKind::Route) {
            return Err(Error::invalid("routes are added with add_route"));
        }
        Ok(())
    }
}

impl Router {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("router: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::Router, "div", vec![], opts)?;
        let body = part("div", "container-fluid")?;
        widget.root().append_child(&body)?;
        Ok(Self {
            widget: widget.with_body(body),
            routes: Rc::default(),
        })
    }

    /// Append `route` to the table and its element to the body.
    pub fn add_route(&self, route: &Route) -> Result<&Self> {
        self.body().append_child(route.root())?;
        self.routes.borrow_mut().push(route.clone());
        Ok(self)
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.borrow().clone()
    }

    /// Show the routes matching `hash` and hide the rest.
    pub fn navigate(&self, hash: &str) -> &Self {
        let routes = self.routes.borrow();
        for route in routes.iter() {
            route.set_visible(false);
        }
        let mut shown = 0;
        for route in routes.iter().filter(|route| route.matches(hash)) {
            route.set_visible(true);
            shown += 1;
        }
        tracing::debug!(hash, shown, "navigated");
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{with_id, Para};
    use trellis_dom::testing::tag_names;

    fn home_and_user() -> (Router, Route, Route) {
        let router = Router::new([]);
        let home = Route::new(["^home$", "^$"]);
        let user = Route::new([r"^user/\d+$"]);
        router.add_route(&home).unwrap().add_route(&user).unwrap();
        (router, home, user)
    }

    #[test]
    fn navigate_shows_matching_routes() {
        let (router, home, user) = home_and_user();
        router.navigate("");
        assert!(home.is_visible());
        assert!(!user.is_visible());

        router.navigate("#user/42");
        assert!(!home.is_visible());
        assert!(user.is_visible());
        assert_eq!(user.root().get_attribute("style").as_deref(), Some("display:block"));

        router.navigate("#xyz");
        assert!(!home.is_visible());
        assert!(!user.is_visible());
        assert_eq!(home.root().get_attribute("style").as_deref(), Some("display:none"));
    }

    #[test]
    fn overlapping_patterns_show_every_match() {
        let (router, home, user) = home_and_user();
        let any = Route::new([".*"]);
        router.add_route(&any).unwrap();
        router.navigate("home");
        assert!(home.is_visible() && any.is_visible());
        assert!(!user.is_visible());
    }

    #[test]
    fn routes_without_patterns_match_the_empty_hash() {
        let route = Route::new(Vec::<&str>::new());
        assert!(route.matches(""));
        assert!(route.matches("#"));
        assert!(!route.matches("#home"));
    }

    #[test]
    fn bad_patterns_are_dropped() {
        let broken = Route::new(["(unclosed"]);
        assert!(!broken.matches(""));
        assert!(!broken.matches("(unclosed"));

        let partial = Route::new(["(unclosed", "^ok$"]);
        assert!(partial.matches("#ok"));
    }

    #[test]
    fn structure() {
        let router = Router::new([with_id("pages")]);
        let route = Route::new(["^a$"]);
        route.append(&Para::new([]));
        router.add_route(&route).unwrap();
        assert_eq!(tag_names(router.root()), ["div"]);
        assert_eq!(
            router.root().outer_html(),
            concat!(
                r#"<div id="pages" data-component="router"><div class="container-fluid">"#,
                r#"<div data-component="route" style="display:none">"#,
                r#"<p data-component="para"></p></div></div></div>"#,
            )
        );
        assert_eq!(router.routes().len(), 1);
    }

    #[test]
    fn routes_are_not_appended_directly() {
        let router = Router::new([]);
        let err = router.try_append(&Route::new(["^a$"])).unwrap_err();
        assert!(err.is_invalid_parameter());
        router.append("loading");
        assert_eq!(router.body().text_content(), "loading");
    }
}
