//! # Router Example
//!
//! A two-page site switched by the URL fragment:
//! - An [`App`] shell mounted on the document body
//! - A [`Router`] whose routes are plain containers of content
//! - Navigation through the window's `hashchange` event
//!
//! The example changes the fragment and dispatches `hashchange` the way a
//! browser would, printing the visible page after each step.
//!
//! Run with: `cargo run --example router`

use std::io::{self, Write};
use trellis::prelude::*;
use tracing_subscriber::EnvFilter;

fn page(title: &str, text: &str, patterns: &[&str]) -> Result<Route, Box<dyn std::error::Error>> {
    let heading = Heading::try_new(2, [])?;
    heading.try_append(title)?;
    let lead = Para::try_new([with_class("lead")])?;
    lead.try_append(text)?;
    let route = Route::try_new(patterns.iter().copied(), [])?;
    route.try_append(&heading)?.try_append(&lead)?;
    Ok(route)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let nav = Nav::try_new([with_pills()])?;
    nav.try_append(&NavItem::new("#", "Home"))?
        .try_append(&NavItem::new("#user/42", "Profile"))?;

    let home = page("Home", "Pick a page from the nav.", &["^$", "^home$"])?;
    let profile = page("Profile", "User 42 signed in.", &[r"^user/\d+$"])?;
    let router = Router::try_new([with_margin(Position::TOP, 3)])?;
    router.add_route(&home)?.add_route(&profile)?;

    let app = App::try_new([with_padding(Position::ALL, 3)])?;
    app.try_append(&nav)?;
    app.with_router(&router)?;

    let window = window();
    let mut stdout = io::stdout().lock();
    for hash in ["", "#user/42", "#missing"] {
        window.location().set_hash(hash);
        window.dispatch_event(&Event::new("hashchange")?);
        let visible: Vec<String> = router
            .routes()
            .iter()
            .filter(|route| route.is_visible())
            .filter_map(|route| route.root().first_element_child())
            .map(|heading| heading.text_content())
            .collect();
        writeln!(stdout, "{:>10} -> {visible:?}", if hash.is_empty() { "(empty)" } else { hash })?;
    }

    window.location().set_hash("");
    window.dispatch_event(&Event::new("hashchange")?);
    window.write(&mut stdout, app.root())?;
    writeln!(stdout)?;
    Ok(())
}
