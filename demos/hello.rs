//! # Hello Example
//!
//! Builds a small Bootstrap page in the headless document and prints it:
//! - A dark navbar with a brand and a couple of nav items
//! - A fluid container holding an alert, a card and a button group
//! - Options bound to each component kind
//!
//! Run with: `cargo run --example hello`
//!
//! Set `RUST_LOG=trellis_widgets=trace` to follow every component created.

use std::io::{self, Write};
use trellis::prelude::*;
use tracing_subscriber::EnvFilter;

fn navbar() -> Result<NavBar, Box<dyn std::error::Error>> {
    let navbar = NavBar::try_new([with_theme(Theme::Dark), with_responsive(Breakpoint::Large)])?;
    navbar.brand("trellis")?;
    navbar.toggler("navbarNav")?;
    let home = NavItem::new("#", "Home");
    home.set_active(true);
    navbar
        .try_append(&home)?
        .try_append(&NavSpacer::new())?
        .try_append(&NavItem::new("#docs", "Docs"))?;
    Ok(navbar)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let container = Container::try_new([with_breakpoint(Breakpoint::Fluid), with_padding(Position::ALL, 3)])?;

    let alert = Alert::try_dismissible([with_color(Color::Success)])?;
    alert.heading("Well done!")?;
    alert.try_append("The page was rendered without a browser.")?;

    let card = Card::try_new([with_margin(Position::TOP, 3)])?;
    card.heading("Components")?;
    let intro = Para::try_new([with_class("card-text")])?;
    intro.try_append("Every widget is a root element plus a body for its children.")?;
    card.try_append(&intro)?;
    card.footer("trellis")?;

    let group = ButtonGroup::try_new([with_aria_label("Actions")])?;
    let save = Button::try_new([with_color(Color::Primary)])?;
    save.try_append("Save")?;
    let cancel = Button::try_outline(Color::Secondary, [])?;
    cancel.try_append("Cancel")?;
    group.try_append(&save)?.try_append(&cancel)?;

    container
        .try_append(&alert)?
        .try_append(&card)?
        .try_append(&group)?;

    let window = window();
    let document = window.document();
    let body = document.body().ok_or("document has no body")?;
    body.append_child(navbar()?.root())?;
    body.append_child(container.root())?;

    let mut stdout = io::stdout().lock();
    window.write(&mut stdout, &document)?;
    writeln!(stdout)?;
    Ok(())
}
