//! # Table App Example
//!
//! An inventory table driven by a `<select>`:
//! - Header, caption and footer sections around the body rows
//! - Row editing with `insert_before`, `replace` and `delete`
//! - A change handler that marks the chosen row active
//!
//! Headless documents have no user, so the example dispatches the `change`
//! events itself before printing the page.
//!
//! Run with: `cargo run --example table_app`

use std::io::{self, Write};
use trellis::prelude::*;
use tracing_subscriber::EnvFilter;

const STOCK: &[(&str, &str)] = &[("Apples", "12"), ("Pears", "4"), ("Plums", "30")];

fn stock_table() -> Result<Table, Box<dyn std::error::Error>> {
    let table = Table::try_new([with_striped_rows(), with_hover(), with_responsive(Breakpoint::Medium)])?;
    table.caption("Fruit in stock")?;
    table.header(["Item", "Count"])?;
    for (item, count) in STOCK {
        table.try_append(&Row::try_new([*item, *count], [])?)?;
    }
    table.footer(["Total", "46"])?;
    Ok(table)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let table = stock_table()?;
    table.try_insert_before(1, &Row::try_new(["Cherries", "0"], [])?)?;
    table.try_replace(0, &Row::try_new(["Green apples", "12"], [])?)?;
    table.delete(1);

    let picker = Select::try_new([with_aria_label("Highlight a row"), with_margin(Position::BOTTOM, 3)])?;
    for index in 0..table.count() {
        let label = table
            .row(index)
            .and_then(|row| row.cells().first().map(|cell| cell.text_content()))
            .unwrap_or_default();
        picker.try_append(&SelectOption::new(&index.to_string(), label))?;
    }
    let rows = table.clone();
    picker.on_change(move |event| {
        let Some(select) = event.current_target().and_then(|node| node.component()) else {
            return;
        };
        let Some(select) = select.downcast_ref::<Select>() else {
            return;
        };
        let chosen: isize = select.value().parse().unwrap_or(-1);
        tracing::info!(row = chosen, "highlighting row");
        rows.set_active(&[chosen]);
    });

    for value in ["2", "0"] {
        picker.set_value(value);
        picker.root().dispatch_event(&Event::new("change")?);
    }

    let container = Container::try_new([with_padding(Position::ALL, 3)])?;
    container.try_append(&picker)?.try_append(&table)?;

    let window = window();
    let document = window.document();
    let body = document.body().ok_or("document has no body")?;
    body.append_child(container.root())?;

    let mut stdout = io::stdout().lock();
    window.write(&mut stdout, &document)?;
    writeln!(stdout)?;
    Ok(())
}
