//! Tables with row-level editing.
//!
//! A [`Table`] starts as `<table class="table"><tbody></tbody></table>`.
//! Caption, header and footer sections are created on first use and kept
//! in document order (caption, thead, tbody, tfoot).  Only [`Row`]s (or
//! other `<tr>` elements) can be appended to the body.
//!
//! Index-based operations ignore indices past the end rather than failing:
//!
//! ```
//! use trellis_widgets::{Row, Table, View};
//!
//! let table = Table::new([]);
//! table.append(&Row::new(["A"])).append(&Row::new(["B"]));
//! table.delete(7);
//! assert_eq!(table.count(), 2);
//! ```
//!
//! Tables built with [`with_animation`](crate::with_animation) fade rows in
//! and out.  Removal then waits for the row's `animationend` event.

use crate::component::{component, document, part, view, Widget};
use crate::opts::TABLE_ANIMATED;
use crate::{with_class, Child, ComponentKind, Error, Opt, Result, View};
use std::cell::Cell;
use trellis_dom::{Element, Node};

const FADE_IN: &str = "table-row-fade-in";
const FADE_OUT: &str = "table-row-fade-out";

const ANIMATION_CSS: &str = "\
@keyframes tableRowFadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes tableRowFadeOut { from { opacity: 1; } to { opacity: 0; } }
.table-row-fade-in { animation: tableRowFadeIn 0.3s ease-in; }
.table-row-fade-out { animation: tableRowFadeOut 0.3s ease-out; }
";

thread_local! {
    static STYLE_INJECTED: Cell<bool> = const { Cell::new(false) };
}

/// Add the row animation keyframes to the document body, once.
fn inject_animation_style() -> Result<()> {
    if STYLE_INJECTED.with(|injected| injected.get()) {
        return Ok(());
    }
    let doc = document();
    let Some(body) = doc.body() else {
        tracing::warn!("document has no body for the table animation styles");
        return Ok(());
    };
    let style = doc.create_element("style")?;
    style.set_text_content(ANIMATION_CSS);
    body.append_child(&style)?;
    STYLE_INJECTED.with(|injected| injected.set(true));
    tracing::debug!("injected table row animation styles");
    Ok(())
}

fn is_row(element: &Element) -> bool {
    element.tag_name().eq_ignore_ascii_case("tr")
}

fn has_tag(element: &Element, tag: &str) -> bool {
    element.tag_name().eq_ignore_ascii_case(tag)
}

/// A data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    widget: Widget,
}

component!(Table);

impl View for Table {
    fn widget(&self) -> &Widget {
        &self.widget
    }

    fn from_element(element: Element) -> Option<Self> {
        let tbody = element.children().into_iter().find(|e| has_tag(e, "tbody"))?;
        let widget = Widget::adopt(ComponentKind::Table, element)?.with_body(tbody);
        Some(Self { widget })
    }

    fn accept(&self, child: &Child) -> Result<()> {
        match child.element() {
            Some(element) if is_row(&element) => Ok(()),
            _ => Err(Error::invalid(format!("table only accepts rows, got {child:?}"))),
        }
    }
}

impl Table {
    pub fn new(opts: impl IntoIterator<Item = Opt>) -> Self {
        Self::try_new(opts).unwrap_or_else(|err| panic!("table: {err}"))
    }

    pub fn try_new(opts: impl IntoIterator<Item = Opt>) -> Result<Self> {
        let widget = Widget::create(ComponentKind::Table, "table", vec![with_class("table")], opts)?;
        let tbody = document().create_element("tbody")?;
        widget.root().append_child(&tbody)?;
        let table = Self {
            widget: widget.with_body(tbody),
        };
        if table.is_animated() {
            inject_animation_style()?;
        }
        Ok(table)
    }

    pub fn is_animated(&self) -> bool {
        self.root().class_list().contains(TABLE_ANIMATED)
    }

    fn section(&self, tag: &str) -> Option<Element> {
        self.root().children().into_iter().find(|e| has_tag(e, tag))
    }

    /// The existing `tag` section, or a new one inserted before `before`
    /// (or appended when `before` is `None`).
    fn ensure_section(&self, tag: &str, before: Option<Element>) -> Result<Element> {
        if let Some(section) = self.section(tag) {
            return Ok(section);
        }
        let section = document().create_element(tag)?;
        let before: Option<Node> = before.map(Into::into);
        self.root().insert_before(&section, before.as_ref())?;
        Ok(section)
    }

    /// Set the caption, replacing any previous content.
    pub fn caption(&self, child: impl Into<Child>) -> Result<&Self> {
        let caption = self.ensure_section("caption", self.root().first_element_child())?;
        caption.set_text_content("");
        caption.append_child(&child.into().into_node(&caption)?)?;
        Ok(self)
    }

    /// Set the header row, one `<th>` per cell.
    pub fn header<I, C>(&self, cells: I) -> Result<&Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let thead = self.ensure_section("thead", Some(self.body()))?;
        thead.set_text_content("");
        let row = cell_row("th", cells)?;
        thead.append_child(&row)?;
        Ok(self)
    }

    /// Set the footer row, one `<td>` per cell.
    pub fn footer<I, C>(&self, cells: I) -> Result<&Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let tfoot = self.ensure_section("tfoot", None)?;
        tfoot.set_text_content("");
        let row = cell_row("td", cells)?;
        tfoot.append_child(&row)?;
        Ok(self)
    }

    /// The body rows, in order.
    pub fn rows(&self) -> Vec<Element> {
        self.body().children().into_iter().filter(is_row).collect()
    }

    pub fn row(&self, index: usize) -> Option<Row> {
        self.rows().into_iter().nth(index).and_then(Row::from_element)
    }

    pub fn count(&self) -> usize {
        self.rows().len()
    }

    /// Insert `row` before the row at `index`.  `-1` appends; other
    /// indices outside the rows are ignored.
    pub fn try_insert_before(&self, index: isize, row: &Row) -> Result<&Self> {
        let rows = self.rows();
        let reference = match usize::try_from(index) {
            Ok(i) if i < rows.len() => Some(rows[i].clone()),
            Err(_) if index == -1 => None,
            _ => {
                tracing::trace!(index, count = rows.len(), "insert index out of range");
                return Ok(self);
            }
        };
        let reference: Option<Node> = reference.map(Into::into);
        self.body().insert_before(row.root(), reference.as_ref())?;
        if self.is_animated() {
            fade_in(row.root());
        }
        Ok(self)
    }

    pub fn insert_before(&self, index: isize, row: &Row) -> &Self {
        self.try_insert_before(index, row)
            .unwrap_or_else(|err| panic!("cannot insert row: {err}"))
    }

    /// Remove the row at `index`; out of range is a no-op.
    pub fn delete(&self, index: usize) -> &Self {
        if let Some(row) = self.rows().get(index) {
            if self.is_animated() {
                fade_out(row);
            } else {
                row.remove();
            }
        }
        self
    }

    /// Put `row` where the row at `index` is; out of range is a no-op.
    pub fn try_replace(&self, index: usize, row: &Row) -> Result<&Self> {
        let Some(old) = self.rows().get(index).cloned() else {
            return Ok(self);
        };
        self.body().insert_before(row.root(), Some(&*old))?;
        if self.is_animated() {
            fade_in(row.root());
            fade_out(&old);
        } else {
            old.remove();
        }
        Ok(self)
    }

    pub fn replace(&self, index: usize, row: &Row) -> &Self {
        self.try_replace(index, row)
            .unwrap_or_else(|err| panic!("cannot replace row: {err}"))
    }

    /// Make exactly the rows at `indices` active.  Negative or out of range
    /// indices select nothing, so `&[-1]` clears every row.
    pub fn set_active(&self, indices: &[isize]) -> &Self {
        for (i, row) in self.rows().into_iter().enumerate() {
            let active = isize::try_from(i).is_ok_and(|i| indices.contains(&i));
            row.class_list().toggle(ACTIVE, Some(active));
        }
        self
    }

    /// Indices of the active rows, ascending.
    pub fn active(&self) -> Vec<usize> {
        self.rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.class_list().contains(ACTIVE))
            .map(|(i, _)| i)
            .collect()
    }
}

const ACTIVE: &str = "table-active";

fn cell_row<I, C>(cell: &str, cells: I) -> Result<Element>
where
    I: IntoIterator<Item = C>,
    C: Into<Child>,
{
    let tr = part("tr", "")?;
    for child in cells {
        let td = part(cell, "")?;
        td.append_child(&child.into().into_node(&td)?)?;
        tr.append_child(&td)?;
    }
    Ok(tr)
}

fn fade_in(row: &Element) {
    row.class_list().add(FADE_IN);
    row.add_event_listener_once("animationend", |event| {
        if let Some(row) = event.current_target().and_then(|node| node.as_element()) {
            row.class_list().remove(FADE_IN);
        }
    });
}

fn fade_out(row: &Element) {
    row.class_list().remove(FADE_IN);
    row.class_list().add(FADE_OUT);
    row.add_event_listener_once("animationend", |event| {
        if let Some(row) = event.current_target().and_then(|node| node.as_element()) {
            if row.class_list().contains(FADE_OUT) {
                row.remove();
            }
        }
    });
}

/// A table row, one `<td>` per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    widget: Widget,
}

view!(Row, ComponentKind::TableRow);

impl Row {
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        Self::try_new(cells, []).unwrap_or_else(|err| panic!("row: {err}"))
    }

    pub fn try_new<I, C>(cells: I, opts: impl IntoIterator<Item = Opt>) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        let widget = Widget::create(ComponentKind::TableRow, "tr", vec![], opts)?;
        let row = Self { widget };
        for child in cells {
            row.cell(child)?;
        }
        Ok(row)
    }

    /// Append a `<td>` holding `child`.
    pub fn cell(&self, child: impl Into<Child>) -> Result<&Self> {
        let td = part("td", "")?;
        td.append_child(&child.into().into_node(&td)?)?;
        self.root().append_child(&td)?;
        Ok(self)
    }

    pub fn cells(&self) -> Vec<Element> {
        self.root().children()
    }

    pub fn set_active(&self, active: bool) -> &Self {
        self.root().class_list().toggle(ACTIVE, Some(active));
        self
    }

    pub fn toggle_active(&self) -> bool {
        self.root().class_list().toggle(ACTIVE, None)
    }

    pub fn is_active(&self) -> bool {
        self.root().class_list().contains(ACTIVE)
    }
}
