//! Positions, sizes and the other small enums options take.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// A set of sides and alignments, combined with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Position: u8 {
        const TOP = 1;
        const BOTTOM = 1 << 1;
        const START = 1 << 2;
        const END = 1 << 3;
        const CENTER = 1 << 4;
        const MIDDLE = 1 << 5;

        /// All four sides.
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits() | Self::START.bits() | Self::END.bits();
    }
}

impl Position {
    pub const NONE: Position = Position::empty();

    /// The sides in the order top, bottom, start, end, with their
    /// abbreviation.
    pub(crate) fn sides(self) -> impl Iterator<Item = (Position, &'static str)> {
        [
            (Position::TOP, "t"),
            (Position::BOTTOM, "b"),
            (Position::START, "s"),
            (Position::END, "e"),
        ]
        .into_iter()
        .filter(move |(side, _)| self.contains(*side))
    }

    /// The word for a single flag.
    pub(crate) fn name(self) -> Option<&'static str> {
        [
            (Position::TOP, "top"),
            (Position::BOTTOM, "bottom"),
            (Position::START, "start"),
            (Position::END, "end"),
            (Position::CENTER, "center"),
            (Position::MIDDLE, "middle"),
        ]
        .into_iter()
        .find(|(flag, _)| *flag == self)
        .map(|(_, name)| name)
    }
}

/// Component size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    #[default]
    Default,
    Small,
    Large,
}

/// A responsive breakpoint.  `Default` means "all widths".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    #[default]
    Default,
    Small,
    Medium,
    Large,
    XLarge,
    XXLarge,
    /// Full width at every breakpoint.
    Fluid,
}

impl Breakpoint {
    pub fn suffix(&self) -> Option<&'static str> {
        Some(match self {
            Breakpoint::Default => return None,
            Breakpoint::Small => "sm",
            Breakpoint::Medium => "md",
            Breakpoint::Large => "lg",
            Breakpoint::XLarge => "xl",
            Breakpoint::XXLarge => "xxl",
            Breakpoint::Fluid => "fluid",
        })
    }
}

/// Light or dark colour scheme, for `data-bs-theme`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// CSS cursor keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    #[default]
    Auto,
    Default,
    Pointer,
    Wait,
    Text,
    Move,
    NotAllowed,
    Help,
    Crosshair,
    Grab,
    Grabbing,
    ZoomIn,
    ZoomOut,
    None,
    Progress,
    Copy,
    Alias,
    ContextMenu,
    Cell,
    VerticalText,
    NResize,
    EResize,
    SResize,
    WResize,
    NeResize,
    NwResize,
    SeResize,
    SwResize,
    EwResize,
    NsResize,
    NeswResize,
    NwseResize,
    ColResize,
    RowResize,
    AllScroll,
}

impl Cursor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cursor::Auto => "auto",
            Cursor::Default => "default",
            Cursor::Pointer => "pointer",
            Cursor::Wait => "wait",
            Cursor::Text => "text",
            Cursor::Move => "move",
            Cursor::NotAllowed => "not-allowed",
            Cursor::Help => "help",
            Cursor::Crosshair => "crosshair",
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
            Cursor::ZoomIn => "zoom-in",
            Cursor::ZoomOut => "zoom-out",
            Cursor::None => "none",
            Cursor::Progress => "progress",
            Cursor::Copy => "copy",
            Cursor::Alias => "alias",
            Cursor::ContextMenu => "context-menu",
            Cursor::Cell => "cell",
            Cursor::VerticalText => "vertical-text",
            Cursor::NResize => "n-resize",
            Cursor::EResize => "e-resize",
            Cursor::SResize => "s-resize",
            Cursor::WResize => "w-resize",
            Cursor::NeResize => "ne-resize",
            Cursor::NwResize => "nw-resize",
            Cursor::SeResize => "se-resize",
            Cursor::SwResize => "sw-resize",
            Cursor::EwResize => "ew-resize",
            Cursor::NsResize => "ns-resize",
            Cursor::NeswResize => "nesw-resize",
            Cursor::NwseResize => "nwse-resize",
            Cursor::ColResize => "col-resize",
            Cursor::RowResize => "row-resize",
            Cursor::AllScroll => "all-scroll",
        }
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_combine() {
        let p = Position::TOP | Position::START;
        assert!(p.contains(Position::TOP));
        assert!(!p.contains(Position::TOP | Position::END));
        assert!(p.intersects(Position::START | Position::END));
        assert_eq!(p & Position::START, Position::START);
        assert!(Position::ALL.contains(p));
        assert!(Position::NONE.is_empty());
        assert_eq!(p.difference(Position::TOP), Position::START);
        assert_eq!(Position::default(), Position::NONE);
    }

    #[test]
    fn only_single_flags_have_names() {
        assert_eq!(Position::MIDDLE.name(), Some("middle"));
        assert_eq!((Position::TOP | Position::END).name(), None);
        assert_eq!(Position::NONE.name(), None);
    }

    #[test]
    fn sides_are_ordered() {
        let sides: Vec<_> = (Position::END | Position::TOP).sides().map(|(_, s)| s).collect();
        assert_eq!(sides, ["t", "e"]);
    }

    #[test]
    fn breakpoint_suffixes() {
        assert_eq!(Breakpoint::Default.suffix(), None);
        assert_eq!(Breakpoint::XXLarge.suffix(), Some("xxl"));
        assert_eq!(Breakpoint::Fluid.suffix(), Some("fluid"));
    }
}
