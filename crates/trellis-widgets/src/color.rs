use std::fmt;

/// A Bootstrap theme colour.
///
/// [`Color::Transparent`] is the "no colour" value: options given it add no
/// class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Transparent,
    Primary,
    PrimarySubtle,
    Secondary,
    SecondarySubtle,
    Success,
    SuccessSubtle,
    Danger,
    DangerSubtle,
    Warning,
    WarningSubtle,
    Info,
    InfoSubtle,
    Light,
    LightSubtle,
    Dark,
    DarkSubtle,
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 19] = [
        Color::Transparent,
        Color::Primary,
        Color::PrimarySubtle,
        Color::Secondary,
        Color::SecondarySubtle,
        Color::Success,
        Color::SuccessSubtle,
        Color::Danger,
        Color::DangerSubtle,
        Color::Warning,
        Color::WarningSubtle,
        Color::Info,
        Color::InfoSubtle,
        Color::Light,
        Color::LightSubtle,
        Color::Dark,
        Color::DarkSubtle,
        Color::White,
        Color::Black,
    ];

    /// The class suffix, or `None` for [`Color::Transparent`].
    pub fn suffix(&self) -> Option<&'static str> {
        Some(match self {
            Color::Transparent => return None,
            Color::Primary => "primary",
            Color::PrimarySubtle => "primary-subtle",
            Color::Secondary => "secondary",
            Color::SecondarySubtle => "secondary-subtle",
            Color::Success => "success",
            Color::SuccessSubtle => "success-subtle",
            Color::Danger => "danger",
            Color::DangerSubtle => "danger-subtle",
            Color::Warning => "warning",
            Color::WarningSubtle => "warning-subtle",
            Color::Info => "info",
            Color::InfoSubtle => "info-subtle",
            Color::Light => "light",
            Color::LightSubtle => "light-subtle",
            Color::Dark => "dark",
            Color::DarkSubtle => "dark-subtle",
            Color::White => "white",
            Color::Black => "black",
        })
    }

    /// `prefix-suffix`, e.g. `btn-primary`.
    pub fn class(&self, prefix: &str) -> Option<String> {
        self.suffix().map(|suffix| format!("{prefix}-{suffix}"))
    }

    /// Whether `class` is `prefix-<some colour>`.
    pub(crate) fn is_class(class: &str, prefix: &str) -> bool {
        class
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|suffix| Color::ALL.iter().any(|c| c.suffix() == Some(suffix)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().unwrap_or("transparent"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(Color::Primary.class("btn").as_deref(), Some("btn-primary"));
        assert_eq!(Color::InfoSubtle.class("bg").as_deref(), Some("bg-info-subtle"));
        assert_eq!(Color::Transparent.class("btn"), None);
    }

    #[test]
    fn recognises_colour_classes() {
        assert!(Color::is_class("text-bg-danger", "text-bg"));
        assert!(Color::is_class("alert-light-subtle", "alert"));
        assert!(!Color::is_class("alert-dismissible", "alert"));
        assert!(!Color::is_class("btn-outline-primary", "btn"));
    }
}
