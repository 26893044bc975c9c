//! Theme system
//!
//! Three dark palettes: Tokyo Night, Nord, Gruvbox Dark

mod gruvbox;
mod nord;
mod tokyo_night;

pub use gruvbox::GRUVBOX_DARK;
pub use nord::NORD;
pub use tokyo_night::TOKYO_NIGHT;

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeKind {
    #[default]
    TokyoNight,
    Nord,
    GruvboxDark,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 3] = [ThemeKind::TokyoNight, ThemeKind::Nord, ThemeKind::GruvboxDark];

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::TokyoNight => "Tokyo Night",
            ThemeKind::Nord => "Nord",
            ThemeKind::GruvboxDark => "Gruvbox Dark",
        }
    }

    /// Parse theme from name string (case-insensitive, ignores spaces and dashes)
    pub fn from_name(name: &str) -> Self {
        let normalized = name.to_lowercase().replace([' ', '-', '_'], "");
        match normalized.as_str() {
            "tokyonight" | "tokyo" => ThemeKind::TokyoNight,
            "nord" => ThemeKind::Nord,
            "gruvbox" | "gruvboxdark" => ThemeKind::GruvboxDark,
            other => {
                tracing::warn!("Unknown theme {:?}, using {}", other, ThemeKind::default().name());
                ThemeKind::default()
            }
        }
    }

    pub fn next(&self) -> Self {
        let i = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn colors(&self) -> &'static ThemeColors {
        match self {
            ThemeKind::TokyoNight => &TOKYO_NIGHT,
            ThemeKind::Nord => &NORD,
            ThemeKind::GruvboxDark => &GRUVBOX_DARK,
        }
    }
}

/// Theme color palette
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    // Backgrounds
    pub bg_primary: Color,
    pub bg_secondary: Color,
    pub bg_surface: Color,
    pub bg_field: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_dim: Color,
    pub text_accent: Color,

    // Borders
    pub border_normal: Color,
    pub border_focus: Color,
    pub border_dim: Color,

    // Estimate readouts
    pub estimate: Color,
    pub unavailable: Color,
    pub notice: Color,
}

impl ThemeColors {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Hints, labels
    pub fn text_dimmed(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border_normal)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focus)
    }

    pub fn border_dimmed(&self) -> Style {
        Style::default().fg(self.border_dim)
    }

    /// Input field body; focused fields get the accent color
    pub fn field(&self, focused: bool) -> Style {
        let style = Style::default().bg(self.bg_field);
        if focused {
            style.fg(self.text_accent).add_modifier(Modifier::BOLD)
        } else {
            style.fg(self.text_primary)
        }
    }

    /// A computed duration or date
    pub fn estimate(&self) -> Style {
        Style::default()
            .fg(self.estimate)
            .add_modifier(Modifier::BOLD)
    }

    /// The N/A sentinel
    pub fn unavailable(&self) -> Style {
        Style::default().fg(self.unavailable)
    }

    /// Transient status line (e.g. "copied")
    pub fn notice(&self) -> Style {
        Style::default().fg(self.notice)
    }

    /// Key hint style (the key itself)
    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.text_accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel(&self) -> Style {
        Style::default().bg(self.bg_surface)
    }

    pub fn background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Header/footer background
    pub fn bar(&self) -> Style {
        Style::default().bg(self.bg_secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_themes_unique_names() {
        let names: HashSet<_> = ThemeKind::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), ThemeKind::ALL.len());
    }

    #[test]
    fn test_from_name_round_trips_display_name() {
        for theme in ThemeKind::ALL {
            assert_eq!(ThemeKind::from_name(theme.name()), theme);
        }
    }

    #[test]
    fn test_from_name_flexible_matching() {
        assert_eq!(ThemeKind::from_name("tokyo-night"), ThemeKind::TokyoNight);
        assert_eq!(ThemeKind::from_name("TOKYO"), ThemeKind::TokyoNight);
        assert_eq!(ThemeKind::from_name("gruvbox_dark"), ThemeKind::GruvboxDark);
        assert_eq!(ThemeKind::from_name("NoRd"), ThemeKind::Nord);
    }

    #[test]
    fn test_from_name_unknown_returns_default() {
        assert_eq!(ThemeKind::from_name("dracula"), ThemeKind::TokyoNight);
        assert_eq!(ThemeKind::from_name(""), ThemeKind::TokyoNight);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut theme = ThemeKind::default();
        let mut seen = HashSet::new();
        for _ in 0..ThemeKind::ALL.len() {
            seen.insert(theme);
            theme = theme.next();
        }
        assert_eq!(seen.len(), ThemeKind::ALL.len());
        assert_eq!(theme, ThemeKind::default());
    }

    #[test]
    fn test_distinct_primary_backgrounds() {
        let backgrounds: HashSet<_> = ThemeKind::ALL
            .iter()
            .map(|t| format!("{:?}", t.colors().bg_primary))
            .collect();
        assert_eq!(backgrounds.len(), ThemeKind::ALL.len());
    }

    #[test]
    fn test_estimate_and_unavailable_differ() {
        for theme in ThemeKind::ALL {
            let colors = theme.colors();
            assert_ne!(colors.estimate(), colors.unavailable(), "{:?}", theme);
        }
    }

    #[test]
    fn test_field_focus_styles() {
        let colors = ThemeKind::Nord.colors();
        let focused = colors.field(true);
        let idle = colors.field(false);
        assert_eq!(focused.fg, Some(colors.text_accent));
        assert!(focused.add_modifier.contains(Modifier::BOLD));
        assert_eq!(idle.fg, Some(colors.text_primary));
        assert_eq!(idle.bg, Some(colors.bg_field));
    }
}
