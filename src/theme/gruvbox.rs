//! Gruvbox Dark
//! https://github.com/morhetz/gruvbox

use ratatui::style::Color;

use super::ThemeColors;

pub const GRUVBOX_DARK: ThemeColors = ThemeColors {
    bg_primary: Color::Rgb(40, 40, 40),   // bg0
    bg_secondary: Color::Rgb(29, 32, 33), // bg0_h
    bg_surface: Color::Rgb(60, 56, 54),   // bg1
    bg_field: Color::Rgb(80, 73, 69),     // bg2

    text_primary: Color::Rgb(235, 219, 178),   // fg1
    text_secondary: Color::Rgb(213, 196, 161), // fg2
    text_dim: Color::Rgb(146, 131, 116),       // gray
    text_accent: Color::Rgb(215, 153, 33),     // yellow

    border_normal: Color::Rgb(80, 73, 69),  // bg2
    border_focus: Color::Rgb(215, 153, 33), // yellow
    border_dim: Color::Rgb(60, 56, 54),     // bg1

    estimate: Color::Rgb(184, 187, 38),   // green bright
    unavailable: Color::Rgb(254, 128, 25), // orange bright
    notice: Color::Rgb(131, 165, 152),    // blue
};
