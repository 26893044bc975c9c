//! Nord
//!
//! Polar Night backgrounds, Snow Storm text, Aurora accents.
//! https://www.nordtheme.com/

use ratatui::style::Color;

use super::ThemeColors;

pub const NORD: ThemeColors = ThemeColors {
    bg_primary: Color::Rgb(46, 52, 64),   // nord0
    bg_secondary: Color::Rgb(59, 66, 82), // nord1
    bg_surface: Color::Rgb(67, 76, 94),   // nord2
    bg_field: Color::Rgb(76, 86, 106),    // nord3

    text_primary: Color::Rgb(236, 239, 244),   // nord6
    text_secondary: Color::Rgb(216, 222, 233), // nord4
    text_dim: Color::Rgb(129, 161, 193),       // nord9
    text_accent: Color::Rgb(136, 192, 208),    // nord8

    border_normal: Color::Rgb(76, 86, 106),  // nord3
    border_focus: Color::Rgb(136, 192, 208), // nord8
    border_dim: Color::Rgb(67, 76, 94),      // nord2

    estimate: Color::Rgb(163, 190, 140),    // nord14
    unavailable: Color::Rgb(235, 203, 139), // nord13
    notice: Color::Rgb(180, 142, 173),      // nord15
};
