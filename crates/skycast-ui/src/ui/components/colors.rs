//! Shared color palette. The accent color tracks the background theme
//! key of the current conditions, standing in for the original's
//! full-screen background imagery.

use ratatui::style::Color;

pub const PRIMARY: Color = Color::Cyan;
pub const TEXT: Color = Color::White;
pub const DIMMED: Color = Color::DarkGray;
pub const BORDER: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;

/// Accent color for a theme key from
/// `skycast_weather::theme::background_theme`.
pub fn theme_accent(theme: Option<&str>) -> Color {
    match theme {
        Some("clear") => Color::Yellow,
        Some("cloudy") => Color::Gray,
        Some("rainy") | Some("drizzle") => Color::Blue,
        Some("stormy") | Some("squally") | Some("tornado") | Some("hurricane") => Color::Magenta,
        Some("snowy") | Some("blizzard") => Color::White,
        Some("haze") | Some("mist") | Some("foggy") | Some("smoky") => Color::DarkGray,
        Some("dusty") | Some("sandy") | Some("ashy") => Color::LightYellow,
        _ => PRIMARY,
    }
}
