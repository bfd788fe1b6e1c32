//! Text stand-ins for the provider's weather icons. The real icon URLs
//! are constructed by `skycast_weather::theme`; a terminal renders a
//! glyph instead.

/// Glyph for a provider icon id ("01d", "10n", ...). The two leading
/// digits select the condition family, the suffix day or night.
pub fn condition_glyph(icon: &str) -> &'static str {
    let night = icon.ends_with('n');
    match icon.get(..2) {
        Some("01") => {
            if night {
                "☾"
            } else {
                "☀"
            }
        }
        Some("02") => "⛅",
        Some("03") | Some("04") => "☁",
        Some("09") | Some("10") => "☂",
        Some("11") => "⚡",
        Some("13") => "❄",
        Some("50") => "≋",
        _ => "·",
    }
}
