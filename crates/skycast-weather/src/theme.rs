//! Presentation-boundary mappings from condition descriptors to theme
//! keys and provider icon URLs. Pure lookups; nothing here touches the
//! network.

const ICON_URL_BASE: &str = "https://openweathermap.org/img/wn/";

/// Background theme key for a condition category, or `None` when the
/// category has no themed background.
pub fn background_theme(main: &str) -> Option<&'static str> {
    let theme = match main.to_ascii_lowercase().as_str() {
        "clear" => "clear",
        "clouds" => "cloudy",
        "rain" => "rainy",
        "thunderstorm" => "stormy",
        "snow" => "snowy",
        "haze" => "haze",
        "mist" => "mist",
        "drizzle" => "drizzle",
        "fog" => "foggy",
        "smoke" => "smoky",
        "dust" => "dusty",
        "sand" => "sandy",
        "ash" => "ashy",
        "squall" => "squally",
        "tornado" => "tornado",
        "hurricane" => "hurricane",
        "blizzard" => "blizzard",
        _ => return None,
    };
    Some(theme)
}

/// Rewrite a provider icon id's final character to its day (`d`) or
/// night (`n`) variant.
pub fn day_night_icon(icon: &str, is_day: bool) -> String {
    let mut variant = icon.to_string();
    variant.pop();
    variant.push(if is_day { 'd' } else { 'n' });
    variant
}

/// URL of the provider's 2x PNG for an icon id. Constructed only; the
/// dashboard never fetches it.
pub fn icon_url(icon: &str) -> String {
    format!("{}{}@2x.png", ICON_URL_BASE, icon)
}
