//! The dashboard view: search bar, current conditions, and the
//! day/night forecast strip.

use chrono::{Local, TimeZone};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

use skycast_weather::theme;

use super::components::{colors, glyphs};
use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let accent = colors::theme_accent(app.current_category().and_then(theme::background_theme));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(9),    // Current conditions
            Constraint::Length(7), // Forecast strip
            Constraint::Length(1), // Hints
        ])
        .split(f.area());

    render_search_bar(f, app, chunks[0], accent);
    render_current(f, app, chunks[1], accent);
    render_forecast(f, app, chunks[2], accent);
    render_hints(f, chunks[3]);
}

fn render_search_bar(f: &mut Frame, app: &App, area: Rect, accent: ratatui::style::Color) {
    let block = Block::default()
        .title(Span::styled(
            " SkyCast ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent));

    let text = Line::from(vec![
        Span::styled("⌕ ", Style::default().fg(colors::DIMMED)),
        Span::styled(app.input.as_str(), Style::default().fg(colors::TEXT)),
        Span::styled("▏", Style::default().fg(colors::DIMMED)),
    ]);

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn render_current(f: &mut Frame, app: &App, area: Rect, accent: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(current) = &app.current else {
        let placeholder = if app.loading {
            "Fetching weather data…"
        } else {
            "No weather data"
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                placeholder,
                Style::default().fg(colors::DIMMED),
            ))),
            inner,
        );
        return;
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let now = Local::now();
    let glyph = current
        .conditions
        .first()
        .map(|c| glyphs::condition_glyph(&c.icon))
        .unwrap_or("·");
    let category = current
        .conditions
        .first()
        .map(|c| c.main.as_str())
        .unwrap_or("");

    let left = vec![
        Line::from(Span::styled(
            now.format("%I:%M %p").to_string(),
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            now.format("%A, %d %b").to_string(),
            Style::default().fg(colors::DIMMED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", glyph), Style::default().fg(accent)),
            Span::styled(
                format!("{:.1}°C ", current.temperature),
                Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(category, Style::default().fg(accent)),
        ]),
        Line::from(""),
        metric_line("Humidity", format!("{}%", current.humidity)),
        metric_line("Pressure", format!("{:.0} hPa", current.pressure)),
        metric_line("Wind Speed", format!("{:.1} m/s", current.wind_speed)),
        metric_line("Sunrise", format_local_time(current.sunrise)),
        metric_line("Sunset", format_local_time(current.sunset)),
    ];
    f.render_widget(Paragraph::new(left), halves[0]);

    let right = vec![
        Line::from(Span::styled("Location", Style::default().fg(colors::DIMMED))),
        Line::from(Span::styled(
            current.location_name.clone(),
            Style::default().fg(colors::TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "{}N {}E",
                current.coordinates.latitude, current.coordinates.longitude
            ),
            Style::default().fg(colors::DIMMED),
        )),
    ];
    f.render_widget(Paragraph::new(right).alignment(Alignment::Right), halves[1]);
}

fn render_forecast(f: &mut Frame, app: &App, area: Rect, accent: ratatui::style::Color) {
    let block = Block::default()
        .title(Span::styled(" Forecast ", Style::default().fg(accent)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::BORDER));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.forecast.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No forecast yet",
                Style::default().fg(colors::DIMMED),
            ))),
            inner,
        );
        return;
    }

    let count = app.forecast.len().min(7) as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, (day, column)) in app.forecast.iter().zip(columns.iter()).enumerate() {
        // Today's glyphs derive from the current snapshot's icon, the
        // rest from each bucket's own conditions.
        let (day_icon, night_icon) = if i == 0 {
            let icon = app
                .current
                .as_ref()
                .and_then(|c| c.conditions.first())
                .map(|c| c.icon.as_str())
                .unwrap_or("01d");
            (icon.to_string(), icon.to_string())
        } else {
            (
                day.day_conditions
                    .first()
                    .map(|c| c.icon.clone())
                    .unwrap_or_else(|| "01d".to_string()),
                day.night_conditions
                    .first()
                    .map(|c| c.icon.clone())
                    .unwrap_or_else(|| "01n".to_string()),
            )
        };

        let title = if i == 0 {
            "Today".to_string()
        } else {
            format_weekday(day.dt)
        };

        let lines = vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!(
                        "{} ",
                        glyphs::condition_glyph(&theme::day_night_icon(&day_icon, true))
                    ),
                    Style::default().fg(colors::TEXT),
                ),
                Span::styled(
                    format!("Day {:.0}°C", day.day_temp),
                    Style::default().fg(colors::TEXT),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!(
                        "{} ",
                        glyphs::condition_glyph(&theme::day_night_icon(&night_icon, false))
                    ),
                    Style::default().fg(colors::DIMMED),
                ),
                Span::styled(
                    format!("Night {:.0}°C", day.night_temp),
                    Style::default().fg(colors::DIMMED),
                ),
            ]),
        ];

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), *column);
    }
}

fn render_hints(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("type", Style::default().fg(colors::PRIMARY)),
        Span::styled(" location • ", Style::default().fg(colors::DIMMED)),
        Span::styled("enter", Style::default().fg(colors::PRIMARY)),
        Span::styled(" search • ", Style::default().fg(colors::DIMMED)),
        Span::styled("esc", Style::default().fg(colors::PRIMARY)),
        Span::styled(" quit", Style::default().fg(colors::DIMMED)),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}

fn metric_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(colors::DIMMED)),
        Span::styled(value, Style::default().fg(colors::TEXT)),
    ])
}

fn format_local_time(dt: i64) -> String {
    Local
        .timestamp_opt(dt, 0)
        .single()
        .map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

fn format_weekday(dt: i64) -> String {
    Local
        .timestamp_opt(dt, 0)
        .single()
        .map(|t| t.format("%a").to_string())
        .unwrap_or_else(|| "---".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_local_time_handles_bad_timestamp() {
        assert_eq!(format_local_time(i64::MAX), "--:--");
    }

    #[test]
    fn test_format_weekday_is_three_letters() {
        let dt = Local::now().timestamp();
        assert_eq!(format_weekday(dt).len(), 3);
    }
}
