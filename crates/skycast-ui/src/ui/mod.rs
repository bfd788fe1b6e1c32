pub mod components;
pub mod dashboard;
pub mod popup;

use ratatui::Frame;

use crate::app::App;

/// Draw one frame: the dashboard, with the notification popup on top
/// when one is showing.
pub fn render(f: &mut Frame, app: &App) {
    dashboard::render(f, app);

    if let Some(message) = &app.notification {
        popup::render(f, message);
    }
}
