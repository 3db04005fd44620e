//! Bottom status bar — key hints plus the latest status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = vec![
        Span::styled(
            " space:run b:buy s:sell c:close +/-:lots [/]:bars p:period q:quit",
            Style::default().fg(theme.muted),
        ),
        Span::raw(" | "),
    ];

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => Style::default().fg(theme.accent),
            StatusLevel::Warning => Style::default().fg(theme.warning),
            StatusLevel::Error => Style::default().fg(theme.negative),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
