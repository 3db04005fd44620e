//! Trade sidebar — live price, open position, account, pending settings.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let session = &app.session;
    let muted = Style::default().fg(theme.muted);
    let text = Style::default().fg(theme.text_primary);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(session.instrument().symbol().to_string(), text.add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {:.2}", session.instrument().price()),
            Style::default().fg(theme.accent),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        if session.is_running() { "LIVE" } else { "STOPPED" },
        Style::default().fg(if session.is_running() { theme.positive } else { theme.muted }),
    )));
    lines.push(Line::default());

    match session.position() {
        Some(position) => {
            lines.push(Line::from(vec![
                Span::styled("Position  ", muted),
                Span::styled(
                    format!("{} x{}", position.direction.label(), position.contracts),
                    Style::default().fg(theme.direction_color(position.direction)),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Entry     ", muted),
                Span::styled(format!("{:.2}", position.entry_price), text),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Open PnL  ", muted),
                Span::styled(
                    format!("{:+.2}", position.profit_loss),
                    Style::default().fg(theme.pnl_color(position.profit_loss)),
                ),
            ]));
        }
        None => lines.push(Line::from(Span::styled("No open position", muted))),
    }
    lines.push(Line::default());

    if let Some(realized) = app.last_realized {
        lines.push(Line::from(vec![
            Span::styled("Last close", muted),
            Span::styled(
                format!(" {realized:+.2}"),
                Style::default().fg(theme.pnl_color(realized)),
            ),
        ]));
    }
    let total = session.account().total_pnl();
    lines.push(Line::from(vec![
        Span::styled("Account   ", muted),
        Span::styled(
            format!("{total:+.2}"),
            Style::default().fg(theme.pnl_color(total)).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());

    // Pending settings, applied on the next start.
    lines.push(Line::from(Span::styled("Next start", muted)));
    lines.push(Line::from(vec![
        Span::styled("  bars    ", muted),
        Span::styled(app.pending.bars_to_load.to_string(), text),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  period  ", muted),
        Span::styled(app.pending.periodicity.to_string(), text),
    ]));
    lines.push(Line::from(vec![
        Span::styled("  lots    ", muted),
        Span::styled(app.contracts.to_string(), text),
    ]));

    let block = Block::default()
        .title(" Trade ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
