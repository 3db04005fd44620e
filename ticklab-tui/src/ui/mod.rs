//! Top-level UI layout — chart, trade sidebar, one-line status bar.

pub mod chart_panel;
pub mod status_bar;
pub mod trade_panel;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use ticklab_core::domain::Bar;

use crate::app::App;
use self::chart_panel::CandleChartPanel;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(24)])
        .split(rows[0]);

    let bars: Vec<Bar> = app.session.bars().cloned().collect();
    let chart = CandleChartPanel::new(
        &bars,
        app.session.position(),
        app.session.instrument().symbol(),
        &app.theme,
    );
    f.render_widget(chart, columns[0]);

    trade_panel::render(f, columns[1], app);
    status_bar::render(f, rows[1], app);
}
