//! Chart cards
//!
//! Renders the two chart models: the net worth line with a filled area
//! under the curve (a bar-type dataset behind the line), and the expense
//! categories as horizontal bars.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::charts::{ExpenseChart, NetWorthChart};
use crate::tui::app::App;

use super::ChartKind;

/// Render one chart card
pub fn render(frame: &mut Frame, app: &App, kind: ChartKind, area: Rect) {
    match kind {
        ChartKind::NetWorth => render_net_worth(frame, app, kind, area),
        ChartKind::Expenses => render_expenses(frame, app, kind, area),
    }
}

fn card_block(app: &App, kind: ChartKind) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", kind.header()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.style.border()))
}

/// Net worth: line plot over a filled area, thousands on the Y axis
fn render_net_worth(frame: &mut Frame, app: &App, kind: ChartKind, area: Rect) {
    let model = NetWorthChart::build(&app.dashboard.net_worth);

    let fill = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Bar)
        .style(Style::default().fg(app.style.fill()))
        .data(model.points());

    let line = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.style.line()))
        .data(model.points());

    let axis_style = Style::default().fg(app.style.axis());
    let x_labels: Vec<Span> = model
        .x_labels()
        .iter()
        .map(|label| Span::styled(label.clone(), axis_style))
        .collect();
    let y_labels: Vec<Span> = model
        .y_labels()
        .into_iter()
        .map(|label| Span::styled(label, axis_style))
        .collect();

    let chart = Chart::new(vec![fill, line])
        .block(card_block(app, kind))
        .x_axis(
            Axis::default()
                .title("Time")
                .style(axis_style)
                .bounds(model.x_bounds())
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Net Worth ($K)")
                .style(axis_style)
                .bounds(model.y_bounds())
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Expenses: one horizontal bar per category, values in thousands
fn render_expenses(frame: &mut Frame, app: &App, kind: ChartKind, area: Rect) {
    let model = ExpenseChart::build(&app.dashboard.expenses);

    // Bar widths are u64; keep two decimals of the $K value visible by
    // plotting in whole currency units and labelling in thousands.
    let bars: Vec<Bar> = model
        .bars()
        .iter()
        .map(|bar| {
            Bar::default()
                .label(bar.label.clone().into())
                .value((bar.amount_k * 1000.0).round().max(0.0) as u64)
                .text_value(format!("{:.2}", bar.amount_k))
                .style(Style::default().fg(app.style.bar()))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(app.style.bar())
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(card_block(app, kind))
        .direction(ratatui::layout::Direction::Horizontal)
        .bar_width(1)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
