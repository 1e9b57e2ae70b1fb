//! Stats row
//!
//! Three cards: the savings rate with its pass/fail mark, the subscriptions
//! list, and the top payees list. The two lists scroll independently; the
//! focused one gets the highlighted border.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::metrics::{meets_target, NamedAmounts, SAVINGS_RATE_TARGET};
use crate::tui::app::{App, FocusedList};
use crate::tui::layout::StatsLayout;

/// Render the stats row
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = StatsLayout::new(area);

    render_savings(frame, app, layout.savings);
    render_list(
        frame,
        app,
        layout.subscriptions,
        " Subscriptions ",
        &app.dashboard.subscriptions,
        app.subscriptions_scroll,
        app.focused_list == FocusedList::Subscriptions,
    );
    render_list(
        frame,
        app,
        layout.payees,
        " Top Payees ",
        &app.dashboard.top_payees,
        app.payees_scroll,
        app.focused_list == FocusedList::Payees,
    );
}

/// Render the savings rate card
fn render_savings(frame: &mut Frame, app: &App, area: Rect) {
    let rate = app.dashboard.savings_rate;

    let (mark, color) = if meets_target(rate) {
        ('✓', app.style.success())
    } else {
        ('✗', app.style.danger())
    };

    let value = if rate == f64::NEG_INFINITY {
        format!("n/a {mark}")
    } else {
        format!("{rate:.0}% {mark}")
    };

    let block = Block::default()
        .title(" Savings Rate ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.style.border()));

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("target {SAVINGS_RATE_TARGET:.0}%"),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(card, area);
}

/// Render one scrollable name/amount list card
#[allow(clippy::too_many_arguments)]
fn render_list(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &'static str,
    list: &NamedAmounts,
    scroll: usize,
    focused: bool,
) {
    let border_color = if focused {
        Color::Cyan
    } else {
        app.style.border()
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if list.is_empty() {
        let text = Paragraph::new("No entries")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = list
        .iter()
        .skip(scroll)
        .map(|(name, amount)| {
            let amount = format!("{amount:>10.2}");
            let name_width = width.saturating_sub(amount.len() + 1);
            ListItem::new(Line::from(vec![
                Span::raw(format!("{name:<name_width$.name_width$} ")),
                Span::styled(amount, Style::default().fg(Color::Gray)),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
