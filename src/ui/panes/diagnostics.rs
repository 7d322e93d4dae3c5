//! Lexical and syntax error tables

use super::{clamp_scroll, pane_block, visible_rows};
use crate::parser::token::Diagnostic;
use crate::report::{diagnostic_rows, DIAGNOSTIC_HEADERS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Row, Table},
    Frame,
};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Length(12),
    Constraint::Min(20),
    Constraint::Length(5),
    Constraint::Length(6),
];

/// Render both diagnostic tables side by side in one focusable pane.
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    lexical: &[Diagnostic],
    syntactic: &[Diagnostic],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let visible_height = visible_rows(halves[0], 1);
    clamp_scroll(scroll_offset, lexical.len(), visible_height);

    render_table(
        frame,
        halves[0],
        " Lexical Errors ",
        lexical,
        is_focused,
        *scroll_offset,
    );
    render_table(frame, halves[1], " Syntax Errors ", syntactic, is_focused, 0);
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    diagnostics: &[Diagnostic],
    is_focused: bool,
    offset: usize,
) {
    let block = pane_block(format!("{}({}) ", title, diagnostics.len()), is_focused);

    if diagnostics.is_empty() {
        let paragraph = Paragraph::new("(none)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<Row> = diagnostic_rows(diagnostics)
        .into_iter()
        .skip(offset)
        .take(visible_rows(area, 1))
        .map(|cells| Row::new(cells).style(Style::default().fg(DEFAULT_THEME.error)))
        .collect();

    let header = Row::new(DIAGNOSTIC_HEADERS).style(
        Style::default()
            .fg(DEFAULT_THEME.header)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, COLUMN_WIDTHS).header(header).block(block);
    frame.render_widget(table, area);
}
