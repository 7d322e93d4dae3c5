//! Token table pane rendering

use super::{clamp_scroll, pane_block, visible_rows};
use crate::parser::token::{Token, TokenKind};
use crate::report::{token_rows, TOKEN_HEADERS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Row, Table},
    Frame,
};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(5),
    Constraint::Min(10),
    Constraint::Length(12),
    Constraint::Length(5),
    Constraint::Length(6),
];

fn kind_style(kind: TokenKind) -> Style {
    let color = match kind {
        TokenKind::Keyword => DEFAULT_THEME.keyword,
        TokenKind::String | TokenKind::Character => DEFAULT_THEME.string,
        TokenKind::Integer | TokenKind::Decimal | TokenKind::Boolean => DEFAULT_THEME.number,
        TokenKind::Comment => DEFAULT_THEME.comment,
        TokenKind::Operator | TokenKind::Separator => DEFAULT_THEME.primary,
        TokenKind::Identifier => DEFAULT_THEME.fg,
    };
    Style::default().fg(color)
}

/// Render the token table
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(format!(" Tokens ({}) ", tokens.len()), is_focused);

    let visible_height = visible_rows(area, 1);
    clamp_scroll(scroll_offset, tokens.len(), visible_height);

    let rows: Vec<Row> = token_rows(tokens)
        .into_iter()
        .zip(tokens)
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(cells, token)| {
            let style = kind_style(token.kind);
            Row::new(
                cells
                    .into_iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        if col == 1 || col == 2 {
                            Cell::from(cell).style(style)
                        } else {
                            Cell::from(cell).style(Style::default().fg(DEFAULT_THEME.comment))
                        }
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let header = Row::new(TOKEN_HEADERS).style(
        Style::default()
            .fg(DEFAULT_THEME.header)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, COLUMN_WIDTHS).header(header).block(block);
    frame.render_widget(table, area);
}
