//! Status bar rendering with keybindings and pipeline state

use crate::pipeline::{Halt, TranslationReport};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Badge text and color for the outcome of the last run.
fn outcome_badge(report: &TranslationReport) -> (String, Color) {
    match report.halted_at() {
        None => (" TRANSLATED ".to_string(), DEFAULT_THEME.success),
        Some(Halt::Lexical) => (
            format!(" LEXICAL ERRORS: {} ", report.lexical.len()),
            DEFAULT_THEME.error,
        ),
        Some(Halt::Syntactic) => (" SYNTAX ERROR ".to_string(), DEFAULT_THEME.error),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    report: &TranslationReport,
    is_simulating: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let (badge, badge_color) = outcome_badge(report);

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in [
        (" ⇥ ", " focus "),
        (" ↑/↓ ", " scroll "),
        (" s ", " simulate "),
        (" r ", " reload "),
        (" w ", " save .py "),
        (" h ", " html "),
        (" q ", " quit "),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    if is_simulating {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ SIMULATION ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::translate_source;

    #[test]
    fn test_outcome_badge() {
        let ok = translate_source("public class A { public static void main(String[] a) { } }");
        assert_eq!(outcome_badge(&ok).0, " TRANSLATED ");

        let lex = translate_source("public class A { $ $ }");
        assert_eq!(outcome_badge(&lex).0, " LEXICAL ERRORS: 2 ");

        let syn = translate_source("public class A { }");
        assert_eq!(outcome_badge(&syn).0, " SYNTAX ERROR ");
    }
}
