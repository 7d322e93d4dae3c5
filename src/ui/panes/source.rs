//! Source code pane rendering with syntax highlighting
//!
//! Displays the Java input with line numbers. Lines that carry a lexical or
//! syntax diagnostic get a marker and a tinted background.
//!
//! Highlighting is a small character scanner, not the real lexer, so it still
//! works on source the lexer rejects. Block comments are tracked across lines.

use super::{clamp_scroll, pane_block, visible_rows};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rustc_hash::FxHashSet;

/// Highlight one line. `in_block_comment` carries `/* ... */` state between lines.
fn highlight_source_code(line: &str, in_block_comment: &mut bool) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    let comment_style = Style::default().fg(DEFAULT_THEME.comment);

    while i < chars.len() {
        if *in_block_comment {
            let start = i;
            while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                i += 1;
            }
            if i < chars.len() {
                i += 2;
                *in_block_comment = false;
            }
            spans.push(Span::styled(collect(&chars[start..i]), comment_style));
            continue;
        }

        let c = chars[i];

        if c == '/' && matches!(chars.get(i + 1), Some('/') | Some('*')) {
            flush_word(&mut spans, &mut current_word);
            if chars[i + 1] == '/' {
                spans.push(Span::styled(collect(&chars[i..]), comment_style));
                break;
            }
            *in_block_comment = true;
            spans.push(Span::styled("/*".to_string(), comment_style));
            i += 2;
            continue;
        }

        if c == '"' || c == '\'' {
            flush_word(&mut spans, &mut current_word);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != c {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                collect(&chars[i..end]),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        // Digits and '.' stay inside a word so decimals highlight as one number
        if !c.is_alphanumeric() && c != '_' && !(c == '.' && starts_number(&current_word)) {
            flush_word(&mut spans, &mut current_word);
            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word);
    Line::from(spans)
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn starts_number(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn flush_word(spans: &mut Vec<Span<'static>>, word: &mut String) {
    if !word.is_empty() {
        let style = get_keyword_style(word);
        spans.push(Span::styled(std::mem::take(word), style));
    }
}

fn get_keyword_style(word: &str) -> Style {
    match word {
        "int" | "double" | "char" | "boolean" | "String" | "void" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "public" | "class" | "static" | "if" | "else" | "for" | "while" | "System" | "out"
        | "println" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        w if starts_number(w) => Style::default().fg(DEFAULT_THEME.number),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error_lines: &FxHashSet<usize>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Java Source ".to_string(), is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_rows(area, 0);
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    // Comment state has to be replayed from the top, not from the scroll offset
    let mut in_block_comment = false;
    let highlighted: Vec<Line> = lines
        .iter()
        .map(|line| highlight_source_code(line, &mut in_block_comment))
        .collect();

    let visible_lines: Vec<Line> = highlighted
        .into_iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, mut content_line)| {
            let line_num = idx + 1;
            let has_error = error_lines.contains(&line_num);

            let (marker, num_style) = if has_error {
                (
                    "▶",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(DEFAULT_THEME.comment))
            };

            if has_error {
                let bg = Style::default().bg(DEFAULT_THEME.error_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(bg);
                }
            }

            let mut final_spans = vec![Span::styled(format!("{}{:4} ", marker, line_num), num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_line_comment_runs_to_end() {
        let mut block = false;
        let line = highlight_source_code("x = 1; // note", &mut block);
        assert_eq!(texts(&line).last().map(String::as_str), Some("// note"));
        assert!(!block);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let mut block = false;
        highlight_source_code("int a; /* start", &mut block);
        assert!(block);
        let line = highlight_source_code("still */ a = 2;", &mut block);
        assert!(!block);
        assert_eq!(texts(&line)[0], "still */");
    }

    #[test]
    fn test_decimal_is_one_span() {
        let mut block = false;
        let line = highlight_source_code("3.14;", &mut block);
        assert_eq!(texts(&line), vec!["3.14", ";"]);
    }

    #[test]
    fn test_string_with_escaped_quote() {
        let mut block = false;
        let line = highlight_source_code(r#"s = "a\"b";"#, &mut block);
        assert!(texts(&line).contains(&r#""a\"b""#.to_string()));
    }
}
