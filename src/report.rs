//! Exported views of a [`TranslationReport`]
//!
//! - [`render_text`]: plain-text bundle (source, output, token table, both
//!   diagnostic tables)
//! - [`render_html`]: the same bundle as a standalone HTML page
//! - [`render_tokens`], [`render_diagnostics`]: the individual text tables
//! - [`simulate`]: the "execution simulation" view. It only re-displays the
//!   generated code between a banner and a note; nothing is run.

use crate::parser::token::{Diagnostic, Token};
use crate::pipeline::TranslationReport;
use std::fmt::Write;

pub const SIMULATION_BANNER: &str = "Python execution simulation:";
pub const SIMULATION_NOTE: &str =
    "Note: this is a visual simulation only. Save the code and run it with a Python interpreter.";

/// Simulation view, or `None` when there is no generated code to show.
pub fn simulate(report: &TranslationReport) -> Option<String> {
    let code = report.generated.as_deref()?;
    Some(format!(
        "{}\n\n{}\n\n---\n{}",
        SIMULATION_BANNER,
        code.trim_end(),
        SIMULATION_NOTE
    ))
}

/// One row per token: index, lexeme, kind, line, column.
pub fn token_rows(tokens: &[Token]) -> Vec<[String; 5]> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            [
                (i + 1).to_string(),
                display_lexeme(&t.lexeme),
                t.kind.to_string(),
                t.line.to_string(),
                t.column.to_string(),
            ]
        })
        .collect()
}

/// One row per diagnostic: index, offending text, message, line, column.
pub fn diagnostic_rows(diagnostics: &[Diagnostic]) -> Vec<[String; 5]> {
    diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| {
            [
                (i + 1).to_string(),
                display_lexeme(&d.offending_text),
                d.message.clone(),
                d.line.to_string(),
                d.column.to_string(),
            ]
        })
        .collect()
}

pub const TOKEN_HEADERS: [&str; 5] = ["No.", "Lexeme", "Kind", "Line", "Column"];
pub const DIAGNOSTIC_HEADERS: [&str; 5] = ["No.", "Text", "Message", "Line", "Column"];

/// Make control characters visible in a single table cell.
pub fn display_lexeme(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
        .replace('\r', "\\r")
}

/// Plain-text report.
pub fn render_text(source: &str, report: &TranslationReport) -> String {
    let mut out = String::new();

    section(&mut out, "Java source");
    out.push_str(source.trim_end());
    out.push_str("\n\n");

    section(&mut out, "Python translation");
    out.push_str(report.output_text().trim_end());
    out.push_str("\n\n");

    section(&mut out, &format!("Tokens: {}", report.tokens.len()));
    out.push_str(&render_tokens(&report.tokens));

    text_diagnostics(&mut out, "Lexical errors", &report.lexical);
    text_diagnostics(&mut out, "Syntax errors", &report.syntactic);

    out
}

/// Token table alone, as `--emit tokens` prints it.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    text_table(&mut out, &TOKEN_HEADERS, &token_rows(tokens));
    out
}

/// Both diagnostic tables, as `--emit diagnostics` prints them.
pub fn render_diagnostics(report: &TranslationReport) -> String {
    let mut out = String::new();
    text_diagnostics(&mut out, "Lexical errors", &report.lexical);
    text_diagnostics(&mut out, "Syntax errors", &report.syntactic);
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "== {} ==", title);
}

fn text_diagnostics(out: &mut String, title: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        section(out, &format!("{}: none", title));
        out.push('\n');
    } else {
        section(out, &format!("{}: {}", title, diagnostics.len()));
        text_table(out, &DIAGNOSTIC_HEADERS, &diagnostic_rows(diagnostics));
    }
}

/// Left-aligned columns sized to their widest cell.
fn text_table(out: &mut String, headers: &[&str; 5], rows: &[[String; 5]]) {
    let mut widths = (*headers).map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut line = |cells: [&str; 5]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    };

    line(*headers);
    for row in rows {
        line([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]);
    }
    out.push('\n');
}

/// Standalone HTML report. All user text is escaped.
pub fn render_html(source: &str, report: &TranslationReport) -> String {
    let mut out = String::new();
    out.push_str(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>JavaBridge report</title>\n<style>\n\
         body { font-family: Arial, sans-serif; margin: 20px; }\n\
         table { width: 100%; border-collapse: collapse; margin: 10px 0; }\n\
         th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
         th { background-color: #f2f2f2; }\n\
         pre { background-color: #f5f5f5; padding: 15px; border-radius: 5px; }\n\
         .errors { color: red; }\n.success { color: green; }\n\
         </style>\n</head>\n<body>\n\
         <h1>JavaBridge report: Java to Python translation</h1>\n",
    );

    let _ = writeln!(out, "<h2>Java source</h2>\n<pre>{}</pre>", escape_html(source));
    let _ = writeln!(
        out,
        "<h2>Python translation</h2>\n<pre>{}</pre>",
        escape_html(report.output_text())
    );

    let _ = writeln!(out, "<h2>Tokens: {}</h2>", report.tokens.len());
    html_table(&mut out, &TOKEN_HEADERS, &token_rows(&report.tokens));

    html_diagnostics(&mut out, "Lexical errors", &report.lexical);
    html_diagnostics(&mut out, "Syntax errors", &report.syntactic);

    out.push_str("</body>\n</html>\n");
    out
}

fn html_diagnostics(out: &mut String, title: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        let _ = writeln!(out, "<h2 class=\"success\">{}: none</h2>", title);
    } else {
        let _ = writeln!(
            out,
            "<h2 class=\"errors\">{}: {}</h2>",
            title,
            diagnostics.len()
        );
        html_table(out, &DIAGNOSTIC_HEADERS, &diagnostic_rows(diagnostics));
    }
}

fn html_table(out: &mut String, headers: &[&str; 5], rows: &[[String; 5]]) {
    out.push_str("<table>\n<thead>\n<tr>");
    for header in headers {
        let _ = write!(out, "<th>{}</th>", header);
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{translate_source, TRANSLATION_UNAVAILABLE};

    const OK_SOURCE: &str =
        "public class R { public static void main(String[] a) { int x = 1 < 2; } }";

    #[test]
    fn test_simulation_requires_output() {
        let good = translate_source(OK_SOURCE);
        let view = simulate(&good).unwrap();
        assert!(view.starts_with(SIMULATION_BANNER));
        assert!(view.contains("def main():"));
        assert!(view.ends_with(SIMULATION_NOTE));

        let bad = translate_source("public class R {");
        assert_eq!(simulate(&bad), None);
    }

    #[test]
    fn test_html_escapes_source() {
        let report = translate_source(OK_SOURCE);
        let html = render_html(OK_SOURCE, &report);
        assert!(html.contains("1 &lt; 2"));
        assert!(!html.contains("1 < 2"));
        assert!(html.contains("<h2 class=\"success\">Lexical errors: none</h2>"));
        assert!(html.contains(&format!("<h2>Tokens: {}</h2>", report.tokens.len())));
    }

    #[test]
    fn test_text_report_lists_errors() {
        let source = "public class R { # }";
        let report = translate_source(source);
        let text = render_text(source, &report);
        assert!(text.contains("== Lexical errors: 1 =="));
        assert!(text.contains("unrecognized character"));
        assert!(text.contains("== Syntax errors: none =="));
        assert!(text.contains(TRANSLATION_UNAVAILABLE));
    }

    #[test]
    fn test_token_table_is_aligned() {
        let report = translate_source("int longName");
        let table = render_tokens(&report.tokens);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "No.  Lexeme    Kind        Line  Column");
        assert_eq!(lines[1], "1    int       KEYWORD     1     1");
        assert_eq!(lines[2], "2    longName  IDENTIFIER  1     5");
    }

    #[test]
    fn test_token_rows_are_numbered_from_one() {
        let report = translate_source("x\n\"a\nb\"");
        let rows = token_rows(&report.tokens);
        assert_eq!(rows[0], ["1", "x", "IDENTIFIER", "1", "1"].map(String::from));
        assert_eq!(rows[1][1], "a\\nb");
        assert_eq!(rows[1][3], "2");
    }
}
