//! Main TUI application state and logic

use super::panes::output::OutputView;
use crate::pipeline::{Pipeline, TranslationReport};
use crate::report::{render_html, simulate};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Diagnostics,
    Output,
    Tokens,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> output -> tokens -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Output => FocusedPane::Source,
            FocusedPane::Tokens => FocusedPane::Output,
            FocusedPane::Diagnostics => FocusedPane::Tokens,
        }
    }
}

/// Where `w` saves the generated code.
pub fn python_path(source: &Path) -> PathBuf {
    source.with_extension("py")
}

/// Where `h` saves the HTML report.
pub fn report_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "javabridge".to_string());
    source.with_file_name(format!("{}_report.html", stem))
}

/// The main application state
pub struct App {
    pipeline: Pipeline,

    /// File the source was read from; `r` reloads it
    pub path: PathBuf,

    pub source_code: String,

    /// Result of the last pipeline run
    pub report: TranslationReport,

    /// Source lines that carry a diagnostic
    error_lines: FxHashSet<usize>,

    pub focused_pane: FocusedPane,
    pub output_view: OutputView,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub output_scroll: usize,
    pub tokens_scroll: usize,
    pub diagnostics_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create the app and run the pipeline once over `source_code`.
    pub fn new(pipeline: Pipeline, path: PathBuf, source_code: String) -> Self {
        let report = pipeline.run(&source_code);
        let mut app = App {
            pipeline,
            path,
            source_code,
            report,
            error_lines: FxHashSet::default(),
            focused_pane: FocusedPane::Source,
            output_view: OutputView::Translation,
            source_scroll: 0,
            output_scroll: 0,
            tokens_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message: String::new(),
        };
        app.refresh_derived();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Text currently shown in the output pane.
    pub fn output_text(&self) -> String {
        match self.output_view {
            OutputView::Simulation => {
                simulate(&self.report).unwrap_or_else(|| self.report.output_text().to_string())
            }
            OutputView::Translation => self.report.output_text().to_string(),
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // 4 panes in 2 columns, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Output (top) | Tokens (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.source_code,
            &self.error_lines,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.report.lexical,
            &self.report.syntactic,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        let output = self.output_text();
        super::panes::render_output_pane(
            frame,
            right_rows[0],
            &output,
            self.output_view,
            self.report.is_success(),
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[1],
            &self.report.tokens,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.report,
            self.output_view == OutputView::Simulation,
        );
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
            FocusedPane::Tokens => &mut self.tokens_scroll,
            FocusedPane::Diagnostics => &mut self.diagnostics_scroll,
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(10);
            }
            KeyCode::Home => *self.focused_scroll() = 0,
            KeyCode::End => *self.focused_scroll() = usize::MAX,
            KeyCode::Char('s') => self.toggle_simulation(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('w') => self.save_python(),
            KeyCode::Char('h') => self.export_html(),
            _ => {}
        }
    }

    /// Switch the output pane between the generated code and the simulation view.
    pub fn toggle_simulation(&mut self) {
        if self.output_view == OutputView::Simulation {
            self.output_view = OutputView::Translation;
            self.status_message = "Showing generated Python".to_string();
        } else if self.report.is_success() {
            self.output_view = OutputView::Simulation;
            self.status_message = "Showing execution simulation".to_string();
        } else {
            self.status_message = "No valid Python code to simulate".to_string();
        }
        self.output_scroll = 0;
    }

    /// Re-read the file from disk and run the pipeline again.
    pub fn reload(&mut self) {
        match fs::read_to_string(&self.path) {
            Ok(source) => {
                self.source_code = source;
                self.rerun();
                info!(path = %self.path.display(), "reloaded");
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "reload failed");
                self.status_message = format!("Cannot reload {}: {}", self.path.display(), e);
            }
        }
    }

    /// Run the pipeline over the current source, discarding the previous result.
    pub fn rerun(&mut self) {
        self.report = self.pipeline.run(&self.source_code);
        if !self.report.is_success() {
            self.output_view = OutputView::Translation;
        }
        self.output_scroll = 0;
        self.tokens_scroll = 0;
        self.diagnostics_scroll = 0;
        self.refresh_derived();
    }

    fn refresh_derived(&mut self) {
        self.error_lines = self
            .report
            .lexical
            .iter()
            .chain(&self.report.syntactic)
            .map(|d| d.line)
            .collect();

        self.status_message = if self.report.is_success() {
            format!("Translated {} tokens", self.report.tokens.len())
        } else {
            format!("{} error(s), translation unavailable", self.report.diagnostic_count())
        };
    }

    fn save_python(&mut self) {
        let Some(code) = self.report.generated.as_deref() else {
            self.status_message = "No valid Python code to save".to_string();
            return;
        };
        let target = python_path(&self.path);
        self.status_message = write_status(&target, code);
    }

    fn export_html(&mut self) {
        let target = report_path(&self.path);
        let html = render_html(&self.source_code, &self.report);
        self.status_message = write_status(&target, &html);
    }
}

fn write_status(target: &Path, contents: &str) -> String {
    match fs::write(target, contents) {
        Ok(()) => {
            info!(path = %target.display(), "saved");
            format!("Saved {}", target.display())
        }
        Err(e) => {
            warn!(path = %target.display(), error = %e, "save failed");
            format!("Cannot save {}: {}", target.display(), e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    const VALID: &str = "public class A { public static void main(String[] a) { int x = 1; } }";

    fn app(source: &str) -> App {
        App::new(
            Pipeline::default(),
            PathBuf::from("Demo.java"),
            source.to_string(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycles() {
        let mut app = app(VALID);
        for _ in 0..4 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.focused_pane, FocusedPane::Source);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Diagnostics);
    }

    #[test]
    fn test_simulation_toggle() {
        let mut app = app(VALID);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.output_view, OutputView::Simulation);
        assert!(app.output_text().starts_with(crate::report::SIMULATION_BANNER));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.output_view, OutputView::Translation);
    }

    #[test]
    fn test_simulation_refused_without_code() {
        let mut app = app("public class A {");
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.output_view, OutputView::Translation);
        assert_eq!(app.status_message, "No valid Python code to simulate");
    }

    #[test]
    fn test_error_lines_follow_diagnostics() {
        let app = app("public class A {\n  #\n}");
        assert!(app.error_lines.contains(&2));
        assert_eq!(app.error_lines.len(), 1);
    }

    #[test]
    fn test_rerun_replaces_report() {
        let mut app = app("public class A {");
        assert!(!app.report.is_success());
        app.source_code = VALID.to_string();
        app.rerun();
        assert!(app.report.is_success());
        assert!(app.error_lines.is_empty());
    }

    #[test]
    fn test_output_paths() {
        let path = Path::new("demos/Counter.java");
        assert_eq!(python_path(path), PathBuf::from("demos/Counter.py"));
        assert_eq!(report_path(path), PathBuf::from("demos/Counter_report.html"));
    }

    #[test]
    fn test_quit() {
        let mut app = app(VALID);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
