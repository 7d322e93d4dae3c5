// JavaBridge: Java-subset to Python translator

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use javabridge::error::{AppError, AppResult};
use javabridge::parser::lexer::LexicalTables;
use javabridge::pipeline::{Pipeline, TranslationReport};
use javabridge::report;
use javabridge::translator::TranslatorConfig;
use javabridge::ui::App;

#[derive(Parser, Debug)]
#[command(name = "javabridge")]
#[command(about = "Translate a Java-subset program into Python", long_about = None)]
struct Cli {
    /// Java source file
    file: PathBuf,

    /// Print one view and exit instead of opening the terminal UI
    #[arg(long, value_enum)]
    emit: Option<Emit>,

    /// Write the emitted view to this file instead of stdout
    #[arg(short, long, requires = "emit")]
    output: Option<PathBuf>,

    /// Spaces per indentation level in the generated Python
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=16))]
    indent: u16,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "javabridge=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// Generated Python code
    Python,
    /// Token table
    Tokens,
    /// Lexical and syntax error tables
    Diagnostics,
    /// Plain-text report
    Text,
    /// HTML report
    Html,
    /// Execution simulation view
    Simulate,
}

fn main() {
    if let Err(error) = real_main() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn real_main() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let source = fs::read_to_string(&cli.file).map_err(|source| AppError::Read {
        path: cli.file.clone(),
        source,
    })?;
    debug!(path = %cli.file.display(), bytes = source.len(), "read source");

    let pipeline = Pipeline::new(
        LexicalTables::default(),
        TranslatorConfig {
            indent_width: usize::from(cli.indent),
        },
    );

    match cli.emit {
        Some(emit) => {
            let report = pipeline.run(&source);
            let text = render(emit, &source, &report)?;
            match &cli.output {
                Some(path) => write_file(path, &text),
                None => {
                    print!("{text}");
                    Ok(())
                }
            }
        }
        None => run_tui(pipeline, cli.file, source),
    }
}

/// `RUST_LOG` wins over `--log-level`. Logs go to stderr so they never mix
/// with emitted output.
fn init_logging(default_filter: &str) -> AppResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter).map_err(|e| AppError::LogFilter {
            filter: default_filter.to_string(),
            message: e.to_string(),
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn render(emit: Emit, source: &str, outcome: &TranslationReport) -> AppResult<String> {
    let text = match emit {
        Emit::Python => with_newline(outcome.generated.as_deref().ok_or_else(|| failed(outcome))?),
        Emit::Simulate => with_newline(&report::simulate(outcome).ok_or_else(|| failed(outcome))?),
        Emit::Tokens => report::render_tokens(&outcome.tokens),
        Emit::Diagnostics => report::render_diagnostics(outcome),
        Emit::Text => report::render_text(source, outcome),
        Emit::Html => report::render_html(source, outcome),
    };
    Ok(text)
}

/// Print the diagnostics that blocked translation, then build the error.
fn failed(outcome: &TranslationReport) -> AppError {
    for diagnostic in outcome.lexical.iter().chain(&outcome.syntactic) {
        eprintln!("{diagnostic}");
    }
    AppError::TranslationFailed {
        count: outcome.diagnostic_count(),
    }
}

fn with_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

fn write_file(path: &Path, text: &str) -> AppResult<()> {
    fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote output");
    Ok(())
}

fn run_tui(pipeline: Pipeline, path: PathBuf, source: String) -> AppResult<()> {
    let mut app = App::new(pipeline, path, source);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(AppError::from)
}
