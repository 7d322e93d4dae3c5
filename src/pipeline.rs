//! Lex → parse → translate orchestration
//!
//! Each stage runs only if the previous one produced no diagnostics. The
//! result of one run is a [`TranslationReport`] holding everything the
//! front-ends display: tokens, both diagnostic lists and, when translation
//! was allowed, the generated Python.

use crate::parser::lexer::{LexicalTables, Lexer};
use crate::parser::parse::parse_program;
use crate::parser::token::{Diagnostic, Token};
use crate::translator::{Translator, TranslatorConfig};
use tracing::{debug, info};

/// Shown in place of generated code when translation was suppressed.
pub const TRANSLATION_UNAVAILABLE: &str = "# Translation unavailable: the source contains errors";

/// Why a run stopped before producing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    Lexical,
    Syntactic,
}

/// Everything one translation request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationReport {
    pub tokens: Vec<Token>,
    pub lexical: Vec<Diagnostic>,
    pub syntactic: Vec<Diagnostic>,
    pub generated: Option<String>,
}

impl TranslationReport {
    pub fn halted_at(&self) -> Option<Halt> {
        if !self.lexical.is_empty() {
            Some(Halt::Lexical)
        } else if !self.syntactic.is_empty() {
            Some(Halt::Syntactic)
        } else {
            None
        }
    }

    pub fn is_success(&self) -> bool {
        self.generated.is_some()
    }

    /// The generated code, or the placeholder when there is none.
    pub fn output_text(&self) -> &str {
        self.generated.as_deref().unwrap_or(TRANSLATION_UNAVAILABLE)
    }

    pub fn diagnostic_count(&self) -> usize {
        self.lexical.len() + self.syntactic.len()
    }
}

/// Owns the stage configuration and runs requests through it.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    tables: LexicalTables,
    translator: Translator,
}

impl Pipeline {
    pub fn new(tables: LexicalTables, config: TranslatorConfig) -> Self {
        Self {
            tables,
            translator: Translator::new(config),
        }
    }

    /// Run one request. Nothing is carried over between calls.
    pub fn run(&self, source: &str) -> TranslationReport {
        let lexed = Lexer::with_tables(source, self.tables.clone()).tokenize();
        debug!(
            tokens = lexed.tokens.len(),
            diagnostics = lexed.diagnostics.len(),
            "lexing finished"
        );

        let mut report = TranslationReport {
            tokens: lexed.tokens,
            lexical: lexed.diagnostics,
            syntactic: Vec::new(),
            generated: None,
        };

        if !report.lexical.is_empty() {
            info!(count = report.lexical.len(), "halting: lexical errors");
            return report;
        }

        match parse_program(&report.tokens) {
            Ok(program) => {
                let text = self.translator.generate(&program);
                info!(bytes = text.len(), "translation finished");
                report.generated = Some(text);
            }
            Err(diag) => {
                info!(%diag, "halting: syntax error");
                report.syntactic.push(diag);
            }
        }

        report
    }
}

/// Run `source` through the default pipeline.
pub fn translate_source(source: &str) -> TranslationReport {
    Pipeline::default().run(source)
}
