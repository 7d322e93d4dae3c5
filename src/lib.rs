//! # Introduction
//!
//! JavaBridge translates a small, strictly structured subset of Java (one
//! public class with a single `main` method) into equivalent Python source
//! text.
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program tree → Translator → Python
//! ```
//!
//! 1. [`parser`]: tokenises the source, reporting every lexical problem with
//!    its position, then validates the token stream with a fail-fast
//!    predictive parser that stops at the first syntax error.
//! 2. [`translator`]: walks the accepted tree and emits Python with
//!    four-space indentation and a runnable `main()` entry point.
//! 3. [`pipeline`]: runs the stages in order, skipping later stages as soon
//!    as one reports a diagnostic.
//! 4. [`report`]: text and HTML exports plus the simulation view.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported Java subset
//!
//! Types: `int`, `double`, `char`, `String`, `boolean`.
//! Statements: declarations, assignments, `if/else`, `for`, `while`,
//! `System.out.println`, line and block comments.
//! Expressions: comparison, `+ - * /`, parentheses and literals.

pub mod error;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod translator;
pub mod ui;
