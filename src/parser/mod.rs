//! Java-subset front end
//!
//! This module turns source text into tokens and validates them:
//! - [`token`]: positions, tokens and diagnostics shared by every stage
//! - [`lexer`]: Tokenization (source text → tokens + lexical diagnostics)
//! - [`parse`]: Parsing (tokens → [`ast::Program`] or one syntax diagnostic)
//! - [`ast`]: Tree node definitions
//!
//! # Supported subset
//!
//! One `public class` holding one `public static void main(String[] args)`.
//! Inside `main`:
//! - Types: `int`, `double`, `char`, `boolean`, `String`
//! - Statements: declarations, assignments, `if/else`, `for`, `while`,
//!   `System.out.println`
//! - Expressions: comparison, `+ - * /`, parentheses, literals, identifiers
//! - No methods, arrays, objects or other classes
//!
//! # Parser Implementation
//!
//! Hand-written predictive recursive descent, fail-fast on the first error.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

pub use lexer::{tokenize, LexOutput, Lexer, LexicalTables};
pub use parse::{parse, parse_program, ParseOutcome, Parser};
pub use token::{Diagnostic, DiagnosticCategory, SourceLocation, Token, TokenKind};
