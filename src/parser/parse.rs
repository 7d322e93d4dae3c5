//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the shared cursor helpers and
//! the entry points [`parse`] and [`parse_program`].
//!
//! # Parser Architecture
//!
//! Predictive recursive descent with one token of lookahead (two for the
//! assignment check), organized across files with `impl Parser` blocks:
//! - This module: Parser struct, `expect`/`check` helpers, program and
//!   `main` rules, trailing-token check
//! - `statements`: statement dispatch and every statement rule
//! - `expressions`: the `Expr > Term > Factor > Primary` levels
//!
//! # Failure policy
//!
//! Parsing is fail-fast: the first grammar violation becomes the single
//! diagnostic of the run and propagates out through `?`. No resynchronization
//! is attempted.

use crate::parser::ast::{Program, Stmt};
use crate::parser::token::{Diagnostic, SourceLocation, Token, TokenKind};

pub const MSG_INVALID_STATEMENT: &str = "invalid statement";
pub const MSG_INVALID_TYPE: &str = "invalid data type";
pub const MSG_EXPECTED_STEP: &str = "expected '++' or '--'";
pub const MSG_EXPECTED_EXPRESSION: &str = "expected expression";
pub const MSG_INVALID_PRIMARY: &str = "invalid primary expression";
pub const MSG_EXTRA_CODE: &str = "extra code after program";

/// Text reported as the offending lexeme when input runs out.
pub const EOF_TEXT: &str = "EOF";

pub type ParseResult<T> = Result<T, Diagnostic>;

/// Acceptance verdict of one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub accepted: bool,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validate `tokens` against the grammar.
///
/// At most one diagnostic is ever produced.
pub fn parse(tokens: &[Token]) -> ParseOutcome {
    match parse_program(tokens) {
        Ok(_) => ParseOutcome {
            accepted: true,
            diagnostics: Vec::new(),
        },
        Err(diag) => ParseOutcome {
            accepted: false,
            diagnostics: vec![diag],
        },
    }
}

/// Parse `tokens` into a [`Program`] tree.
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    Parser::new(tokens).parse_program()
}

/// Recursive descent parser for the Java subset
pub struct Parser<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the whole program and reject anything left over.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        self.position = 0;

        // Program := 'public' 'class' ID '{' Main '}'
        self.expect(TokenKind::Keyword, "public")?;
        self.expect(TokenKind::Keyword, "class")?;
        let class_name = self.expect_identifier()?;
        self.expect(TokenKind::Separator, "{")?;
        let (args_name, body) = self.parse_main()?;
        self.expect(TokenKind::Separator, "}")?;

        if let Some(extra) = self.peek() {
            return Err(Diagnostic::syntactic(
                extra.lexeme.clone(),
                MSG_EXTRA_CODE,
                extra.location(),
            ));
        }

        Ok(Program {
            class_name,
            args_name,
            body,
        })
    }

    /// Main := 'public' 'static' 'void' 'main' '(' 'String' '[' ']' ID ')' '{' Stmts '}'
    fn parse_main(&mut self) -> ParseResult<(String, Vec<Stmt>)> {
        self.expect(TokenKind::Keyword, "public")?;
        self.expect(TokenKind::Keyword, "static")?;
        self.expect(TokenKind::Keyword, "void")?;
        self.expect(TokenKind::Keyword, "main")?;
        self.expect(TokenKind::Separator, "(")?;
        self.expect(TokenKind::Keyword, "String")?;
        self.expect(TokenKind::Separator, "[")?;
        self.expect(TokenKind::Separator, "]")?;
        let args_name = self.expect_identifier()?;
        self.expect(TokenKind::Separator, ")")?;
        self.expect(TokenKind::Separator, "{")?;
        let body = self.parse_block_statements()?;
        self.expect(TokenKind::Separator, "}")?;
        Ok((args_name, body))
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn check(&self, kind: TokenKind, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.is(kind, lexeme))
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind == kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind, lexeme: &str) -> bool {
        if self.check(kind, lexeme) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, lexeme: &str) -> ParseResult<&'a Token> {
        if self.check(kind, lexeme) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.mismatch(&format!("{} '{}'", kind, lexeme)))
    }

    pub(crate) fn expect_kind(&mut self, kind: TokenKind) -> ParseResult<&'a Token> {
        if self.check_kind(kind) {
            if let Some(token) = self.advance() {
                return Ok(token);
            }
        }
        Err(self.mismatch(kind.as_str()))
    }

    pub(crate) fn expect_identifier(&mut self) -> ParseResult<String> {
        self.expect_kind(TokenKind::Identifier)
            .map(|t| t.lexeme.clone())
    }

    /// "expected X, found Y" at the current token.
    fn mismatch(&self, expected: &str) -> Diagnostic {
        let found = match self.peek() {
            Some(token) => token.to_string(),
            None => EOF_TEXT.to_string(),
        };
        self.error_here(format!("expected {}, found {}", expected, found))
    }

    /// A diagnostic anchored at the current token, or at end of input.
    pub(crate) fn error_here(&self, message: impl Into<String>) -> Diagnostic {
        match self.peek() {
            Some(token) => Diagnostic::syntactic(token.lexeme.clone(), message, token.location()),
            None => Diagnostic::syntactic(EOF_TEXT, message, self.eof_location()),
        }
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        match self.peek() {
            Some(token) => token.location(),
            None => self.eof_location(),
        }
    }

    /// End of input is reported at the last token, or 1:1 for empty input.
    fn eof_location(&self) -> SourceLocation {
        self.tokens
            .last()
            .map(Token::location)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn outcome(src: &str) -> ParseOutcome {
        let lexed = tokenize(src);
        assert!(lexed.diagnostics.is_empty(), "{:?}", lexed.diagnostics);
        parse(&lexed.tokens)
    }

    const SHELL_OPEN: &str = "public class A { public static void main(String[] args) {";

    #[test]
    fn test_minimal_program() {
        let result = outcome("public class A { public static void main(String[] args) { } }");
        assert!(result.accepted);
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_program_tree() {
        let lexed = tokenize(&format!("{} int x = 1; }} }}", SHELL_OPEN));
        let program = parse_program(&lexed.tokens).unwrap();
        assert_eq!(program.class_name, "A");
        assert_eq!(program.args_name, "args");
        assert_eq!(program.body.len(), 1);
    }

    #[test]
    fn test_missing_main_brace_reports_eof() {
        let result = outcome(&format!("{} int x = 1; }}", SHELL_OPEN));
        assert!(!result.accepted);
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.offending_text, EOF_TEXT);
        assert_eq!(diag.message, "expected SEPARATOR '}', found EOF");
    }

    #[test]
    fn test_wrong_keyword() {
        let result = outcome("private class A {}");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(
            result.diagnostics[0].message,
            "expected KEYWORD 'public', found IDENTIFIER 'private'"
        );
        assert_eq!(result.diagnostics[0].column, 1);
    }

    #[test]
    fn test_extra_code_after_program() {
        let result = outcome(&format!("{} }} }} int", SHELL_OPEN));
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].message, MSG_EXTRA_CODE);
        assert_eq!(result.diagnostics[0].offending_text, "int");
    }

    #[test]
    fn test_empty_input() {
        let result = parse(&[]);
        assert!(!result.accepted);
        assert_eq!(result.diagnostics[0].location(), SourceLocation::new(1, 1));
        assert_eq!(result.diagnostics[0].offending_text, EOF_TEXT);
    }

    #[test]
    fn test_args_must_be_identifier() {
        let result = outcome("public class A { public static void main(String[] main) { } }");
        assert!(!result.accepted);
        assert_eq!(
            result.diagnostics[0].message,
            "expected IDENTIFIER, found KEYWORD 'main'"
        );
    }
}
