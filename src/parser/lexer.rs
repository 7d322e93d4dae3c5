//! Lexer (tokenizer) for the Java subset
//!
//! Converts raw source text into a flat [`Token`] stream plus any lexical
//! [`Diagnostic`]s. The lexer never stops on a bad character or literal: it
//! records the problem, skips past it and keeps scanning, so one pass reports
//! every lexical problem in the input. Comments are kept as tokens because the
//! translator carries them over to the generated code.

use super::token::{Diagnostic, SourceLocation, Token, TokenKind};
use rustc_hash::FxHashSet;

pub const MSG_UNTERMINATED_COMMENT: &str = "unterminated block comment";
pub const MSG_INVALID_DECIMAL: &str = "invalid decimal number";
pub const MSG_UNTERMINATED_STRING: &str = "unterminated string";
pub const MSG_MALFORMED_CHAR: &str = "malformed character literal";
pub const MSG_UNRECOGNIZED_CHAR: &str = "unrecognized character";

/// The closed character and word sets that define the language's lexical
/// surface. Built once and owned by the [`Lexer`].
#[derive(Debug, Clone)]
pub struct LexicalTables {
    keywords: FxHashSet<&'static str>,
    booleans: FxHashSet<&'static str>,
    operator_starts: FxHashSet<char>,
    two_char_operators: FxHashSet<&'static str>,
    separators: FxHashSet<char>,
}

impl LexicalTables {
    pub const KEYWORDS: [&'static str; 17] = [
        "public", "class", "static", "void", "main", "String", "int", "double", "char",
        "boolean", "if", "else", "for", "while", "System", "out", "println",
    ];
    pub const BOOLEANS: [&'static str; 2] = ["true", "false"];
    pub const OPERATOR_STARTS: [char; 8] = ['=', '+', '-', '*', '/', '>', '<', '!'];
    pub const TWO_CHAR_OPERATORS: [&'static str; 6] = ["==", "!=", ">=", "<=", "++", "--"];
    pub const SEPARATORS: [char; 9] = ['{', '}', '(', ')', '[', ']', ';', ',', '.'];

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_boolean(&self, word: &str) -> bool {
        self.booleans.contains(word)
    }

    pub fn is_operator_start(&self, ch: char) -> bool {
        self.operator_starts.contains(&ch)
    }

    pub fn is_two_char_operator(&self, op: &str) -> bool {
        self.two_char_operators.contains(op)
    }

    pub fn is_separator(&self, ch: char) -> bool {
        self.separators.contains(&ch)
    }
}

impl Default for LexicalTables {
    fn default() -> Self {
        Self {
            keywords: Self::KEYWORDS.into_iter().collect(),
            booleans: Self::BOOLEANS.into_iter().collect(),
            operator_starts: Self::OPERATOR_STARTS.into_iter().collect(),
            two_char_operators: Self::TWO_CHAR_OPERATORS.into_iter().collect(),
            separators: Self::SEPARATORS.into_iter().collect(),
        }
    }
}

/// Result of one lexing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Tokenize `source` with the default tables.
pub fn tokenize(source: &str) -> LexOutput {
    Lexer::new(source).tokenize()
}

/// Lexer for the Java subset
pub struct Lexer {
    tables: LexicalTables,
    input: Vec<char>,
    position: usize,
    location: SourceLocation,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self::with_tables(input, LexicalTables::default())
    }

    pub fn with_tables(input: &str, tables: LexicalTables) -> Self {
        Self {
            tables,
            input: input.chars().collect(),
            position: 0,
            location: SourceLocation::default(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Every iteration of the loop consumes at least one character, so this
    /// terminates for any input.
    pub fn tokenize(&mut self) -> LexOutput {
        self.position = 0;
        self.location = SourceLocation::default();
        self.tokens.clear();
        self.diagnostics.clear();

        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
                continue;
            }

            if ch == '/' && self.peek_ahead(1) == Some('/') {
                self.line_comment();
                continue;
            }

            if ch == '/' && self.peek_ahead(1) == Some('*') {
                self.block_comment();
                continue;
            }

            if ch.is_ascii_digit() {
                self.number_literal();
                continue;
            }

            if ch == '"' {
                self.string_literal();
                continue;
            }

            if ch == '\'' {
                self.char_literal();
                continue;
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                self.identifier_or_keyword();
                continue;
            }

            if self.tables.is_operator_start(ch) {
                self.operator();
                continue;
            }

            let loc = self.location;
            self.advance();
            if self.tables.is_separator(ch) {
                self.tokens.push(Token::new(TokenKind::Separator, ch, loc));
            } else {
                self.error(ch, MSG_UNRECOGNIZED_CHAR, loc);
            }
        }

        LexOutput {
            tokens: std::mem::take(&mut self.tokens),
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }

    /// `// ...` up to, but not including, the end of the line.
    fn line_comment(&mut self) {
        let loc = self.location;
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            text.push(ch);
            self.advance();
        }

        self.tokens.push(Token::new(TokenKind::Comment, text, loc));
    }

    /// `/* ... */`, possibly spanning lines.
    fn block_comment(&mut self) {
        let loc = self.location;
        let mut text = String::from("/*");
        self.advance(); // skip '/'
        self.advance(); // skip '*'

        while let Some(ch) = self.peek() {
            if ch == '*' && self.peek_ahead(1) == Some('/') {
                self.advance();
                self.advance();
                text.push_str("*/");
                self.tokens.push(Token::new(TokenKind::Comment, text, loc));
                return;
            }
            text.push(ch);
            self.advance();
        }

        self.error(text, MSG_UNTERMINATED_COMMENT, loc);
    }

    /// Integer or decimal literal. A trailing dot (`5.`) is a valid decimal;
    /// a second dot invalidates the whole digit/dot run.
    fn number_literal(&mut self) {
        let loc = self.location;
        let mut text = self.take_while(|c| c.is_ascii_digit());

        if self.peek() != Some('.') {
            self.tokens.push(Token::new(TokenKind::Integer, text, loc));
            return;
        }

        text.push('.');
        self.advance();
        text.push_str(&self.take_while(|c| c.is_ascii_digit()));

        if self.peek() == Some('.') {
            text.push_str(&self.take_while(|c| c.is_ascii_digit() || c == '.'));
            self.error(text, MSG_INVALID_DECIMAL, loc);
            return;
        }

        self.tokens.push(Token::new(TokenKind::Decimal, text, loc));
    }

    /// Double-quoted string literal with escape decoding.
    fn string_literal(&mut self) {
        let loc = self.location;
        self.advance(); // opening quote
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '"' => {
                    self.advance();
                    self.tokens.push(Token::new(TokenKind::String, value, loc));
                    return;
                }
                '\\' => {
                    self.advance();
                    match self.advance() {
                        Some(escaped) => push_escape(&mut value, escaped, '"'),
                        None => break,
                    }
                }
                _ => {
                    value.push(ch);
                    self.advance();
                }
            }
        }

        self.error(format!("\"{}", value), MSG_UNTERMINATED_STRING, loc);
    }

    /// Single-quoted character literal: exactly one (possibly escaped)
    /// character followed by the closing quote.
    fn char_literal(&mut self) {
        let loc = self.location;
        self.advance(); // opening quote
        let mut value = String::new();

        match self.peek() {
            None => {
                self.error("'", MSG_MALFORMED_CHAR, loc);
                return;
            }
            Some('\'') => {
                self.advance();
                self.error("''", MSG_MALFORMED_CHAR, loc);
                return;
            }
            Some('\\') => {
                self.advance();
                match self.advance() {
                    Some(escaped) => push_escape(&mut value, escaped, '\''),
                    None => {
                        self.error("'\\", MSG_MALFORMED_CHAR, loc);
                        return;
                    }
                }
            }
            Some(ch) => {
                value.push(ch);
                self.advance();
            }
        }

        match self.peek() {
            Some('\'') => {
                self.advance();
                self.tokens.push(Token::new(TokenKind::Character, value, loc));
            }
            found => {
                let mut text = format!("'{}", value);
                text.extend(found);
                self.error(text, MSG_MALFORMED_CHAR, loc);
            }
        }
    }

    /// Identifier, keyword or boolean literal.
    fn identifier_or_keyword(&mut self) {
        let loc = self.location;
        let word = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let kind = if self.tables.is_keyword(&word) {
            TokenKind::Keyword
        } else if self.tables.is_boolean(&word) {
            TokenKind::Boolean
        } else {
            TokenKind::Identifier
        };

        self.tokens.push(Token::new(kind, word, loc));
    }

    /// Operator with maximal munch over the two-character list.
    fn operator(&mut self) {
        let loc = self.location;
        let mut op = String::new();
        op.extend(self.advance());

        if let Some(next) = self.peek() {
            op.push(next);
            if self.tables.is_two_char_operator(&op) {
                self.advance();
            } else {
                op.pop();
            }
        }

        self.tokens.push(Token::new(TokenKind::Operator, op, loc));
    }

    fn error(&mut self, text: impl Into<String>, message: &str, loc: SourceLocation) {
        self.diagnostics.push(Diagnostic::lexical(text, message, loc));
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        self.location.advance(ch);
        Some(ch)
    }
}

/// Decode one escape sequence. Unknown escapes are kept as the literal
/// two-character text `\<char>`.
fn push_escape(out: &mut String, escaped: char, quote: char) {
    match escaped {
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        '\\' => out.push('\\'),
        c if c == quote => out.push(c),
        c => {
            out.push('\\');
            out.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(output: &LexOutput) -> Vec<TokenKind> {
        output.tokens.iter().map(|t| t.kind).collect()
    }

    fn lexemes(output: &LexOutput) -> Vec<&str> {
        output.tokens.iter().map(|t| t.lexeme.as_str()).collect()
    }

    #[test]
    fn test_simple_tokens() {
        let out = tokenize("int x = 42;");
        assert!(out.diagnostics.is_empty());
        assert_eq!(
            kinds(&out),
            vec![
                TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Integer,
                TokenKind::Separator,
            ]
        );
        assert_eq!(lexemes(&out), vec!["int", "x", "=", "42", ";"]);
    }

    #[test]
    fn test_operators_maximal_munch() {
        let out = tokenize("== != >= <= ++ -- = + < ! =+");
        assert!(out.diagnostics.is_empty());
        assert_eq!(
            lexemes(&out),
            vec!["==", "!=", ">=", "<=", "++", "--", "=", "+", "<", "!", "=", "+"]
        );
        assert!(out.tokens.iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_separators() {
        let out = tokenize("{}()[];,.");
        assert_eq!(out.tokens.len(), 9);
        assert!(out.tokens.iter().all(|t| t.kind == TokenKind::Separator));
    }

    #[test]
    fn test_keywords_booleans_identifiers() {
        let out = tokenize("System out println true false args _tmp1");
        assert_eq!(
            kinds(&out),
            vec![
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Boolean,
                TokenKind::Boolean,
                TokenKind::Identifier,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_comments_are_tokens() {
        let out = tokenize("int x; // trailing\n/* block\ncomment */ int y;");
        assert!(out.diagnostics.is_empty());
        assert_eq!(out.tokens[3].kind, TokenKind::Comment);
        assert_eq!(out.tokens[3].lexeme, "// trailing");
        assert_eq!(out.tokens[4].kind, TokenKind::Comment);
        assert_eq!(out.tokens[4].lexeme, "/* block\ncomment */");
        assert_eq!((out.tokens[4].line, out.tokens[4].column), (2, 1));
        assert_eq!(out.tokens[5].lexeme, "int");
        assert_eq!((out.tokens[5].line, out.tokens[5].column), (3, 12));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let out = tokenize("int x;\n  /* never closed");
        assert_eq!(out.tokens.len(), 3);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].message, MSG_UNTERMINATED_COMMENT);
        assert_eq!(out.diagnostics[0].location(), SourceLocation::new(2, 3));
    }

    #[test]
    fn test_numbers() {
        let out = tokenize("7 3.14 5.");
        assert_eq!(
            kinds(&out),
            vec![TokenKind::Integer, TokenKind::Decimal, TokenKind::Decimal]
        );
        assert_eq!(lexemes(&out), vec!["7", "3.14", "5."]);
    }

    #[test]
    fn test_invalid_decimal_discards_literal() {
        let out = tokenize("1.2.3 ;");
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].message, MSG_INVALID_DECIMAL);
        assert_eq!(out.diagnostics[0].offending_text, "1.2.3");
        assert_eq!(lexemes(&out), vec![";"]);
    }

    #[test]
    fn test_string_escapes() {
        let out = tokenize(r#""a\nb\t\"q\" \\ \d""#);
        assert!(out.diagnostics.is_empty());
        assert_eq!(out.tokens[0].kind, TokenKind::String);
        assert_eq!(out.tokens[0].lexeme, "a\nb\t\"q\" \\ \\d");
    }

    #[test]
    fn test_unterminated_string() {
        let out = tokenize("x = \"abc");
        assert_eq!(out.tokens.len(), 2);
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].message, MSG_UNTERMINATED_STRING);
        assert_eq!(out.diagnostics[0].offending_text, "\"abc");
        assert_eq!(out.diagnostics[0].location(), SourceLocation::new(1, 5));
    }

    #[test]
    fn test_char_literals() {
        let out = tokenize(r"'a' '\n' '\''");
        assert!(out.diagnostics.is_empty());
        assert_eq!(lexemes(&out), vec!["a", "\n", "'"]);
        assert!(out.tokens.iter().all(|t| t.kind == TokenKind::Character));
    }

    #[test]
    fn test_malformed_char_literals() {
        for src in ["'ab'", "''", "'", "'\\"] {
            let out = tokenize(src);
            assert!(
                out.diagnostics
                    .iter()
                    .any(|d| d.message == MSG_MALFORMED_CHAR),
                "no malformed-char diagnostic for {:?}",
                src
            );
            assert!(out.tokens.iter().all(|t| t.kind != TokenKind::Character));
        }
    }

    #[test]
    fn test_unrecognized_characters_continue() {
        let out = tokenize("@#x");
        assert_eq!(out.diagnostics.len(), 2);
        assert_eq!(out.diagnostics[0].offending_text, "@");
        assert_eq!(out.diagnostics[1].offending_text, "#");
        assert_eq!(out.diagnostics[1].column, 2);
        assert_eq!(lexemes(&out), vec!["x"]);
    }

    #[test]
    fn test_positions_across_lines() {
        let out = tokenize("a\n  bb\tc");
        let positions: Vec<_> = out.tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (2, 6)]);
    }

    #[test]
    fn test_repeated_tokenize_is_independent() {
        let mut lexer = Lexer::new("int a; @");
        let first = lexer.tokenize();
        let second = lexer.tokenize();
        assert_eq!(first, second);
    }
}
