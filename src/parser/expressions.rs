//! Expression parsing implementation
//!
//! Three binary precedence levels, loosest first, each left-associative:
//!
//! ```text
//! Expr    ::= Term (CompareOp Term)*        CompareOp ∈ {==, !=, >, <, >=, <=}
//! Term    ::= Factor (('+' | '-') Factor)*
//! Factor  ::= Primary (('*' | '/') Primary)*
//! Primary ::= ID | IntLit | DecimalLit | StringLit | CharLit | BoolLit | '(' Expr ')'
//! ```

use crate::parser::ast::{BinOp, Expr};
use crate::parser::parse::{ParseResult, Parser, MSG_EXPECTED_EXPRESSION, MSG_INVALID_PRIMARY};
use crate::parser::token::TokenKind;

impl<'a> Parser<'a> {
    /// Parse an expression (entry point for all expression parsing)
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinOp::comparison, Self::parse_term)
    }

    fn parse_term(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinOp::additive, Self::parse_factor)
    }

    fn parse_factor(&mut self) -> ParseResult<Expr> {
        self.parse_binary_level(BinOp::multiplicative, Self::parse_primary)
    }

    /// `operand (op operand)*` where `classify` recognizes this level's
    /// operators.
    fn parse_binary_level(
        &mut self,
        classify: fn(&str) -> Option<BinOp>,
        operand: fn(&mut Self) -> ParseResult<Expr>,
    ) -> ParseResult<Expr> {
        let mut left = operand(self)?;

        while let Some(op) = self
            .peek()
            .filter(|t| t.kind == TokenKind::Operator)
            .and_then(|t| classify(&t.lexeme))
        {
            self.advance();
            let right = operand(self)?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let Some(token) = self.peek() else {
            return Err(self.error_here(MSG_EXPECTED_EXPRESSION));
        };

        let expr = match token.kind {
            TokenKind::Identifier => Expr::Ident(token.lexeme.clone()),
            TokenKind::Integer => Expr::IntLiteral(token.lexeme.clone()),
            TokenKind::Decimal => Expr::DecimalLiteral(token.lexeme.clone()),
            TokenKind::String => Expr::StringLiteral(token.lexeme.clone()),
            TokenKind::Character => Expr::CharLiteral(token.lexeme.clone()),
            TokenKind::Boolean => Expr::BoolLiteral(token.lexeme == "true"),
            TokenKind::Separator if token.lexeme == "(" => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::Separator, ")")?;
                return Ok(Expr::Paren(Box::new(inner)));
            }
            _ => return Err(self.error_here(MSG_INVALID_PRIMARY)),
        };

        self.advance();
        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;
    use crate::parser::token::Token;

    fn expr(src: &str) -> ParseResult<Expr> {
        let tokens: Vec<Token> = tokenize(src).tokens;
        let mut parser = Parser::new(&tokens);
        parser.parse_expression()
    }

    fn ident(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    fn int(n: &str) -> Expr {
        Expr::IntLiteral(n.to_string())
    }

    #[test]
    fn test_precedence() {
        // a + b * 2 < c
        let parsed = expr("a + b * 2 < c").unwrap();
        let expected = Expr::binary(
            BinOp::Lt,
            Expr::binary(BinOp::Add, ident("a"), Expr::binary(BinOp::Mul, ident("b"), int("2"))),
            ident("c"),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_left_associative() {
        let parsed = expr("8 - 4 - 2").unwrap();
        let expected = Expr::binary(
            BinOp::Sub,
            Expr::binary(BinOp::Sub, int("8"), int("4")),
            int("2"),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parenthesized() {
        let parsed = expr("(a + 1) * 2").unwrap();
        assert_eq!(
            parsed,
            Expr::binary(
                BinOp::Mul,
                Expr::Paren(Box::new(Expr::binary(BinOp::Add, ident("a"), int("1")))),
                int("2"),
            )
        );
    }

    #[test]
    fn test_literals() {
        assert_eq!(expr("true").unwrap(), Expr::BoolLiteral(true));
        assert_eq!(expr("2.5").unwrap(), Expr::DecimalLiteral("2.5".to_string()));
        assert_eq!(expr("'c'").unwrap(), Expr::CharLiteral("c".to_string()));
        assert_eq!(expr("\"s\"").unwrap(), Expr::StringLiteral("s".to_string()));
    }

    #[test]
    fn test_invalid_primary() {
        let err = expr("* 3").unwrap_err();
        assert_eq!(err.message, MSG_INVALID_PRIMARY);
        assert_eq!(err.offending_text, "*");
    }

    #[test]
    fn test_missing_operand_at_eof() {
        let err = expr("a +").unwrap_err();
        assert_eq!(err.message, MSG_EXPECTED_EXPRESSION);
        assert_eq!(err.offending_text, "EOF");
    }

    #[test]
    fn test_unclosed_paren() {
        let err = expr("(a").unwrap_err();
        assert_eq!(err.message, "expected SEPARATOR ')', found EOF");
    }
}
