//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! Stmts  ::= Stmt*                (comments kept, bare ';' dropped)
//! Stmt   ::= Decl | Assign | If | For | While | Print
//! Decl   ::= Type VarDecl (',' VarDecl)* ';'
//! Assign ::= ID '=' Expr ';'
//! If     ::= 'if' '(' Expr ')' '{' Stmts '}' ('else' '{' Stmts '}')?
//! For    ::= 'for' '(' Type ID '=' Expr ';' Expr ';' ID ('++'|'--') ')' '{' Stmts '}'
//! While  ::= 'while' '(' Expr ')' '{' Stmts '}'
//! Print  ::= 'System' '.' 'out' '.' 'println' '(' Expr ')' ';'
//! ```
//!
//! Dispatch looks at the first token only, except for assignments which need
//! the second token to be `=`.

use crate::parser::ast::*;
use crate::parser::parse::{
    ParseResult, Parser, MSG_EXPECTED_STEP, MSG_INVALID_STATEMENT, MSG_INVALID_TYPE,
};
use crate::parser::token::{Token, TokenKind};

impl<'a> Parser<'a> {
    /// Parse statements up to (not including) the closing `}` or end of input.
    pub(crate) fn parse_block_statements(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while let Some(token) = self.peek() {
            if token.is(TokenKind::Separator, "}") {
                break;
            }

            if token.kind == TokenKind::Comment {
                self.advance();
                statements.push(Stmt::Comment {
                    comment: comment_from_lexeme(&token.lexeme),
                    location: token.location(),
                });
                continue;
            }

            if token.is(TokenKind::Separator, ";") {
                self.advance();
                continue;
            }

            statements.push(self.parse_statement(token)?);
        }

        Ok(statements)
    }

    /// Parse one statement starting at `token` (the current token).
    fn parse_statement(&mut self, token: &'a Token) -> ParseResult<Stmt> {
        if self.is_type_keyword() {
            return self.parse_declaration();
        }

        if token.kind == TokenKind::Identifier
            && self
                .peek_ahead(1)
                .is_some_and(|next| next.is(TokenKind::Operator, "="))
        {
            return self.parse_assignment();
        }

        if token.kind == TokenKind::Keyword {
            match token.lexeme.as_str() {
                "if" => return self.parse_if_statement(),
                "for" => return self.parse_for_statement(),
                "while" => return self.parse_while_statement(),
                "System" => return self.parse_print_statement(),
                _ => {}
            }
        }

        let diag = self.error_here(MSG_INVALID_STATEMENT);
        // Step past the offending token so a caller never sees a stalled cursor.
        self.advance();
        Err(diag)
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == TokenKind::Keyword && TypeName::from_keyword(&t.lexeme).is_some())
    }

    /// Type ::= 'int' | 'double' | 'char' | 'boolean' | 'String'
    pub(crate) fn parse_type(&mut self) -> ParseResult<TypeName> {
        if let Some(token) = self.peek() {
            if token.kind == TokenKind::Keyword {
                if let Some(ty) = TypeName::from_keyword(&token.lexeme) {
                    self.advance();
                    return Ok(ty);
                }
            }
        }
        Err(self.error_here(MSG_INVALID_TYPE))
    }

    /// Parse variable declaration: `int a, b = 2;`
    fn parse_declaration(&mut self) -> ParseResult<Stmt> {
        let location = self.current_location();
        let ty = self.parse_type()?;

        let mut vars = vec![self.parse_var_decl()?];
        while self.match_token(TokenKind::Separator, ",") {
            vars.push(self.parse_var_decl()?);
        }

        self.expect(TokenKind::Separator, ";")?;

        Ok(Stmt::Declaration { ty, vars, location })
    }

    fn parse_var_decl(&mut self) -> ParseResult<VarDecl> {
        let name = self.expect_identifier()?;
        let init = if self.match_token(TokenKind::Operator, "=") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(VarDecl { name, init })
    }

    fn parse_assignment(&mut self) -> ParseResult<Stmt> {
        let location = self.current_location();
        let name = self.expect_identifier()?;
        self.expect(TokenKind::Operator, "=")?;
        let value = self.parse_expression()?;
        self.expect(TokenKind::Separator, ";")?;
        Ok(Stmt::Assignment {
            name,
            value,
            location,
        })
    }

    /// `{ Stmts }`
    fn parse_braced_block(&mut self) -> ParseResult<Vec<Stmt>> {
        self.expect(TokenKind::Separator, "{")?;
        let statements = self.parse_block_statements()?;
        self.expect(TokenKind::Separator, "}")?;
        Ok(statements)
    }

    /// `( Expr )`
    fn parse_parenthesized_condition(&mut self) -> ParseResult<Expr> {
        self.expect(TokenKind::Separator, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Separator, ")")?;
        Ok(condition)
    }

    fn parse_if_statement(&mut self) -> ParseResult<Stmt> {
        let location = self.current_location();
        self.expect(TokenKind::Keyword, "if")?;
        let condition = self.parse_parenthesized_condition()?;
        let then_branch = self.parse_braced_block()?;

        let else_branch = if self.match_token(TokenKind::Keyword, "else") {
            Some(self.parse_braced_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
            location,
        })
    }

    fn parse_for_statement(&mut self) -> ParseResult<Stmt> {
        let location = self.current_location();
        self.expect(TokenKind::Keyword, "for")?;
        self.expect(TokenKind::Separator, "(")?;

        let ty = self.parse_type()?;
        let var = self.expect_identifier()?;
        self.expect(TokenKind::Operator, "=")?;
        let init = self.parse_expression()?;
        self.expect(TokenKind::Separator, ";")?;

        let condition = self.parse_expression()?;
        self.expect(TokenKind::Separator, ";")?;

        let update_name = self.expect_identifier()?;
        let direction = if self.match_token(TokenKind::Operator, "++") {
            StepDirection::Increment
        } else if self.match_token(TokenKind::Operator, "--") {
            StepDirection::Decrement
        } else {
            return Err(self.error_here(MSG_EXPECTED_STEP));
        };
        self.expect(TokenKind::Separator, ")")?;

        let body = self.parse_braced_block()?;

        Ok(Stmt::For {
            ty,
            var,
            init,
            condition: Some(condition),
            update: ForUpdate {
                name: update_name,
                direction,
            },
            body,
            location,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<Stmt> {
        let location = self.current_location();
        self.expect(TokenKind::Keyword, "while")?;
        let condition = self.parse_parenthesized_condition()?;
        let body = self.parse_braced_block()?;
        Ok(Stmt::While {
            condition,
            body,
            location,
        })
    }

    fn parse_print_statement(&mut self) -> ParseResult<Stmt> {
        let location = self.current_location();
        self.expect(TokenKind::Keyword, "System")?;
        self.expect(TokenKind::Separator, ".")?;
        self.expect(TokenKind::Keyword, "out")?;
        self.expect(TokenKind::Separator, ".")?;
        self.expect(TokenKind::Keyword, "println")?;
        let arg = self.parse_parenthesized_condition()?;
        self.expect(TokenKind::Separator, ";")?;
        Ok(Stmt::Print { arg, location })
    }
}

/// Strip comment markers from a COMMENT lexeme.
fn comment_from_lexeme(lexeme: &str) -> Comment {
    if let Some(text) = lexeme.strip_prefix("//") {
        return Comment::Line(text.to_string());
    }
    let inner = lexeme.strip_prefix("/*").unwrap_or(lexeme);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);
    Comment::Block(inner.to_string())
}
