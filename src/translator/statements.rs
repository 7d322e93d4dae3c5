//! Statement emission
//!
//! Each statement becomes one or more Python lines at the current indentation.
//! Blocks that would otherwise contain no executable line get a `pass`.

use super::expressions::{expression, print_argument};
use super::CodeGen;
use crate::parser::ast::{Comment, Expr, ForUpdate, StepDirection, Stmt, TypeName};

impl CodeGen {
    /// Emit `statements` one level deeper than the enclosing header line has
    /// already been written at. `trailer` is appended as the last line.
    pub(super) fn emit_block(&mut self, statements: &[Stmt], trailer: Option<&str>) {
        for stmt in statements {
            self.emit_statement(stmt);
        }

        if let Some(line) = trailer {
            self.out.push_line(line);
        } else if statements.iter().all(Stmt::is_comment) {
            self.out.push_line("pass");
        }
    }

    fn emit_statement(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Comment { comment, .. } => self.emit_comment(comment),
            Stmt::Declaration { ty, vars, .. } => {
                for var in vars {
                    let value = match &var.init {
                        Some(init) => expression(init),
                        None => default_value(*ty).to_string(),
                    };
                    self.emit_declared(&var.name, &value, *ty);
                }
            }
            Stmt::Assignment { name, value, .. } => {
                self.out.push_line(&format!("{} = {}", name, expression(value)));
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
                ..
            } => {
                self.out.push_line(&format!("if {}:", expression(condition)));
                self.nested(then_branch, None);
                if let Some(else_branch) = else_branch {
                    self.out.push_line("else:");
                    self.nested(else_branch, None);
                }
            }
            Stmt::For {
                ty,
                var,
                init,
                condition,
                update,
                body,
                ..
            } => self.emit_for(*ty, var, init, condition.as_ref(), update, body),
            Stmt::While {
                condition, body, ..
            } => {
                self.out.push_line(&format!("while {}:", expression(condition)));
                self.nested(body, None);
            }
            Stmt::Print { arg, .. } => {
                self.out.push_line(&format!("print({})", print_argument(arg)));
            }
        }
    }

    /// `for (T v = init; cond; u++) { body }` becomes
    ///
    /// ```text
    /// v = init
    /// while cond:
    ///     body
    ///     u += 1
    /// ```
    fn emit_for(
        &mut self,
        ty: TypeName,
        var: &str,
        init: &Expr,
        condition: Option<&Expr>,
        update: &ForUpdate,
        body: &[Stmt],
    ) {
        self.emit_declared(var, &expression(init), ty);

        let condition = condition
            .map(expression)
            .unwrap_or_else(|| "True".to_string());
        self.out.push_line(&format!("while {}:", condition));

        let step = match update.direction {
            StepDirection::Increment => "+=",
            StepDirection::Decrement => "-=",
        };
        self.nested(body, Some(&format!("{} {} 1", update.name, step)));
    }

    fn emit_declared(&mut self, name: &str, value: &str, ty: TypeName) {
        self.out
            .push_line(&format!("{} = {}  # declared: {}", name, value, ty.as_str()));
    }

    fn emit_comment(&mut self, comment: &Comment) {
        match comment {
            Comment::Line(text) => self.out.push_line(&format!("#{}", text)),
            Comment::Block(text) => {
                for line in block_comment_lines(text) {
                    if line.is_empty() {
                        self.out.push_line("#");
                    } else {
                        self.out.push_line(&format!("# {}", line));
                    }
                }
            }
        }
    }

    fn nested(&mut self, statements: &[Stmt], trailer: Option<&str>) {
        self.out.indent();
        self.emit_block(statements, trailer);
        self.out.dedent();
    }
}

/// Value given to a declared variable that has no initializer.
pub(crate) fn default_value(ty: TypeName) -> &'static str {
    match ty {
        TypeName::Int => "0",
        TypeName::Double => "0.0",
        TypeName::Char => "''",
        TypeName::String => "\"\"",
        TypeName::Boolean => "False",
    }
}

/// Trimmed lines of a block comment body, without leading or trailing blank
/// lines. A leading `*` gutter is dropped. An entirely blank comment yields
/// one empty line.
fn block_comment_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| {
            let line = line.trim();
            line.strip_prefix('*').map(str::trim_start).unwrap_or(line)
        })
        .collect();
    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].to_vec(),
        _ => vec![""],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Program, VarDecl};
    use crate::parser::token::SourceLocation;
    use crate::translator::Translator;

    fn program(body: Vec<Stmt>) -> Program {
        Program {
            class_name: "T".to_string(),
            args_name: "args".to_string(),
            body,
        }
    }

    fn main_body(out: &str) -> Vec<&str> {
        out.lines()
            .skip_while(|l| *l != "def main():")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_type_defaults() {
        let vars = |name: &str| {
            vec![VarDecl {
                name: name.to_string(),
                init: None,
            }]
        };
        let loc = SourceLocation::default();
        let body = vec![
            Stmt::Declaration { ty: TypeName::Int, vars: vars("a"), location: loc },
            Stmt::Declaration { ty: TypeName::Double, vars: vars("b"), location: loc },
            Stmt::Declaration { ty: TypeName::Char, vars: vars("c"), location: loc },
            Stmt::Declaration { ty: TypeName::String, vars: vars("d"), location: loc },
            Stmt::Declaration { ty: TypeName::Boolean, vars: vars("e"), location: loc },
        ];
        let out = Translator::default().generate(&program(body));
        assert_eq!(
            main_body(&out),
            vec![
                "    a = 0  # declared: int",
                "    b = 0.0  # declared: double",
                "    c = ''  # declared: char",
                "    d = \"\"  # declared: String",
                "    e = False  # declared: boolean",
            ]
        );
    }

    #[test]
    fn test_for_without_condition_loops_forever() {
        let body = vec![Stmt::For {
            ty: TypeName::Int,
            var: "i".to_string(),
            init: Expr::IntLiteral("0".to_string()),
            condition: None,
            update: ForUpdate {
                name: "i".to_string(),
                direction: StepDirection::Decrement,
            },
            body: Vec::new(),
            location: SourceLocation::default(),
        }];
        let out = Translator::default().generate(&program(body));
        assert_eq!(
            main_body(&out),
            vec!["    i = 0  # declared: int", "    while True:", "        i -= 1"]
        );
    }

    #[test]
    fn test_block_comment_lines() {
        assert_eq!(block_comment_lines(" single "), vec!["single"]);
        assert_eq!(
            block_comment_lines("\n first\n\n   second\n "),
            vec!["first", "", "second"]
        );
        assert_eq!(block_comment_lines("   "), vec![""]);
        assert_eq!(
            block_comment_lines("*\n * gutter\n *\n * kept\n "),
            vec!["gutter", "", "kept"]
        );
    }

    #[test]
    fn test_comment_only_block_gets_pass() {
        let loc = SourceLocation::default();
        let body = vec![Stmt::While {
            condition: Expr::BoolLiteral(true),
            body: vec![Stmt::Comment {
                comment: Comment::Line(" spin".to_string()),
                location: loc,
            }],
            location: loc,
        }];
        let out = Translator::default().generate(&program(body));
        assert_eq!(
            main_body(&out),
            vec!["    while True:", "        # spin", "        pass"]
        );
    }
}
