use crate::parser::ast::{BinOp, Expr};

/// Python spelling of a binary operator. Every comparison and arithmetic
/// operator of the subset is written the same way in both languages.
pub fn python_operator(op: BinOp) -> &'static str {
    match op {
        BinOp::Eq => "==",
        BinOp::Ne => "!=",
        BinOp::Lt => "<",
        BinOp::Le => "<=",
        BinOp::Gt => ">",
        BinOp::Ge => ">=",
        BinOp::Add => "+",
        BinOp::Sub => "-",
        BinOp::Mul => "*",
        BinOp::Div => "/",
    }
}

/// General expression translation, following the tree structure.
pub(super) fn expression(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::IntLiteral(text) | Expr::DecimalLiteral(text) => text.clone(),
        Expr::StringLiteral(text) => quote_literal(text, '"'),
        Expr::CharLiteral(text) => quote_literal(text, '\''),
        Expr::BoolLiteral(value) => python_bool(*value).to_string(),
        Expr::Paren(inner) => format!("({})", expression(inner)),
        Expr::Binary { op, left, right } => format!(
            "{} {} {}",
            expression(left),
            python_operator(*op),
            expression(right)
        ),
    }
}

/// Translate the argument of `System.out.println`.
///
/// Java evaluates a `+` chain left to right: operands before the first
/// string operand are added numerically, everything from it on is
/// concatenated as text. A string operand is a string literal or a
/// parenthesised chain that itself contains one. The top-level chain is
/// split into operands and rebuilt that way:
///
/// - no string operand: `str(<whole expression>)`, a lone char literal as is
/// - a numeric prefix of two or more operands: `str(a + b)` as one piece
/// - from the first string operand on, literals are kept, parenthesised
///   string chains are rebuilt recursively and every other operand is
///   wrapped in `str(...)`
///
/// Char literals are text only once concatenation has started; in numeric
/// positions they are promoted with `ord(...)`, as Java promotes `char`.
pub(super) fn print_argument(expr: &Expr) -> String {
    let mut operands = Vec::new();
    collect_concat_operands(expr, &mut operands);

    let Some(first_text) = operands.iter().position(|e| is_textual(e)) else {
        return match expr {
            Expr::CharLiteral(_) => expression(expr),
            other => format!("str({})", numeric(other)),
        };
    };

    let mut pieces = Vec::with_capacity(operands.len());
    match &operands[..first_text] {
        [] => {}
        [single] => pieces.push(stringified(single)),
        prefix => pieces.push(format!(
            "str({})",
            prefix
                .iter()
                .map(|e| numeric_operand(e))
                .collect::<Vec<_>>()
                .join(" + ")
        )),
    }
    pieces.extend(operands[first_text..].iter().map(|e| stringified(e)));
    pieces.join(" + ")
}

/// Whether `expr` makes a `+` chain a string concatenation.
fn is_textual(expr: &Expr) -> bool {
    match expr {
        Expr::StringLiteral(_) => true,
        Expr::Paren(inner) => {
            let mut operands = Vec::new();
            collect_concat_operands(inner, &mut operands);
            operands.into_iter().any(is_textual)
        }
        _ => false,
    }
}

fn collect_concat_operands<'e>(expr: &'e Expr, out: &mut Vec<&'e Expr>) {
    match expr {
        Expr::Binary {
            op: BinOp::Add,
            left,
            right,
        } => {
            collect_concat_operands(left, out);
            collect_concat_operands(right, out);
        }
        other => out.push(other),
    }
}

/// One operand after concatenation has started.
fn stringified(operand: &Expr) -> String {
    match operand {
        Expr::StringLiteral(_) | Expr::CharLiteral(_) => expression(operand),
        Expr::Paren(inner) if is_textual(operand) => format!("({})", print_argument(inner)),
        Expr::Paren(inner) => format!("str({})", numeric(inner)),
        other => format!("str({})", numeric(other)),
    }
}

/// Spelling in a numeric context. Char literals that take part in
/// arithmetic, or in a comparison with an arithmetic side, become `ord(c)`.
fn numeric(expr: &Expr) -> String {
    match expr {
        Expr::Paren(inner) => format!("({})", numeric(inner)),
        Expr::Binary { op, left, right } => {
            let promote = op.is_arithmetic() || is_arithmetic(left) || is_arithmetic(right);
            let side = |e: &Expr| if promote { numeric_operand(e) } else { numeric(e) };
            format!("{} {} {}", side(left), python_operator(*op), side(right))
        }
        other => expression(other),
    }
}

fn numeric_operand(expr: &Expr) -> String {
    match expr {
        Expr::CharLiteral(_) => format!("ord({})", expression(expr)),
        other => numeric(other),
    }
}

fn is_arithmetic(expr: &Expr) -> bool {
    match expr {
        Expr::Binary { op, .. } => op.is_arithmetic(),
        Expr::Paren(inner) => is_arithmetic(inner),
        _ => false,
    }
}

fn python_bool(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Quote decoded literal text as a Python string literal using `quote`,
/// re-escaping backslashes, the quote character and control characters.
pub fn quote_literal(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(text: &str) -> Expr {
        Expr::StringLiteral(text.to_string())
    }

    fn id(name: &str) -> Expr {
        Expr::Ident(name.to_string())
    }

    #[test]
    fn test_general_expression() {
        let e = Expr::binary(
            BinOp::Ge,
            Expr::Paren(Box::new(Expr::binary(BinOp::Add, id("a"), id("b")))),
            Expr::binary(BinOp::Div, Expr::DecimalLiteral("2.0".to_string()), id("c")),
        );
        assert_eq!(expression(&e), "(a + b) >= 2.0 / c");
        assert_eq!(expression(&Expr::BoolLiteral(false)), "False");
    }

    #[test]
    fn test_print_concatenation() {
        let e = Expr::binary(
            BinOp::Add,
            Expr::binary(BinOp::Add, s("x = "), id("x")),
            Expr::BoolLiteral(true),
        );
        assert_eq!(print_argument(&e), "\"x = \" + str(x) + str(True)");
    }

    #[test]
    fn test_print_single_operands() {
        assert_eq!(print_argument(&s("hi")), "\"hi\"");
        assert_eq!(print_argument(&id("n")), "str(n)");
        assert_eq!(
            print_argument(&Expr::IntLiteral("3".to_string())),
            "str(3)"
        );
    }

    #[test]
    fn test_print_nested_expressions_are_stringified_whole() {
        let e = Expr::binary(
            BinOp::Add,
            s("sum: "),
            Expr::Paren(Box::new(Expr::binary(BinOp::Add, id("a"), id("b")))),
        );
        assert_eq!(print_argument(&e), "\"sum: \" + str(a + b)");

        let cmp = Expr::binary(BinOp::Lt, id("a"), id("b"));
        assert_eq!(print_argument(&cmp), "str(a < b)");

        // "a" + ("b" + x) prints "ab1" in Java
        let inner_concat = Expr::binary(
            BinOp::Add,
            s("a"),
            Expr::Paren(Box::new(Expr::binary(BinOp::Add, s("b"), id("x")))),
        );
        assert_eq!(print_argument(&inner_concat), "\"a\" + (\"b\" + str(x))");

        // (x + "b") prints "1b"
        let only_paren = Expr::Paren(Box::new(Expr::binary(BinOp::Add, id("x"), s("b"))));
        assert_eq!(print_argument(&only_paren), "(str(x) + \"b\")");

        // x + (y + "b"): the parenthesised string starts the concatenation
        let late = Expr::binary(
            BinOp::Add,
            id("x"),
            Expr::Paren(Box::new(Expr::binary(BinOp::Add, id("y"), s("b")))),
        );
        assert_eq!(print_argument(&late), "str(x) + (str(y) + \"b\")");
    }

    fn ch(c: &str) -> Expr {
        Expr::CharLiteral(c.to_string())
    }

    #[test]
    fn test_print_char_arithmetic_is_numeric() {
        // 'a' + 1 prints 98
        let sum = Expr::binary(BinOp::Add, ch("a"), Expr::IntLiteral("1".to_string()));
        assert_eq!(print_argument(&sum), "str(ord('a') + 1)");

        // a lone char prints the character
        assert_eq!(print_argument(&ch("a")), "'a'");

        // 'a' + 'b' + "!" prints "195!"
        let prefix = Expr::binary(
            BinOp::Add,
            Expr::binary(BinOp::Add, ch("a"), ch("b")),
            s("!"),
        );
        assert_eq!(print_argument(&prefix), "str(ord('a') + ord('b')) + \"!\"");

        // "x" + 'a' prints "xa"
        let text = Expr::binary(BinOp::Add, s("x"), ch("a"));
        assert_eq!(print_argument(&text), "\"x\" + 'a'");

        // c == 'q' compares characters; 'a' + 1 > 'b' compares code points
        let eq = Expr::binary(BinOp::Eq, id("c"), ch("q"));
        assert_eq!(print_argument(&eq), "str(c == 'q')");
        let gt = Expr::binary(
            BinOp::Gt,
            Expr::binary(BinOp::Add, ch("a"), Expr::IntLiteral("1".to_string())),
            ch("b"),
        );
        assert_eq!(print_argument(&gt), "str(ord('a') + 1 > ord('b'))");
    }

    #[test]
    fn test_print_numeric_chains_are_summed() {
        let sum = Expr::binary(BinOp::Add, id("a"), id("b"));
        assert_eq!(print_argument(&sum), "str(a + b)");

        // 1 + 2 + "x" + 3 prints "3x3" in Java
        let mixed = Expr::binary(
            BinOp::Add,
            Expr::binary(
                BinOp::Add,
                Expr::binary(
                    BinOp::Add,
                    Expr::IntLiteral("1".to_string()),
                    Expr::IntLiteral("2".to_string()),
                ),
                s("x"),
            ),
            Expr::IntLiteral("3".to_string()),
        );
        assert_eq!(print_argument(&mixed), "str(1 + 2) + \"x\" + str(3)");
    }

    #[test]
    fn test_quote_literal_escapes() {
        assert_eq!(quote_literal("a\"b\n", '"'), "\"a\\\"b\\n\"");
        assert_eq!(quote_literal("'", '\''), "'\\''");
        assert_eq!(quote_literal("c:\\dir", '"'), "\"c:\\\\dir\"");
    }
}
