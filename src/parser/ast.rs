// Syntax tree for the Java subset. Built once by the parser and consumed by
// the translator, so the grammar lives in exactly one place.

use super::token::SourceLocation;

/// Declarable types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Double,
    Char,
    Boolean,
    String,
}

impl TypeName {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "int" => Some(TypeName::Int),
            "double" => Some(TypeName::Double),
            "char" => Some(TypeName::Char),
            "boolean" => Some(TypeName::Boolean),
            "String" => Some(TypeName::String),
            _ => None,
        }
    }

    /// The source spelling
    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Double => "double",
            TypeName::Char => "char",
            TypeName::Boolean => "boolean",
            TypeName::String => "String",
        }
    }
}

/// Binary operators, loosest-binding group first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Additive
    Add,
    Sub,
    // Multiplicative
    Mul,
    Div,
}

impl BinOp {
    pub fn comparison(op: &str) -> Option<Self> {
        match op {
            "==" => Some(BinOp::Eq),
            "!=" => Some(BinOp::Ne),
            "<" => Some(BinOp::Lt),
            "<=" => Some(BinOp::Le),
            ">" => Some(BinOp::Gt),
            ">=" => Some(BinOp::Ge),
            _ => None,
        }
    }

    pub fn additive(op: &str) -> Option<Self> {
        match op {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            _ => None,
        }
    }

    pub fn multiplicative(op: &str) -> Option<Self> {
        match op {
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinOp::Add | BinOp::Sub | BinOp::Mul | BinOp::Div)
    }

    /// The source spelling
    pub fn as_str(self) -> &'static str {
        match self {
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
}

/// Expressions. Literal payloads keep the lexeme so numbers are emitted
/// exactly as written.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Ident(String),
    IntLiteral(String),
    DecimalLiteral(String),
    StringLiteral(String),
    CharLiteral(String),
    BoolLiteral(bool),
    Paren(Box<Expr>),
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// One name in a declaration list
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: String,
    pub init: Option<Expr>,
}

/// Direction of a `for` update clause (`i++` / `i--`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForUpdate {
    pub name: String,
    pub direction: StepDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    /// Text after the `//` marker
    Line(String),
    /// Text between `/*` and `*/`
    Block(String),
}

/// Statements inside `main`
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Comment {
        comment: Comment,
        location: SourceLocation,
    },
    Declaration {
        ty: TypeName,
        vars: Vec<VarDecl>,
        location: SourceLocation,
    },
    Assignment {
        name: String,
        value: Expr,
        location: SourceLocation,
    },
    If {
        condition: Expr,
        then_branch: Vec<Stmt>,
        else_branch: Option<Vec<Stmt>>,
        location: SourceLocation,
    },
    For {
        ty: TypeName,
        var: String,
        init: Expr,
        // The grammar always supplies a condition; `None` means "loop forever".
        condition: Option<Expr>,
        update: ForUpdate,
        body: Vec<Stmt>,
        location: SourceLocation,
    },
    While {
        condition: Expr,
        body: Vec<Stmt>,
        location: SourceLocation,
    },
    Print {
        arg: Expr,
        location: SourceLocation,
    },
}

impl Stmt {
    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::Comment { location, .. }
            | Stmt::Declaration { location, .. }
            | Stmt::Assignment { location, .. }
            | Stmt::If { location, .. }
            | Stmt::For { location, .. }
            | Stmt::While { location, .. }
            | Stmt::Print { location, .. } => *location,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Stmt::Comment { .. })
    }
}

/// `public class <name> { public static void main(String[] <args>) { body } }`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub class_name: String,
    pub args_name: String,
    pub body: Vec<Stmt>,
}
