//! Syntax-directed translation to Python
//!
//! The translator walks a [`Program`] tree and emits Python source:
//! - [`writer`]: indentation-aware output buffer
//! - `statements`: one emission rule per statement kind, including the
//!   `for` → `while` restructuring
//! - `expressions`: general expression spelling and the `println`
//!   argument stringifier
//!
//! # Output shape
//!
//! ```text
//! # Translated from Java class Foo
//!
//! def main():
//!     <statements>
//!
//! if __name__ == "__main__":
//!     main()
//! ```
//!
//! Every call starts from a fresh buffer at indentation level zero, so
//! translating the same program twice gives byte-identical output.

mod expressions;
mod statements;
pub mod writer;

use crate::parser::ast::Program;
use crate::parser::parse::parse_program;
use crate::parser::token::Token;
use tracing::{debug, warn};
use writer::PythonSourceBuilder;

pub use expressions::{python_operator, quote_literal};

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Python code generator
#[derive(Debug, Clone, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Translate a token stream that already lexed and parsed cleanly.
    ///
    /// The stream is parsed again into a tree. If it does not parse, the
    /// caller broke the precondition; an empty string is returned.
    pub fn translate(&self, tokens: &[Token]) -> String {
        match parse_program(tokens) {
            Ok(program) => self.generate(&program),
            Err(diag) => {
                warn!(%diag, "translate called on a stream that does not parse");
                String::new()
            }
        }
    }

    /// Generate Python source for `program`.
    pub fn generate(&self, program: &Program) -> String {
        let mut gen = CodeGen {
            out: PythonSourceBuilder::new(self.config.indent_width),
        };

        gen.out
            .push_line(&format!("# Translated from Java class {}", program.class_name));
        gen.out.blank_line();
        gen.out.push_line("def main():");
        gen.out.indent();
        gen.emit_block(&program.body, None);
        gen.out.dedent();
        gen.out.blank_line();
        gen.out.push_line("if __name__ == \"__main__\":");
        gen.out.indent();
        gen.out.push_line("main()");
        gen.out.dedent();

        let text = gen.out.build();
        debug!(
            class = %program.class_name,
            statements = program.body.len(),
            bytes = text.len(),
            "generated python"
        );
        text
    }
}

/// Translate with the default configuration.
pub fn translate(tokens: &[Token]) -> String {
    Translator::default().translate(tokens)
}

/// Per-call generation state.
struct CodeGen {
    out: PythonSourceBuilder,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn translate_body(body: &str) -> String {
        let source = format!(
            "public class Demo {{ public static void main(String[] args) {{ {} }} }}",
            body
        );
        let lexed = tokenize(&source);
        assert!(lexed.diagnostics.is_empty());
        translate(&lexed.tokens)
    }

    #[test]
    fn test_program_shell() {
        let out = translate_body("");
        assert_eq!(
            out,
            "# Translated from Java class Demo\n\
             \n\
             def main():\n\
             \x20   pass\n\
             \n\
             if __name__ == \"__main__\":\n\
             \x20   main()\n"
        );
    }

    #[test]
    fn test_custom_indent_width() {
        let lexed = tokenize(
            "public class A { public static void main(String[] a) { int x; } }",
        );
        let translator = Translator::new(TranslatorConfig { indent_width: 2 });
        let out = translator.translate(&lexed.tokens);
        assert!(out.contains("\n  x = 0  # declared: int\n"));
        assert!(out.ends_with("\n  main()\n"));
    }

    #[test]
    fn test_translate_is_idempotent() {
        let lexed = tokenize(
            "public class A { public static void main(String[] a) { \
             for (int i = 0; i < 2; i++) { System.out.println(\"i=\" + i); } } }",
        );
        let translator = Translator::default();
        assert_eq!(translator.translate(&lexed.tokens), translator.translate(&lexed.tokens));
    }

    #[test]
    fn test_invalid_stream_yields_empty_output() {
        let lexed = tokenize("public class");
        assert_eq!(translate(&lexed.tokens), "");
    }
}
