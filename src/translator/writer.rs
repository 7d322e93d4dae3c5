//! Line buffer for generated Python. Indentation is a fixed number of
//! spaces per level and blank lines are written without it, so the output
//! never carries trailing whitespace.

/// Incrementally builds Python source with indentation handling.
#[derive(Debug, Default, Clone)]
pub struct PythonSourceBuilder {
    content: String,
    indent_level: usize,
    indent: String,
}

impl PythonSourceBuilder {
    pub fn new(indent_width: usize) -> Self {
        Self {
            content: String::new(),
            indent_level: 0,
            indent: " ".repeat(indent_width),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        if !line.is_empty() {
            self.push_indent();
            self.content.push_str(line);
        }
        self.content.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.content.push('\n');
    }

    fn push_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.content.push_str(&self.indent);
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }

    pub fn build(self) -> String {
        self.content
    }
}
