//! Where generate and check reports are written.

/// Sink for report lines.
///
/// A report calls one method per profile heading, file or problem; the sink
/// decides how each kind of line looks.
pub trait Output {
    /// Profile heading, e.g. `ts localhost@shop (dto)`.
    fn section(&mut self, name: &str);

    /// Profile detail such as the table count or template path.
    fn key_value_indented(&mut self, key: &str, value: &str);

    /// Profile error found by `check`.
    fn list_item(&mut self, text: &str);

    /// File written by `generate`.
    fn added_item(&mut self, text: &str);

    /// Files deleted by `output_reset`.
    fn removed_item(&mut self, text: &str);

    /// Failed table or profile. Goes to stderr on a terminal.
    fn warning(&mut self, msg: &str);

    /// Header above a file's content in a dry run.
    fn divider(&mut self, label: &str);

    /// Rendered file content, or a closing status line.
    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// Something `generate` or `check` prints when it finishes.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain stdout/stderr rendering.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}:", name);
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        println!("  {}: {}", key, value);
    }

    fn list_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn added_item(&mut self, text: &str) {
        println!("  + {}", text);
    }

    fn removed_item(&mut self, text: &str) {
        println!("  - {}", text);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("warning: {}", msg);
    }

    fn divider(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text);
    }

    fn newline(&mut self) {
        println!();
    }
}

/// Collects rendered lines, for asserting on report output in tests.
#[cfg(test)]
#[derive(Default)]
pub struct BufferOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl Output for BufferOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{}:", name));
    }

    fn key_value_indented(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {}: {}", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {}", text));
    }

    fn removed_item(&mut self, text: &str) {
        self.lines.push(format!("  - {}", text));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {}", msg));
    }

    fn divider(&mut self, label: &str) {
        self.lines.push(format!("── {} ──", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
