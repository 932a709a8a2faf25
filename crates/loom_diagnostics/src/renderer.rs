//! Diagnostic rendering backends for human-readable and machine-readable output.

use crate::diagnostic::Diagnostic;
use crate::severity::Severity;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[E304]: direction mismatch: `u1.tx` (output) cannot connect to `u0.tx` (output)
///   --> u1.tx
///    = note: ...
///    = help: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The terminal width used to wrap long messages.
    pub width: u16,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, width: u16) -> Self {
        Self { color, width }
    }

    fn header(&self, diag: &Diagnostic) -> String {
        let label = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return label;
        }
        let ansi = match diag.severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
            Severity::Note | Severity::Help => "\x1b[1;36m",
        };
        format!("{ansi}{label}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}: {}\n", self.header(diag), diag.message));

        if let Some(subject) = &diag.subject {
            out.push_str(&format!("  --> {subject}\n"));
        }

        for note in &diag.notes {
            out.push_str(&wrap(&format!("   = note: {note}"), self.width));
        }
        for help in &diag.help {
            out.push_str(&wrap(&format!("   = help: {help}"), self.width));
        }

        out
    }
}

/// Column where wrapped note/help text continues.
const CONTINUATION_INDENT: usize = 11;

/// Breaks `line` on whitespace so no output line exceeds `width` columns.
fn wrap(line: &str, width: u16) -> String {
    let width = usize::from(width.max(20));
    if line.len() <= width {
        return format!("{line}\n");
    }
    let indent = line.len() - line.trim_start().len();
    let mut out = String::new();
    let mut current = line[..indent].to_string();
    let mut at_line_start = true;
    for word in line.split_whitespace() {
        if !at_line_start && current.len() + 1 + word.len() > width {
            out.push_str(&current);
            out.push('\n');
            current = " ".repeat(CONTINUATION_INDENT);
            at_line_start = true;
        }
        if !at_line_start {
            current.push(' ');
        }
        current.push_str(word);
        at_line_start = false;
    }
    out.push_str(&current);
    out.push('\n');
    out
}

/// Renders each diagnostic as a single-line JSON object.
pub struct JsonRenderer;

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let code = diag.code.to_string();
        let value = serde_json::json!({
            "severity": diag.severity,
            "code": code,
            "message": diag.message,
            "subject": diag.subject.as_ref().map(|s| s.to_string()),
            "notes": diag.notes,
            "help": diag.help,
        });
        value.to_string()
    }
}
