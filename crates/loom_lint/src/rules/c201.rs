//! C201: Naming violation: instance and port names must be snake_case.

use loom_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity, Subject};
use loom_ir::{Catalog, Design};

use crate::LintRule;

/// Detects instance names and external port names that are not snake_case.
///
/// Generated HDL uses these names as identifiers, so they are held to the
/// same convention as the code that will contain them.
pub struct NamingViolation;

impl LintRule for NamingViolation {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Convention, 201)
    }

    fn name(&self) -> &str {
        "naming-violation"
    }

    fn description(&self) -> &str {
        "name violates naming convention"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_design(&self, design: &Design, _catalog: &Catalog, sink: &DiagnosticSink) {
        let instances = design.instances.iter().map(|i| ("instance", &i.name));
        let ports = design.externals.iter().map(|e| ("external port", &e.port));
        for (what, name) in instances.chain(ports) {
            if is_snake_case(name) {
                continue;
            }
            sink.emit(
                Diagnostic::warning(self.code(), format!("{what} `{name}` is not snake_case"))
                    .with_subject(Subject::node(name))
                    .with_help(format!("rename it to `{}`", to_snake_case(name))),
            );
        }
    }
}

/// Checks if a name follows snake_case convention.
pub fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => true,
        Some(first) if first.is_ascii_lowercase() || first == '_' => {
            chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        }
        Some(_) => false,
    }
}

fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        } else {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }
    out
}
