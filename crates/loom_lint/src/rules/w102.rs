//! W102: Isolated instance: an instance with no connections or ports.

use loom_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity, Subject};
use loom_ir::{Catalog, Design};

use crate::LintRule;

/// Detects instances that take part in no connection and no external binding.
pub struct IsolatedInstance;

impl LintRule for IsolatedInstance {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 102)
    }

    fn name(&self) -> &str {
        "isolated-instance"
    }

    fn description(&self) -> &str {
        "instance has no connections or external ports"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_design(&self, design: &Design, _catalog: &Catalog, sink: &DiagnosticSink) {
        for instance in &design.instances {
            if design.is_instance_bound(&instance.name) {
                continue;
            }
            sink.emit(
                Diagnostic::warning(
                    self.code(),
                    format!(
                        "instance `{}` of `{}` is not connected to anything",
                        instance.name, instance.ip_type
                    ),
                )
                .with_subject(Subject::node(&instance.name))
                .with_help("remove the instance or connect one of its interfaces"),
            );
        }
    }
}
