//! W101: Unconnected interface: an instance interface with no binding.

use loom_diagnostics::{Category, Diagnostic, DiagnosticCode, DiagnosticSink, Severity, Subject};
use loom_ir::{Catalog, Design};

use super::bound_endpoints;
use crate::LintRule;

/// Detects instance interfaces that are neither connected nor exposed as an
/// external port.
///
/// Instances with no bindings at all are left to W102 so that an unused
/// instance is reported once rather than once per interface.
pub struct UnconnectedInterface;

impl LintRule for UnconnectedInterface {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Warning, 101)
    }

    fn name(&self) -> &str {
        "unconnected-interface"
    }

    fn description(&self) -> &str {
        "interface is neither connected nor externally bound"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_design(&self, design: &Design, catalog: &Catalog, sink: &DiagnosticSink) {
        let bound = bound_endpoints(design);
        for instance in &design.instances {
            if !design.is_instance_bound(&instance.name) {
                continue;
            }
            let Some(spec) = catalog.get(&instance.ip_type) else {
                continue;
            };
            for iface in &spec.interfaces {
                if bound.contains(&(instance.name.as_str(), iface.name.as_str())) {
                    continue;
                }
                sink.emit(
                    Diagnostic::warning(
                        self.code(),
                        format!("unconnected interface `{}.{}`", instance.name, iface.name),
                    )
                    .with_subject(Subject::interface(&instance.name, &iface.name))
                    .with_help("connect it, expose it as an external port, or allow W101"),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::testing::{catalog, instance, uart_chain};

    #[test]
    fn reports_open_interface() {
        let sink = DiagnosticSink::new();
        UnconnectedInterface.check_design(&uart_chain(), &catalog(), &sink);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].subject, Some(Subject::interface("u0", "rx")));
    }

    #[test]
    fn isolated_instance_is_left_to_w102() {
        let mut design = uart_chain();
        design.instances.push(instance("u2"));
        let sink = DiagnosticSink::new();
        UnconnectedInterface.check_design(&design, &catalog(), &sink);
        assert!(sink
            .take_all()
            .iter()
            .all(|d| d.subject.as_ref().map(|s| s.node.as_str()) != Some("u2")));
    }

    #[test]
    fn fully_bound_design_is_clean() {
        let mut design = uart_chain();
        design.externals.push(loom_ir::ExternalBinding {
            port: "in0".into(),
            kind: loom_ir::ExternalKind::Input,
            endpoint: loom_ir::Endpoint::new("u0", "rx"),
            direction: loom_ir::Direction::Input,
        });
        let sink = DiagnosticSink::new();
        UnconnectedInterface.check_design(&design, &catalog(), &sink);
        assert_eq!(sink.warning_count(), 0);
    }
}
