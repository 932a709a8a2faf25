//! Conformance test helpers for the Loom toolchain.
//!
//! Provides a realistic fixture (the [`hdmi`] pipeline: 12 IP cores and two
//! external ports), helpers that move a design between its description and
//! editor-graph forms, and a pipeline runner (build → lint) that returns
//! structured results for assertion in integration tests.

#![warn(missing_docs)]

pub mod hdmi;

use loom_config::LintConfig;
use loom_diagnostics::{Diagnostic, DiagnosticSink, Severity};
use loom_ir::{Catalog, Design, DesignDescription, ExternalKind, Graph, METANODE_INTERFACE};
use loom_lint::LintEngine;
use loom_translate::{metanode_descriptor, to_editor_specification, GraphBuilder};

/// Result of running the build → lint pipeline.
pub struct PipelineResult {
    /// The built design, if the build succeeded.
    pub design: Option<Design>,
    /// All diagnostics emitted during the pipeline.
    pub diagnostics: Vec<Diagnostic>,
    /// Whether any errors were emitted.
    pub has_errors: bool,
    /// Number of error-severity diagnostics.
    pub error_count: usize,
    /// Number of warning-severity diagnostics.
    pub warning_count: usize,
}

impl PipelineResult {
    /// Returns `true` if a diagnostic with the given code (e.g. `"W102"`) was emitted.
    pub fn has_code(&self, code: &str) -> bool {
        self.diagnostics.iter().any(|d| d.code.to_string() == code)
    }
}

/// Loads the HDMI fixture catalog.
pub fn hdmi_catalog() -> Catalog {
    let entries = hdmi::IP_CORES
        .iter()
        .map(|(file, text)| {
            loom_config::load_ip_core_from_str(text)
                .unwrap_or_else(|e| panic!("fixture {file} does not parse: {e}"))
        })
        .collect();
    Catalog::new(entries).expect("fixture catalog is valid")
}

/// Loads the HDMI fixture design description.
pub fn hdmi_description() -> DesignDescription {
    loom_config::load_description_from_str(hdmi::DESIGN).expect("fixture design parses")
}

/// Draws `desc` as the editor would save it.
///
/// Every instance becomes a node, every connection an edge, and every
/// external binding a metanode named after its port. External inputs drive
/// their endpoint; external outputs are driven by it.
///
/// # Panics
///
/// Panics if the description names a type or interface absent from `catalog`.
pub fn graph_from_description(desc: &DesignDescription, catalog: &Catalog) -> Graph {
    let spec = to_editor_specification(catalog);
    let mut builder = GraphBuilder::new();
    let mut nodes = std::collections::HashMap::new();

    for inst in &desc.instances {
        let descriptor = spec
            .node_type(&inst.ip_type)
            .unwrap_or_else(|| panic!("unknown type `{}`", inst.ip_type));
        nodes.insert(inst.name.as_str(), builder.add_node(&inst.name, descriptor));
    }

    for conn in &desc.connections {
        builder
            .connect(
                nodes[conn.from.instance.as_str()],
                &conn.from.interface,
                nodes[conn.to.instance.as_str()],
                &conn.to.interface,
            )
            .unwrap_or_else(|| panic!("cannot connect {} -> {}", conn.from, conn.to));
    }

    for ext in &desc.externals {
        let port = builder.add_node(&ext.port, &metanode_descriptor(ext.kind));
        let inner = nodes[ext.endpoint.instance.as_str()];
        let iface = ext.endpoint.interface.as_str();
        let connected = match ext.kind {
            ExternalKind::Input => builder.connect(port, METANODE_INTERFACE, inner, iface),
            ExternalKind::Output => builder.connect(inner, iface, port, METANODE_INTERFACE),
        };
        connected.unwrap_or_else(|| panic!("cannot bind port {}", ext.port));
    }

    builder.finish()
}

/// Rewrites every interface id in `graph` through `relabel`, connections included.
pub fn relabel_interface_ids(graph: &mut Graph, relabel: impl Fn(&str) -> String) {
    for node in &mut graph.nodes {
        for iface in &mut node.interfaces {
            iface.id = relabel(&iface.id);
        }
    }
    for conn in &mut graph.connections {
        conn.from = relabel(&conn.from);
        conn.to = relabel(&conn.to);
    }
}

/// Creates a `LintConfig` with deny/allow overrides.
pub fn make_lint_config(deny: &[&str], allow: &[&str]) -> LintConfig {
    LintConfig {
        deny: deny.iter().map(|s| s.to_string()).collect(),
        allow: allow.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds `desc` against `catalog` and lints the result with default rules.
pub fn run_pipeline(desc: &DesignDescription, catalog: &Catalog) -> PipelineResult {
    run_pipeline_with_lint(desc, catalog, &LintConfig::default())
}

/// Builds `desc` against `catalog` and lints the result with `lint`.
pub fn run_pipeline_with_lint(
    desc: &DesignDescription,
    catalog: &Catalog,
    lint: &LintConfig,
) -> PipelineResult {
    let sink = DiagnosticSink::new();
    let design = loom_elaborate::elaborate(desc, catalog, &sink);
    if let Some(design) = &design {
        LintEngine::new(lint).run(design, catalog, &sink);
    }
    let diagnostics = sink.take_all();
    let error_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warning_count = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    PipelineResult {
        design,
        has_errors: error_count > 0,
        diagnostics,
        error_count,
        warning_count,
    }
}
