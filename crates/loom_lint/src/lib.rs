//! Lint rules and engine for validated designs.
//!
//! Lints run after a design has been built successfully and never reject it
//! on their own; they point out compositions that are legal but probably not
//! what was intended.
//!
//! # Rule Categories
//!
//! - **W-series (warnings):** unconnected interfaces, isolated instances
//! - **C-series (conventions):** naming violations

#![warn(missing_docs)]

mod engine;
mod rules;

pub use engine::LintEngine;
pub use rules::register_builtin_rules;
pub use rules::{is_snake_case, IsolatedInstance, NamingViolation, UnconnectedInterface};

use loom_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use loom_ir::{Catalog, Design};

/// A single lint rule that checks a design for likely mistakes.
///
/// Each rule has a unique diagnostic code, a kebab-case name, a description,
/// and a default severity. `check_design` is called once per run and emits
/// diagnostics via the provided sink.
pub trait LintRule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g., W101).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule (e.g., "isolated-instance").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks the design and emits diagnostics to the sink.
    fn check_design(&self, design: &Design, catalog: &Catalog, sink: &DiagnosticSink);
}
