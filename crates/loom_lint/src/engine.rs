//! Lint engine that manages rule registration, configuration, and execution.

use std::collections::HashSet;

use loom_config::LintConfig;
use loom_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use loom_ir::{Catalog, Design};

use crate::rules::register_builtin_rules;
use crate::LintRule;

/// Runs the registered lint rules over a design.
///
/// A rule listed in the config's `allow` set is skipped; one in the `deny` set
/// has its diagnostics promoted to errors. Rules may be named either by their
/// kebab-case name or their code (`"W101"`).
pub struct LintEngine {
    rules: Vec<Box<dyn LintRule>>,
    denied: RuleSet,
    allowed: RuleSet,
}

/// Config entries split into codes (`w101` parses too) and rule names.
#[derive(Default)]
struct RuleSet {
    codes: HashSet<DiagnosticCode>,
    names: HashSet<String>,
}

impl RuleSet {
    fn new(entries: &[String]) -> Self {
        let mut set = Self::default();
        for entry in entries {
            match entry.parse() {
                Ok(code) => {
                    set.codes.insert(code);
                }
                Err(_) => {
                    set.names.insert(entry.clone());
                }
            }
        }
        set
    }

    fn matches(&self, rule: &dyn LintRule) -> bool {
        self.codes.contains(&rule.code()) || self.names.contains(rule.name())
    }
}

impl LintEngine {
    /// Creates an engine with all builtin rules, configured by `config`.
    pub fn new(config: &LintConfig) -> Self {
        let mut engine = Self {
            rules: Vec::new(),
            denied: RuleSet::new(&config.deny),
            allowed: RuleSet::new(&config.allow),
        };
        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates an engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&LintConfig::default())
    }

    /// Registers a lint rule with the engine.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.push(rule);
    }

    /// Returns the number of registered rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all registered rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Runs every enabled rule on `design`, emitting into `sink`.
    pub fn run(&self, design: &Design, catalog: &Catalog, sink: &DiagnosticSink) {
        for rule in &self.rules {
            if self.allowed.matches(rule.as_ref()) {
                continue;
            }

            let temp_sink = DiagnosticSink::new();
            rule.check_design(design, catalog, &temp_sink);

            let is_denied = self.denied.matches(rule.as_ref());
            sink.extend(temp_sink.take_all().into_iter().map(|mut diag| {
                if is_denied {
                    diag.severity = Severity::Error;
                }
                diag
            }));
        }
    }
}
