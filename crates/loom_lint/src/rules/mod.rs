//! Built-in lint rule implementations.

mod c201;
mod w101;
mod w102;

pub use c201::{is_snake_case, NamingViolation};
pub use w101::UnconnectedInterface;
pub use w102::IsolatedInstance;

use std::collections::HashSet;

use loom_ir::Design;

use crate::LintEngine;

/// Registers the built-in rules W101, W102 and C201 with the engine.
pub fn register_builtin_rules(engine: &mut LintEngine) {
    engine.register(Box::new(UnconnectedInterface));
    engine.register(Box::new(IsolatedInstance));
    engine.register(Box::new(NamingViolation));
}

/// Every `(instance, interface)` pair used by a connection or external binding.
fn bound_endpoints(design: &Design) -> HashSet<(&str, &str)> {
    let connected = design
        .connections
        .iter()
        .flat_map(|c| [&c.from, &c.to]);
    let external = design.externals.iter().map(|e| &e.endpoint);
    connected
        .chain(external)
        .map(|ep| (ep.instance.as_str(), ep.interface.as_str()))
        .collect()
}
