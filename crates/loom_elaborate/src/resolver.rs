//! Catalog lookups by IP-core type and interface name.

use loom_ir::{Catalog, InterfaceSpec, IpCoreSpec};

/// Resolves `(IP-core type, interface name)` pairs against a catalog.
///
/// Absence is not an error here; callers decide what a miss means.
#[derive(Debug, Clone, Copy)]
pub struct SpecResolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> SpecResolver<'c> {
    /// Creates a resolver over the given catalog.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// Returns the specification of an IP-core type.
    pub fn ip_core(&self, ip_type: &str) -> Option<&'c IpCoreSpec> {
        self.catalog.get(ip_type)
    }

    /// Returns the canonical definition of `interface` on `ip_type`.
    ///
    /// The type is looked up first, then its interfaces are scanned in
    /// declaration order; the first name match wins.
    pub fn resolve(&self, ip_type: &str, interface: &str) -> Option<&'c InterfaceSpec> {
        self.ip_core(ip_type)?.interface(interface)
    }
}
