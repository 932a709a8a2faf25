//! The catalog of known IP-core specifications.
//!
//! A [`Catalog`] is read-only once built and is shared by reference across
//! compilations. [`Catalog::new`] is the load-time validation boundary: it
//! guarantees unique type names and unique interface names per type, which
//! every lookup downstream relies on.

use crate::direction::Direction;
use crate::graph::{EXTERNAL_INPUT_TYPE, EXTERNAL_OUTPUT_TYPE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The canonical definition of one interface of an IP-core type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceSpec {
    /// Interface name, unique within its IP core.
    pub name: String,
    /// Direction relative to the IP core.
    pub direction: Direction,
    /// Whether the interface may take part in more than one binding (bus fan-out).
    #[serde(default)]
    pub multi: bool,
    /// Optional interface type, e.g. `AXI4Stream`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub iface_type: Option<String>,
    /// Optional width in bits for plain ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl InterfaceSpec {
    /// Creates a single-binding interface with no type or width metadata.
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            direction,
            multi: false,
            iface_type: None,
            width: None,
        }
    }

    /// Marks the interface as multi-connectable.
    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }
}

/// The specification of one IP-core type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpCoreSpec {
    /// The IP-core type name.
    pub name: String,
    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Interfaces in declaration order.
    #[serde(default)]
    pub interfaces: Vec<InterfaceSpec>,
}

impl IpCoreSpec {
    /// Creates a specification with the given interfaces.
    pub fn new(name: impl Into<String>, interfaces: Vec<InterfaceSpec>) -> Self {
        Self {
            name: name.into(),
            description: None,
            interfaces,
        }
    }

    /// Returns the first interface with the given name.
    pub fn interface(&self, name: &str) -> Option<&InterfaceSpec> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

/// Errors detected while assembling a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Two entries declare the same IP-core type.
    #[error("IP core `{0}` is declared more than once")]
    DuplicateIpCore(String),

    /// One entry declares two interfaces with the same name.
    #[error("IP core `{ip_core}` declares interface `{interface}` more than once")]
    DuplicateInterface {
        /// The IP-core type.
        ip_core: String,
        /// The repeated interface name.
        interface: String,
    },

    /// An entry uses a type name reserved for external-port metanodes.
    #[error("`{0}` is reserved for external ports and cannot name an IP core")]
    ReservedName(String),
}

/// A validated, read-only set of IP-core specifications.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<IpCoreSpec>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate or reserved names.
    ///
    /// Entry order is preserved for iteration.
    pub fn new(entries: Vec<IpCoreSpec>) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.name == EXTERNAL_INPUT_TYPE || entry.name == EXTERNAL_OUTPUT_TYPE {
                return Err(CatalogError::ReservedName(entry.name.clone()));
            }
            if by_name.insert(entry.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateIpCore(entry.name.clone()));
            }
            let mut seen = std::collections::HashSet::new();
            for iface in &entry.interfaces {
                if !seen.insert(iface.name.as_str()) {
                    return Err(CatalogError::DuplicateInterface {
                        ip_core: entry.name.clone(),
                        interface: iface.name.clone(),
                    });
                }
            }
        }
        Ok(Self { entries, by_name })
    }

    /// Returns the specification of the given IP-core type.
    pub fn get(&self, ip_type: &str) -> Option<&IpCoreSpec> {
        self.by_name.get(ip_type).map(|&i| &self.entries[i])
    }

    /// Returns `true` if the catalog knows the given IP-core type.
    pub fn contains(&self, ip_type: &str) -> bool {
        self.by_name.contains_key(ip_type)
    }

    /// Iterates over all specifications in load order.
    pub fn iter(&self) -> impl Iterator<Item = &IpCoreSpec> {
        self.entries.iter()
    }

    /// Returns the number of IP-core types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
