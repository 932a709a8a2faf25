//! The validated design.
//!
//! A [`Design`] is the output contract for downstream code generators. Field
//! names are the wire format and every list keeps declaration order, so the
//! same description always serializes to the same bytes.

use crate::description::Endpoint;
use crate::direction::{Direction, ExternalKind};
use loom_common::{ContentHash, InternalError, LoomResult};
use serde::{Deserialize, Serialize};

/// An IP-core instance bound to its catalog type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance name.
    pub name: String,
    /// The IP-core type, a weak reference into the catalog.
    #[serde(rename = "type")]
    pub ip_type: String,
}

/// A validated connection between two instance interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConnection {
    /// The endpoint declared first.
    pub from: Endpoint,
    /// The endpoint declared second.
    pub to: Endpoint,
}

/// A validated binding of an instance interface to a top-level port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalBinding {
    /// Top-level port name.
    pub port: String,
    /// Chip-boundary side of the port.
    pub kind: ExternalKind,
    /// The bound instance interface.
    pub endpoint: Endpoint,
    /// The catalog direction of the bound interface.
    pub direction: Direction,
}

/// A fully validated composition of IP-core instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Design {
    /// Instances in declaration order.
    pub instances: Vec<Instance>,
    /// Connections in declaration order.
    pub connections: Vec<InterfaceConnection>,
    /// External-port bindings in declaration order.
    pub externals: Vec<ExternalBinding>,
}

impl Design {
    /// Finds an instance by name.
    pub fn instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|i| i.name == name)
    }

    /// Finds the binding of a top-level port.
    pub fn external(&self, port: &str) -> Option<&ExternalBinding> {
        self.externals.iter().find(|e| e.port == port)
    }

    /// Returns `true` if any connection or external binding touches `instance`.
    pub fn is_instance_bound(&self, instance: &str) -> bool {
        self.connections
            .iter()
            .any(|c| c.from.instance == instance || c.to.instance == instance)
            || self.externals.iter().any(|e| e.endpoint.instance == instance)
    }

    /// Computes a content hash of the design's canonical binary encoding.
    ///
    /// Equal designs always produce equal fingerprints.
    pub fn fingerprint(&self) -> LoomResult<ContentHash> {
        let bytes = bincode::serde::encode_to_vec(self, bincode::config::standard())
            .map_err(|e| InternalError::new(format!("failed to encode design: {e}")))?;
        Ok(ContentHash::from_bytes(&bytes))
    }
}
