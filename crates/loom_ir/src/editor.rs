//! The node-type specification consumed by the graph editor.
//!
//! The editor renders its palette from this document: one descriptor per
//! IP-core type plus the two metanode descriptors, which are the editor's only
//! way of drawing top-level ports.

use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// Palette category of IP-core descriptors.
pub const IP_CORE_CATEGORY: &str = "IPcore";

/// Palette category of the external-port descriptors.
pub const METANODE_CATEGORY: &str = "Metanode";

/// Interface type used when the catalog gives none.
pub const DEFAULT_INTERFACE_TYPE: &str = "port";

/// Editor-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorMetadata {
    /// Whether a node may connect to its own interfaces.
    #[serde(rename = "allowLoopbacks")]
    pub allow_loopbacks: bool,
}

impl Default for EditorMetadata {
    fn default() -> Self {
        Self {
            allow_loopbacks: true,
        }
    }
}

/// One interface of a palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    /// Interface name.
    pub name: String,
    /// Interface type, used by the editor to restrict which sockets may meet.
    #[serde(rename = "type")]
    pub iface_type: String,
    /// Interface direction.
    pub direction: Direction,
    /// `-1` for unlimited connections; absent means the editor default of one.
    #[serde(
        rename = "maxConnectionsCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_connections_count: Option<i32>,
}

/// One palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeTypeDescriptor {
    /// Display name.
    pub name: String,
    /// Type tag the editor writes into graph nodes of this kind.
    #[serde(rename = "type")]
    pub node_type: String,
    /// Palette category.
    pub category: String,
    /// Interfaces in catalog order.
    pub interfaces: Vec<InterfaceDescriptor>,
}

/// The full document handed to the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSpecification {
    /// Editor-wide settings.
    pub metadata: EditorMetadata,
    /// Palette entries: IP cores in catalog order, then the metanodes.
    pub nodes: Vec<NodeTypeDescriptor>,
}

impl EditorSpecification {
    /// Finds a palette entry by its type tag.
    pub fn node_type(&self, node_type: &str) -> Option<&NodeTypeDescriptor> {
        self.nodes.iter().find(|n| n.node_type == node_type)
    }
}
