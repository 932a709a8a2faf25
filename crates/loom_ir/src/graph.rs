//! The editor-facing dataflow graph.
//!
//! This mirrors the JSON the graph editor saves:
//!
//! ```json
//! { "graph": {
//!     "nodes": [ { "name": "u0", "type": "uart",
//!                  "interfaces": [ { "id": "i1", "name": "tx", "direction": "output" } ] } ],
//!     "connections": [ { "id": "c1", "from": "i1", "to": "i2" } ] } }
//! ```
//!
//! Interface ids are opaque and scoped to one graph instance.

use crate::direction::{Direction, ExternalKind};
use crate::ids::{ConnectionId, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type tag of a node that represents a top-level input port.
pub const EXTERNAL_INPUT_TYPE: &str = "External Input";

/// The type tag of a node that represents a top-level output port.
pub const EXTERNAL_OUTPUT_TYPE: &str = "External Output";

/// The name of the single interface every metanode exposes.
pub const METANODE_INTERFACE: &str = "external";

/// What a node stands for.
///
/// The two metanode kinds are closed; every other type tag names an IP core.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// An instance of the named IP-core type.
    IpCore(String),
    /// A top-level input port.
    ExternalInput,
    /// A top-level output port.
    ExternalOutput,
}

impl NodeKind {
    /// Returns `true` for the two external-port kinds.
    pub fn is_metanode(&self) -> bool {
        !matches!(self, NodeKind::IpCore(_))
    }

    /// Returns the IP-core type name, or `None` for metanodes.
    pub fn ip_type(&self) -> Option<&str> {
        match self {
            NodeKind::IpCore(ty) => Some(ty),
            _ => None,
        }
    }

    /// Returns the boundary side of a metanode.
    pub fn external_kind(&self) -> Option<ExternalKind> {
        match self {
            NodeKind::IpCore(_) => None,
            NodeKind::ExternalInput => Some(ExternalKind::Input),
            NodeKind::ExternalOutput => Some(ExternalKind::Output),
        }
    }

    /// The direction a metanode's sole interface must have.
    pub fn metanode_direction(&self) -> Option<Direction> {
        self.external_kind().map(ExternalKind::inner_direction)
    }

    /// Returns the type tag as it appears in the editor's JSON.
    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::IpCore(ty) => ty,
            NodeKind::ExternalInput => EXTERNAL_INPUT_TYPE,
            NodeKind::ExternalOutput => EXTERNAL_OUTPUT_TYPE,
        }
    }
}

impl From<ExternalKind> for NodeKind {
    fn from(kind: ExternalKind) -> Self {
        match kind {
            ExternalKind::Input => NodeKind::ExternalInput,
            ExternalKind::Output => NodeKind::ExternalOutput,
        }
    }
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            EXTERNAL_INPUT_TYPE => NodeKind::ExternalInput,
            EXTERNAL_OUTPUT_TYPE => NodeKind::ExternalOutput,
            _ => NodeKind::IpCore(tag),
        }
    }
}

impl From<&str> for NodeKind {
    fn from(tag: &str) -> Self {
        NodeKind::from(tag.to_string())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::IpCore(ty) => ty,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connection point on a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    /// Editor-assigned id, unique within the graph.
    pub id: String,
    /// Name, unique within the owning node.
    pub name: String,
    /// Direction of data flow.
    pub direction: Direction,
}

/// A node of the dataflow graph: an IP-core instance or a metanode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node name, unique within the graph.
    pub name: String,
    /// The node's type tag.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Interfaces in editor order.
    #[serde(default)]
    pub interfaces: Vec<Interface>,
}

impl Node {
    /// Finds an interface by name.
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }
}

/// A directed edge between two interface ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// Editor-assigned connection id, if the editor sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Interface id of the source side.
    pub from: String,
    /// Interface id of the sink side.
    pub to: String,
}

impl Connection {
    /// Creates a connection without an editor id.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            id: None,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A raw dataflow graph as produced by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// All nodes, in editor order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// All connections, in editor order.
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Graph {
    /// Returns the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not come from this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Iterates over `(NodeId, &Node)` pairs in editor order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_raw(i as u32), node))
    }

    /// Iterates over `(ConnectionId, &Connection)` pairs in editor order.
    pub fn iter_connections(&self) -> impl Iterator<Item = (ConnectionId, &Connection)> {
        self.connections
            .iter()
            .enumerate()
            .map(|(i, conn)| (ConnectionId::from_raw(i as u32), conn))
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// The top-level document the editor exchanges: `{ "graph": { ... } }`.
///
/// Any other top-level keys the editor writes are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataflow {
    /// The graph itself.
    pub graph: Graph,
}
