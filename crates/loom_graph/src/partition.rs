//! Splitting a raw graph into IP-core and external-port views.

use loom_ir::{Connection, ConnectionId, Graph, Node, NodeId};

use crate::index::InterfaceIndex;

/// Which side of the partition a node falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// An IP-core instance.
    Core,
    /// An external-port metanode.
    External,
}

/// Classifies a node purely by its type tag.
pub fn classify(node: &Node) -> NodeClass {
    if node.kind.is_metanode() {
        NodeClass::External
    } else {
        NodeClass::Core
    }
}

/// A graph split into IP-core nodes and metanodes, with per-side interface
/// indexes.
///
/// Connections whose endpoints resolve to neither side are left out of both
/// [`ip_connections`](Self::ip_connections) and
/// [`external_connections`](Self::external_connections); reporting them is
/// the builder's concern.
#[derive(Debug, Clone)]
pub struct Partition<'g> {
    graph: &'g Graph,
    core_nodes: Vec<NodeId>,
    metanodes: Vec<NodeId>,
    core_interfaces: InterfaceIndex<'g>,
    external_interfaces: InterfaceIndex<'g>,
}

impl<'g> Partition<'g> {
    /// Partitions the graph's nodes and indexes each side.
    pub fn new(graph: &'g Graph) -> Self {
        let (core_nodes, metanodes): (Vec<NodeId>, Vec<NodeId>) = graph
            .iter_nodes()
            .map(|(id, _)| id)
            .partition(|&id| classify(graph.node(id)) == NodeClass::Core);

        let core_interfaces =
            InterfaceIndex::build(core_nodes.iter().map(|&id| (id, graph.node(id))));
        let external_interfaces =
            InterfaceIndex::build(metanodes.iter().map(|&id| (id, graph.node(id))));

        Self {
            graph,
            core_nodes,
            metanodes,
            core_interfaces,
            external_interfaces,
        }
    }

    /// The partitioned graph.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// IP-core nodes in graph order.
    pub fn core_nodes(&self) -> &[NodeId] {
        &self.core_nodes
    }

    /// Metanodes in graph order.
    pub fn metanodes(&self) -> &[NodeId] {
        &self.metanodes
    }

    /// Index over IP-core interfaces only.
    pub fn core_interfaces(&self) -> &InterfaceIndex<'g> {
        &self.core_interfaces
    }

    /// Index over metanode interfaces only.
    pub fn external_interfaces(&self) -> &InterfaceIndex<'g> {
        &self.external_interfaces
    }

    /// Connections whose endpoints are both IP-core interfaces.
    pub fn ip_connections(&self) -> Vec<(ConnectionId, &'g Connection)> {
        self.graph
            .iter_connections()
            .filter(|(_, c)| {
                self.core_interfaces.contains(&c.from) && self.core_interfaces.contains(&c.to)
            })
            .collect()
    }

    /// Connections with at least one metanode endpoint.
    pub fn external_connections(&self) -> Vec<(ConnectionId, &'g Connection)> {
        self.graph
            .iter_connections()
            .filter(|(_, c)| {
                self.external_interfaces.contains(&c.from)
                    || self.external_interfaces.contains(&c.to)
            })
            .collect()
    }
}

/// Connections between two IP cores.
pub fn ip_connections(graph: &Graph) -> Vec<&Connection> {
    Partition::new(graph)
        .ip_connections()
        .into_iter()
        .map(|(_, c)| c)
        .collect()
}

/// Connections to or from an external-port metanode.
pub fn external_connections(graph: &Graph) -> Vec<&Connection> {
    Partition::new(graph)
        .external_connections()
        .into_iter()
        .map(|(_, c)| c)
        .collect()
}
