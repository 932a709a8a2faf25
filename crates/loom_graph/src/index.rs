//! Interface id lookup tables.

use std::collections::HashMap;

use loom_ir::{Direction, Graph, Node, NodeId};

/// Where an interface id points: its owning node, its name, and its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceEntry<'g> {
    /// Position of the owning node in the graph.
    pub node: NodeId,
    /// Name of the owning node.
    pub node_name: &'g str,
    /// Name of the interface on that node.
    pub interface_name: &'g str,
    /// Direction of the interface.
    pub direction: Direction,
}

/// A map from graph-local interface id to [`InterfaceEntry`].
///
/// Built over any subset of a graph's nodes. Ids are expected to be unique
/// within that subset; if they are not, the later node's entry is kept.
#[derive(Debug, Clone, Default)]
pub struct InterfaceIndex<'g> {
    entries: HashMap<&'g str, InterfaceEntry<'g>>,
}

impl<'g> InterfaceIndex<'g> {
    /// Indexes every interface of the given nodes.
    pub fn build<I>(nodes: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, &'g Node)>,
    {
        let mut entries = HashMap::new();
        for (node_id, node) in nodes {
            for iface in &node.interfaces {
                entries.insert(
                    iface.id.as_str(),
                    InterfaceEntry {
                        node: node_id,
                        node_name: &node.name,
                        interface_name: &iface.name,
                        direction: iface.direction,
                    },
                );
            }
        }
        Self { entries }
    }

    /// Indexes every interface in the graph, IP cores and metanodes alike.
    pub fn of_graph(graph: &'g Graph) -> Self {
        Self::build(graph.iter_nodes())
    }

    /// Looks up an interface id. `None` means the id belongs to no indexed node.
    pub fn get(&self, id: &str) -> Option<InterfaceEntry<'g>> {
        self.entries.get(id).copied()
    }

    /// Returns `true` if the id belongs to an indexed node.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns the number of indexed interfaces.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
