//! Instantiating palette entries into a graph.

use loom_ir::{
    Connection, ConnectionId, Graph, Interface, Node, NodeId, NodeKind, NodeTypeDescriptor,
};

/// Builds an editor graph node by node, assigning fresh interface ids.
///
/// Ids are decimal strings counting up from zero across the whole graph, so
/// two builders fed the same calls produce identical graphs.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    next_interface: u32,
}

impl GraphBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node named `name` shaped like `descriptor`.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        descriptor: &NodeTypeDescriptor,
    ) -> NodeId {
        let interfaces = descriptor
            .interfaces
            .iter()
            .map(|d| {
                let id = self.next_interface.to_string();
                self.next_interface += 1;
                Interface {
                    id,
                    name: d.name.clone(),
                    direction: d.direction,
                }
            })
            .collect();
        let id = NodeId::from_raw(self.graph.nodes.len() as u32);
        self.graph.nodes.push(Node {
            name: name.into(),
            kind: NodeKind::from(descriptor.node_type.as_str()),
            interfaces,
        });
        id
    }

    /// Connects `from.from_iface` to `to.to_iface`.
    ///
    /// Returns `None` if either interface name is absent on its node. No
    /// direction or fan-out checks are made, as in the editor itself.
    pub fn connect(
        &mut self,
        from: NodeId,
        from_iface: &str,
        to: NodeId,
        to_iface: &str,
    ) -> Option<ConnectionId> {
        let from_id = self.graph.node(from).interface(from_iface)?.id.clone();
        let to_id = self.graph.node(to).interface(to_iface)?.id.clone();
        let id = ConnectionId::from_raw(self.graph.connections.len() as u32);
        self.graph.connections.push(Connection::new(from_id, to_id));
        Some(id)
    }

    /// Returns the graph built so far.
    pub fn finish(self) -> Graph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::metanode_descriptor;
    use loom_ir::{Direction, ExternalKind, InterfaceDescriptor};

    fn uart() -> NodeTypeDescriptor {
        let port = |name: &str, direction| InterfaceDescriptor {
            name: name.into(),
            iface_type: "port".into(),
            direction,
            max_connections_count: None,
        };
        NodeTypeDescriptor {
            name: "uart".into(),
            node_type: "uart".into(),
            category: "IPcore".into(),
            interfaces: vec![port("tx", Direction::Output), port("rx", Direction::Input)],
        }
    }

    #[test]
    fn ids_are_unique_across_nodes() {
        let mut builder = GraphBuilder::new();
        builder.add_node("u0", &uart());
        builder.add_node("u1", &uart());
        let graph = builder.finish();
        let ids: Vec<_> = graph
            .nodes
            .iter()
            .flat_map(|n| n.interfaces.iter().map(|i| i.id.as_str()))
            .collect();
        assert_eq!(ids, ["0", "1", "2", "3"]);
    }

    #[test]
    fn metanode_kind_from_tag() {
        let mut builder = GraphBuilder::new();
        let out = builder.add_node("out0", &metanode_descriptor(ExternalKind::Output));
        let graph = builder.finish();
        assert_eq!(graph.node(out).kind, NodeKind::ExternalOutput);
    }

    #[test]
    fn connect_by_name() {
        let mut builder = GraphBuilder::new();
        let u0 = builder.add_node("u0", &uart());
        let u1 = builder.add_node("u1", &uart());
        assert!(builder.connect(u0, "tx", u1, "rx").is_some());
        assert!(builder.connect(u0, "cts", u1, "rx").is_none());
        let graph = builder.finish();
        assert_eq!(graph.connections, vec![Connection::new("0", "3")]);
    }
}
