//! Whole-graph lookups used for inspection and debugging.

use loom_ir::{Graph, Node, NodeKind};

use crate::index::{InterfaceEntry, InterfaceIndex};

/// Signals that a lookup found nothing.
///
/// Not a failure of the graph; callers decide whether absence matters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no node named `{0}`")]
pub struct NotFound(pub String);

/// Resolves an interface id across all nodes, IP cores and metanodes alike.
///
/// Unlike the [`Partition`](crate::Partition) views this ignores node kind.
pub fn find_interface_by_id<'g>(graph: &'g Graph, id: &str) -> Option<InterfaceEntry<'g>> {
    InterfaceIndex::of_graph(graph).get(id)
}

/// Returns the first node with the given name.
pub fn find_node_by_name<'g>(graph: &'g Graph, name: &str) -> Result<&'g Node, NotFound> {
    graph
        .nodes
        .iter()
        .find(|n| n.name == name)
        .ok_or_else(|| NotFound(name.to_string()))
}

/// Returns the type of the first node with the given name.
pub fn find_node_type_by_name<'g>(graph: &'g Graph, name: &str) -> Result<&'g NodeKind, NotFound> {
    find_node_by_name(graph, name).map(|n| &n.kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{node, uart_pair};
    use loom_ir::{Direction, NodeId};

    #[test]
    fn finds_core_and_metanode_interfaces() {
        let graph = uart_pair();
        let tx = find_interface_by_id(&graph, "1").unwrap();
        assert_eq!((tx.node_name, tx.interface_name), ("u0", "tx"));

        let ext = find_interface_by_id(&graph, "6").unwrap();
        assert_eq!(ext.node, NodeId::from_raw(3));
        assert_eq!(ext.direction, Direction::Input);
    }

    #[test]
    fn unknown_id_is_none() {
        let graph = uart_pair();
        assert!(find_interface_by_id(&graph, "99").is_none());
    }

    #[test]
    fn node_type_by_name() {
        let graph = uart_pair();
        assert_eq!(
            find_node_type_by_name(&graph, "u1").unwrap(),
            &NodeKind::IpCore("uart".into())
        );
        assert_eq!(
            find_node_type_by_name(&graph, "in0").unwrap(),
            &NodeKind::ExternalInput
        );
    }

    #[test]
    fn first_match_wins() {
        let mut graph = uart_pair();
        graph.nodes.push(node("u0", "spi", Vec::new()));
        assert_eq!(
            find_node_type_by_name(&graph, "u0").unwrap().ip_type(),
            Some("uart")
        );
    }

    #[test]
    fn missing_name_not_found() {
        let graph = uart_pair();
        let err = find_node_type_by_name(&graph, "ghost").unwrap_err();
        assert_eq!(err, NotFound("ghost".into()));
        assert_eq!(err.to_string(), "no node named `ghost`");
    }
}
