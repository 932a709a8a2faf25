//! Partitioning properties over editor graphs.

use std::collections::HashSet;

use loom_conformance::{graph_from_description, hdmi_catalog, hdmi_description};
use loom_graph::{external_connections, ip_connections, InterfaceIndex, Partition};
use loom_ir::{Connection, Graph, NodeId};

fn hdmi_graph() -> Graph {
    graph_from_description(&hdmi_description(), &hdmi_catalog())
}

/// The HDMI graph plus a dangling edge and a metanode-to-metanode edge.
fn noisy_graph() -> Graph {
    let mut graph = hdmi_graph();
    graph.connections.push(Connection::new("0", "does-not-exist"));
    let metanode_ids: Vec<String> = graph
        .nodes
        .iter()
        .filter(|n| n.kind.is_metanode())
        .map(|n| n.interfaces[0].id.clone())
        .collect();
    graph
        .connections
        .push(Connection::new(metanode_ids[0].clone(), metanode_ids[1].clone()));
    graph
}

#[test]
fn node_partition_is_exact_and_disjoint() {
    for graph in [hdmi_graph(), noisy_graph(), Graph::default()] {
        let partition = Partition::new(&graph);
        let core: HashSet<NodeId> = partition.core_nodes().iter().copied().collect();
        let meta: HashSet<NodeId> = partition.metanodes().iter().copied().collect();
        assert!(core.is_disjoint(&meta));
        let all: HashSet<NodeId> = graph.iter_nodes().map(|(id, _)| id).collect();
        assert_eq!(&core | &meta, all);
    }
}

#[test]
fn each_connection_lands_in_at_most_one_view() {
    let graph = noisy_graph();
    let partition = Partition::new(&graph);
    let ip: HashSet<_> = partition.ip_connections().iter().map(|(id, _)| *id).collect();
    let ext: HashSet<_> = partition
        .external_connections()
        .iter()
        .map(|(id, _)| *id)
        .collect();
    assert!(ip.is_disjoint(&ext));

    for (id, conn) in graph.iter_connections() {
        let touches_metanode = partition.external_interfaces().contains(&conn.from)
            || partition.external_interfaces().contains(&conn.to);
        let both_core = partition.core_interfaces().contains(&conn.from)
            && partition.core_interfaces().contains(&conn.to);
        if touches_metanode {
            assert!(ext.contains(&id) && !ip.contains(&id));
        } else if both_core {
            assert!(ip.contains(&id) && !ext.contains(&id));
        } else {
            assert!(!ip.contains(&id) && !ext.contains(&id));
        }
    }
}

#[test]
fn free_functions_match_partition() {
    let graph = noisy_graph();
    let partition = Partition::new(&graph);
    assert_eq!(ip_connections(&graph).len(), partition.ip_connections().len());
    assert_eq!(
        external_connections(&graph).len(),
        partition.external_connections().len()
    );
    // One dangling edge sits in neither view.
    assert_eq!(
        ip_connections(&graph).len() + external_connections(&graph).len() + 1,
        graph.connections.len()
    );
}

#[test]
fn index_covers_every_interface() {
    let graph = hdmi_graph();
    let index = InterfaceIndex::of_graph(&graph);
    let total: usize = graph.nodes.iter().map(|n| n.interfaces.len()).sum();
    assert_eq!(index.len(), total);
    for (id, node) in graph.iter_nodes() {
        for iface in &node.interfaces {
            let entry = index.get(&iface.id).unwrap();
            assert_eq!(entry.node, id);
            assert_eq!(entry.node_name, node.name);
            assert_eq!(entry.interface_name, iface.name);
            assert_eq!(entry.direction, iface.direction);
        }
    }
}
