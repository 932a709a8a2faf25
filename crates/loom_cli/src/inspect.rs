//! `loom inspect`: partition summary and lookups over an editor graph.
//!
//! Works on the graph alone; no project or catalog is needed.

use std::path::Path;

use loom_graph::{find_interface_by_id, find_node_type_by_name, Partition};
use loom_ir::Graph;

use crate::pipeline::read_graph;
use crate::{GlobalArgs, InspectArgs};

/// Runs the `loom inspect` command.
///
/// Returns exit code 1 if a requested lookup finds nothing.
pub fn run(args: &InspectArgs, _global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let graph = read_graph(Path::new(&args.graph))?;
    let (report, found) = inspect(&graph, args);
    print!("{report}");
    Ok(if found { 0 } else { 1 })
}

/// Builds the report text, and whether every requested lookup succeeded.
fn inspect(graph: &Graph, args: &InspectArgs) -> (String, bool) {
    let partition = Partition::new(graph);
    let ip = partition.ip_connections();
    let external = partition.external_connections();
    // Ids shared between a core node and a metanode land in both views.
    let unresolved = graph
        .iter_connections()
        .filter(|(id, _)| {
            !ip.iter().any(|(seen, _)| seen == id) && !external.iter().any(|(seen, _)| seen == id)
        })
        .count();
    let mut out = format!(
        "nodes: {} ({} IP core, {} metanode)\n",
        graph.node_count(),
        partition.core_nodes().len(),
        partition.metanodes().len(),
    );
    out.push_str(&format!(
        "connections: {} ({} core, {} external, {} unresolved)\n",
        graph.connections.len(),
        ip.len(),
        external.len(),
        unresolved,
    ));
    let mut found = true;

    if let Some(id) = &args.interface {
        match find_interface_by_id(graph, id) {
            Some(entry) => out.push_str(&format!(
                "interface {id}: {}.{} ({})\n",
                entry.node_name, entry.interface_name, entry.direction
            )),
            None => {
                out.push_str(&format!("interface {id}: not found\n"));
                found = false;
            }
        }
    }

    if let Some(name) = &args.node {
        match find_node_type_by_name(graph, name) {
            Ok(kind) => out.push_str(&format!("node {name}: {kind}\n")),
            Err(err) => {
                out.push_str(&format!("node {name}: {err}\n"));
                found = false;
            }
        }
    }

    (out, found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_ir::{Connection, Direction, Interface, Node, NodeKind};

    fn graph() -> Graph {
        let iface = |id: &str, name: &str, direction| Interface {
            id: id.into(),
            name: name.into(),
            direction,
        };
        Graph {
            nodes: vec![
                Node {
                    name: "u0".into(),
                    kind: NodeKind::from("uart"),
                    interfaces: vec![iface("1", "tx", Direction::Output)],
                },
                Node {
                    name: "out0".into(),
                    kind: NodeKind::ExternalOutput,
                    interfaces: vec![iface("2", "external", Direction::Input)],
                },
            ],
            connections: vec![Connection::new("1", "2"), Connection::new("1", "9")],
        }
    }

    fn args(interface: Option<&str>, node: Option<&str>) -> InspectArgs {
        InspectArgs {
            graph: String::new(),
            interface: interface.map(String::from),
            node: node.map(String::from),
        }
    }

    #[test]
    fn summary_counts() {
        let (report, found) = inspect(&graph(), &args(None, None));
        assert!(found);
        assert!(report.contains("nodes: 2 (1 IP core, 1 metanode)"));
        assert!(report.contains("connections: 2 (0 core, 1 external, 1 unresolved)"));
    }

    #[test]
    fn id_shared_across_views_is_not_unresolved() {
        let mut g = graph();
        g.nodes[1].interfaces[0].id = "1".into();
        g.connections = vec![Connection::new("1", "1")];
        let (report, _) = inspect(&g, &args(None, None));
        assert!(report.contains("connections: 1 (1 core, 1 external, 0 unresolved)"));
    }

    #[test]
    fn interface_lookup_spans_metanodes() {
        let (report, found) = inspect(&graph(), &args(Some("2"), None));
        assert!(found);
        assert!(report.contains("interface 2: out0.external (input)"));
    }

    #[test]
    fn node_lookup_reports_type() {
        let (report, found) = inspect(&graph(), &args(None, Some("out0")));
        assert!(found);
        assert!(report.contains("node out0: External Output"));
    }

    #[test]
    fn missing_lookup_fails() {
        let (report, found) = inspect(&graph(), &args(Some("42"), Some("nope")));
        assert!(!found);
        assert!(report.contains("interface 42: not found"));
        assert!(report.contains("node nope: no node named `nope`"));
    }
}
