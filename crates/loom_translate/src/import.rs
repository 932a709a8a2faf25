//! Editor graph to design description.

use std::collections::HashMap;

use loom_elaborate::{build_design, DesignError};
use loom_graph::{InterfaceIndex, Partition};
use loom_ir::{
    Catalog, ConnectionDecl, Design, DesignDescription, Endpoint, ExternalDecl, Graph,
    InstanceDecl, NodeId,
};

/// Reconstructs the declarative description an edited graph stands for.
///
/// Every IP-core node becomes an instance, every core-to-core connection a
/// connection declaration, and every connected metanode an external-port
/// binding named after the metanode. Metanodes with no connection are
/// dropped. Raw interface ids do not survive: endpoints are rewritten as
/// `instance.interface` names.
///
/// Fails on an IP-core node whose name cannot appear in endpoint text
/// (empty or containing `.`), on an IP-core type missing from the catalog,
/// on a connection whose
/// ids resolve to no IP-core interface, and on a metanode with more than one
/// connection. Direction and fan-out are left to the design builder.
pub fn from_editor_graph(
    graph: &Graph,
    catalog: &Catalog,
) -> Result<DesignDescription, DesignError> {
    let partition = Partition::new(graph);
    let core = partition.core_interfaces();
    let mut desc = DesignDescription::new();

    for &id in partition.core_nodes() {
        let node = graph.node(id);
        if !Endpoint::is_valid_instance(&node.name) {
            return Err(DesignError::InvalidInstanceName {
                instance: node.name.clone(),
            });
        }
        let ip_type = node.kind.as_str();
        if !catalog.contains(ip_type) {
            return Err(DesignError::UnknownIpCoreType {
                instance: node.name.clone(),
                ip_type: ip_type.to_string(),
            });
        }
        desc.instances.push(InstanceDecl {
            name: node.name.clone(),
            ip_type: ip_type.to_string(),
        });
    }

    if let Some(id) = first_dangling_id(graph, &partition) {
        return Err(DesignError::UnknownInterfaceId { id: id.to_string() });
    }

    for (_, conn) in partition.ip_connections() {
        desc.connections.push(ConnectionDecl {
            from: endpoint(core, &conn.from)?,
            to: endpoint(core, &conn.to)?,
        });
    }

    let external = partition.external_interfaces();
    let mut peers: HashMap<NodeId, Vec<&str>> = HashMap::new();
    for (_, conn) in partition.external_connections() {
        for (own, other) in [(&conn.from, &conn.to), (&conn.to, &conn.from)] {
            if let Some(entry) = external.get(own) {
                peers.entry(entry.node).or_default().push(other.as_str());
            }
        }
    }

    for &id in partition.metanodes() {
        let node = graph.node(id);
        let Some(kind) = node.kind.external_kind() else {
            continue;
        };
        let peer = match peers.get(&id).map(Vec::as_slice) {
            None | Some([]) => continue,
            Some([peer]) => *peer,
            Some(many) => {
                return Err(DesignError::AmbiguousExternalBinding {
                    port: node.name.clone(),
                    count: many.len(),
                })
            }
        };
        desc.externals.push(ExternalDecl {
            port: node.name.clone(),
            kind,
            endpoint: endpoint(core, peer)?,
        });
    }

    Ok(desc)
}

/// Imports an edited graph and builds it into a validated [`Design`].
pub fn compile_editor_graph(graph: &Graph, catalog: &Catalog) -> Result<Design, DesignError> {
    build_design(&from_editor_graph(graph, catalog)?, catalog)
}

fn endpoint(core: &InterfaceIndex<'_>, id: &str) -> Result<Endpoint, DesignError> {
    core.get(id)
        .map(|entry| Endpoint::new(entry.node_name, entry.interface_name))
        .ok_or_else(|| DesignError::UnknownInterfaceId { id: id.to_string() })
}

/// The first id, in connection order, that resolves to no interface at all.
fn first_dangling_id<'g>(graph: &'g Graph, partition: &Partition<'g>) -> Option<&'g str> {
    let known = |id: &str| {
        partition.core_interfaces().contains(id) || partition.external_interfaces().contains(id)
    };
    graph
        .iter_connections()
        .flat_map(|(_, conn)| [conn.from.as_str(), conn.to.as_str()])
        .find(|id| !known(*id))
}
