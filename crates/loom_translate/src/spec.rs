//! Catalog to editor specification.

use loom_ir::{
    Catalog, EditorMetadata, EditorSpecification, ExternalKind, InterfaceDescriptor, IpCoreSpec,
    NodeKind, NodeTypeDescriptor, DEFAULT_INTERFACE_TYPE, IP_CORE_CATEGORY, METANODE_CATEGORY,
    METANODE_INTERFACE,
};

/// Builds the editor's palette from the catalog.
///
/// IP cores come first in catalog order, followed by the external-input and
/// external-output metanodes. Multi-connectable interfaces are marked
/// unlimited (`maxConnectionsCount = -1`).
pub fn to_editor_specification(catalog: &Catalog) -> EditorSpecification {
    let mut nodes: Vec<NodeTypeDescriptor> = catalog.iter().map(ip_core_descriptor).collect();
    nodes.push(metanode_descriptor(ExternalKind::Input));
    nodes.push(metanode_descriptor(ExternalKind::Output));
    EditorSpecification {
        metadata: EditorMetadata::default(),
        nodes,
    }
}

/// The palette entry of an external-port metanode.
///
/// Its single interface faces the internal design, so an external input
/// exposes an output and vice versa.
pub fn metanode_descriptor(kind: ExternalKind) -> NodeTypeDescriptor {
    let tag = NodeKind::from(kind).as_str().to_string();
    NodeTypeDescriptor {
        name: tag.clone(),
        node_type: tag,
        category: METANODE_CATEGORY.to_string(),
        interfaces: vec![InterfaceDescriptor {
            name: METANODE_INTERFACE.to_string(),
            iface_type: DEFAULT_INTERFACE_TYPE.to_string(),
            direction: kind.inner_direction(),
            max_connections_count: None,
        }],
    }
}

fn ip_core_descriptor(spec: &IpCoreSpec) -> NodeTypeDescriptor {
    NodeTypeDescriptor {
        name: spec.name.clone(),
        node_type: spec.name.clone(),
        category: IP_CORE_CATEGORY.to_string(),
        interfaces: spec
            .interfaces
            .iter()
            .map(|iface| InterfaceDescriptor {
                name: iface.name.clone(),
                iface_type: iface
                    .iface_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_INTERFACE_TYPE.to_string()),
                direction: iface.direction,
                max_connections_count: iface.multi.then_some(-1),
            })
            .collect(),
    }
}
