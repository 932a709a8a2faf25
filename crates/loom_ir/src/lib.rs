//! LoomIR: the shared data model of the Loom composition toolchain.
//!
//! Two graph shapes live here side by side:
//!
//! - the editor-facing dataflow [`Graph`]: nodes with id-addressed
//!   [`Interface`]s and raw [`Connection`]s, plus the [`EditorSpecification`]
//!   that seeds the editor's palette;
//! - the hardware-facing [`DesignDescription`] (declared instances,
//!   connections, and external ports) and the validated [`Design`] built from it.
//!
//! The IP-core [`Catalog`] is the read-only bridge between them.

#![warn(missing_docs)]

pub mod catalog;
pub mod description;
pub mod design;
pub mod direction;
pub mod editor;
pub mod graph;
pub mod ids;

pub use catalog::{Catalog, CatalogError, InterfaceSpec, IpCoreSpec};
pub use description::{
    ConnectionDecl, DesignDescription, Endpoint, ExternalDecl, InstanceDecl, ParseEndpointError,
};
pub use design::{Design, ExternalBinding, Instance, InterfaceConnection};
pub use direction::{Direction, ExternalKind};
pub use editor::{
    EditorMetadata, EditorSpecification, InterfaceDescriptor, NodeTypeDescriptor,
    DEFAULT_INTERFACE_TYPE, IP_CORE_CATEGORY, METANODE_CATEGORY,
};
pub use graph::{
    Connection, Dataflow, Graph, Interface, Node, NodeKind, EXTERNAL_INPUT_TYPE,
    EXTERNAL_OUTPUT_TYPE, METANODE_INTERFACE,
};
pub use ids::{ConnectionId, NodeId};
