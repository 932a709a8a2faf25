//! Translation between the catalog, the graph editor, and design descriptions.
//!
//! - [`to_editor_specification`] turns the IP-core catalog into the palette
//!   document the editor renders.
//! - [`from_editor_graph`] turns an edited graph back into a
//!   [`DesignDescription`](loom_ir::DesignDescription) ready for the builder.
//! - [`GraphBuilder`] instantiates palette entries into a graph, the way the
//!   editor does when a user drops a node.

#![warn(missing_docs)]

pub mod import;
pub mod instantiate;
pub mod spec;

pub use import::{compile_editor_graph, from_editor_graph};
pub use instantiate::GraphBuilder;
pub use spec::{metanode_descriptor, to_editor_specification};
