//! Read-only views over an editor dataflow graph.
//!
//! - [`InterfaceIndex`] maps graph-local interface ids to their owner.
//! - [`Partition`] splits nodes into IP cores and metanodes, and connections
//!   into core-to-core and core-to-external.
//! - [`find_interface_by_id`] and [`find_node_type_by_name`] are whole-graph
//!   lookups for inspection.
//!
//! Nothing here validates; dangling ids are simply left out of the views.

#![warn(missing_docs)]

pub mod index;
pub mod lookup;
pub mod partition;

pub use index::{InterfaceEntry, InterfaceIndex};
pub use lookup::{find_interface_by_id, find_node_by_name, find_node_type_by_name, NotFound};
pub use partition::{classify, external_connections, ip_connections, NodeClass, Partition};
