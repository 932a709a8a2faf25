//! Opaque ID newtypes for graph-local entities.
//!
//! Editor interface ids are strings chosen by the editor and only meaningful
//! inside one graph. Nodes and connections are addressed positionally: a
//! [`NodeId`] is the node's index in [`Graph::nodes`](crate::Graph::nodes),
//! so ids from two different graphs never alias anything global.

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }

            /// Returns the index as a `usize`, for slice access.
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

define_id!(
    /// Position of a node within its graph.
    NodeId
);

define_id!(
    /// Position of a connection within its graph.
    ConnectionId
);
