//! Interface directions and external port kinds.
//!
//! Directions are always relative to the internal design: an external input
//! port *drives* the design, so the interface it exposes inward is an output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of an interface on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Data flows into the node.
    Input,
    /// Data flows out of the node.
    Output,
    /// Data flows both ways.
    InOut,
}

impl Direction {
    /// Returns `true` if an interface with this direction may be connected to
    /// one with `other`'s direction.
    ///
    /// Inputs pair with outputs; `InOut` pairs with anything.
    pub fn is_compatible_with(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Input, Direction::Output)
                | (Direction::Output, Direction::Input)
                | (Direction::InOut, _)
                | (_, Direction::InOut)
        )
    }

    /// Returns the opposite direction. `InOut` is its own opposite.
    pub fn flip(self) -> Direction {
        match self {
            Direction::Input => Direction::Output,
            Direction::Output => Direction::Input,
            Direction::InOut => Direction::InOut,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
            Direction::InOut => write!(f, "inout"),
        }
    }
}

/// Which side of the chip boundary an external port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalKind {
    /// A top-level input; it supplies data to the design.
    Input,
    /// A top-level output; it consumes data from the design.
    Output,
}

impl ExternalKind {
    /// The direction of the endpoint this port presents to the internal design.
    pub fn inner_direction(self) -> Direction {
        let outer = match self {
            ExternalKind::Input => Direction::Input,
            ExternalKind::Output => Direction::Output,
        };
        outer.flip()
    }
}

impl fmt::Display for ExternalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExternalKind::Input => write!(f, "external input"),
            ExternalKind::Output => write!(f, "external output"),
        }
    }
}
