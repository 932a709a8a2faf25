//! Shared foundational types used across the Loom composition toolchain.
//!
//! This crate provides content hashing for design fingerprints and the
//! internal-error result type used when a bug, not user input, stops a pass.

#![warn(missing_docs)]

pub mod hash;
pub mod result;

pub use hash::ContentHash;
pub use result::{InternalError, LoomResult};
