//! Description-to-design elaboration.
//!
//! Resolves every declared instance and endpoint of a [`DesignDescription`]
//! against the IP-core [`Catalog`], checks interface directions and fan-out,
//! and produces a validated [`Design`].
//!
//! # Usage
//!
//! ```ignore
//! let design = elaborate(&desc, &catalog, &sink)?;
//! ```

#![warn(missing_docs)]

pub mod builder;
pub mod errors;
pub mod resolver;

pub use builder::{build_design, DesignBuilder};
pub use errors::DesignError;
pub use resolver::SpecResolver;

use loom_diagnostics::DiagnosticSink;
use loom_ir::{Catalog, Design, DesignDescription};

/// Builds a design, reporting a failure to `sink` instead of returning it.
///
/// Returns `None` when the description is invalid; the sink then holds
/// exactly one error diagnostic describing why.
pub fn elaborate(
    desc: &DesignDescription,
    catalog: &Catalog,
    sink: &DiagnosticSink,
) -> Option<Design> {
    match build_design(desc, catalog) {
        Ok(design) => Some(design),
        Err(err) => {
            sink.emit(err.to_diagnostic());
            None
        }
    }
}
