//! Parsing and validation of Loom's TOML inputs.
//!
//! Three file kinds are read here: the `loom.toml` project file
//! ([`ProjectConfig`]), IP-core specification files that together form the
//! [`Catalog`](loom_ir::Catalog), and the declarative design description
//! consumed by the design builder.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{
    description_to_toml, load_catalog, load_config, load_config_file, load_config_from_str,
    load_description, load_description_from_str, load_ip_core, load_ip_core_from_str,
    CONFIG_FILE,
};
pub use types::*;
