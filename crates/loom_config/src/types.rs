//! Configuration types deserialized from `loom.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The top-level project configuration.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata and input file locations.
    pub project: ProjectMeta,
    /// Lint settings (deny/allow rules).
    #[serde(default)]
    pub lint: LintConfig,
}

/// Core project metadata.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// A brief description of the project.
    #[serde(default)]
    pub description: String,
    /// Path of the design description, relative to the project root.
    #[serde(default)]
    pub design: Option<String>,
    /// Paths of the IP-core specification files, relative to the project root.
    #[serde(default)]
    pub catalog: Vec<String>,
}

impl ProjectConfig {
    /// Absolute paths of the catalog files under `root`.
    pub fn catalog_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.project.catalog.iter().map(|p| root.join(p)).collect()
    }

    /// Absolute path of the design description under `root`, if one is configured.
    pub fn design_path(&self, root: &Path) -> Option<PathBuf> {
        self.project.design.as_ref().map(|p| root.join(p))
    }
}

/// Lint configuration controlling which rules are enabled or promoted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LintConfig {
    /// Rule names or codes to treat as errors.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rule names or codes to suppress.
    #[serde(default)]
    pub allow: Vec<String>,
}
