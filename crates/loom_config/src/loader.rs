//! File loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use loom_ir::{Catalog, DesignDescription, IpCoreSpec};
use std::path::Path;

/// Name of the project file looked up in a project directory.
pub const CONFIG_FILE: &str = "loom.toml";

/// Loads and validates `loom.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE))
}

/// Loads and validates a project file by path, whatever its name.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content).map_err(|e| with_path_context(e, path))
}

/// Parses and validates a `loom.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    Ok(config)
}

/// Reads one IP-core specification file.
pub fn load_ip_core(path: &Path) -> Result<IpCoreSpec, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_ip_core_from_str(&content).map_err(|e| with_path_context(e, path))
}

/// Parses one IP-core specification.
pub fn load_ip_core_from_str(content: &str) -> Result<IpCoreSpec, ConfigError> {
    let spec: IpCoreSpec =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    if spec.name.is_empty() {
        return Err(ConfigError::MissingField("name".to_string()));
    }
    Ok(spec)
}

/// Reads every IP-core file and validates them together as a [`Catalog`].
///
/// Entry order follows `paths`.
pub fn load_catalog<P: AsRef<Path>>(paths: &[P]) -> Result<Catalog, ConfigError> {
    let entries = paths
        .iter()
        .map(|p| load_ip_core(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Catalog::new(entries)?)
}

/// Reads a design description file.
pub fn load_description(path: &Path) -> Result<DesignDescription, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_description_from_str(&content).map_err(|e| with_path_context(e, path))
}

/// Parses a design description.
///
/// Endpoint text is checked here; whether the names resolve is left to the
/// design builder.
pub fn load_description_from_str(content: &str) -> Result<DesignDescription, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Renders a description in the same TOML form [`load_description`] reads.
pub fn description_to_toml(desc: &DesignDescription) -> Result<String, ConfigError> {
    toml::to_string_pretty(desc).map_err(|e| ConfigError::SerializeError(e.to_string()))
}

fn with_path_context(err: ConfigError, path: &Path) -> ConfigError {
    match err {
        ConfigError::ParseError(msg) => {
            ConfigError::ParseError(format!("{}: {msg}", path.display()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_ir::{Direction, Endpoint, ExternalKind};

    const UART: &str = r#"
name = "uart"
description = "16550-style UART"

[[interfaces]]
name = "tx"
direction = "output"

[[interfaces]]
name = "rx"
direction = "input"
"#;

    const INTERCONNECT: &str = r#"
name = "axi_interconnect"

[[interfaces]]
name = "m_axi"
direction = "output"
multi = true
type = "AXI4"
"#;

    #[test]
    fn parse_minimal_config() {
        let config = load_config_from_str(
            r#"
[project]
name = "hdmi"
"#,
        )
        .unwrap();
        assert_eq!(config.project.name, "hdmi");
        assert!(config.project.design.is_none());
        assert!(config.project.catalog.is_empty());
        assert!(config.lint.deny.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let config = load_config_from_str(
            r#"
[project]
name = "hdmi"
description = "HDMI output pipeline"
design = "design.toml"
catalog = ["ipcores/uart.toml", "ipcores/hdmi_tx.toml"]

[lint]
deny = ["W101"]
allow = ["naming-violation"]
"#,
        )
        .unwrap();
        assert_eq!(config.project.catalog.len(), 2);
        assert_eq!(config.lint.deny, vec!["W101"]);
        assert_eq!(config.lint.allow, vec!["naming-violation"]);
        let root = Path::new("/proj");
        assert_eq!(
            config.design_path(root).unwrap(),
            Path::new("/proj/design.toml")
        );
        assert_eq!(
            config.catalog_paths(root)[1],
            Path::new("/proj/ipcores/hdmi_tx.toml")
        );
    }

    #[test]
    fn missing_name_errors() {
        let err = load_config_from_str("[project]\nname = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("[project\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn parse_ip_core() {
        let spec = load_ip_core_from_str(UART).unwrap();
        assert_eq!(spec.name, "uart");
        assert_eq!(spec.interfaces.len(), 2);
        assert_eq!(spec.interfaces[1].direction, Direction::Input);
        assert!(!spec.interfaces[0].multi);

        let spec = load_ip_core_from_str(INTERCONNECT).unwrap();
        assert!(spec.interfaces[0].multi);
        assert_eq!(spec.interfaces[0].iface_type.as_deref(), Some("AXI4"));
    }

    #[test]
    fn bad_direction_is_parse_error() {
        let err = load_ip_core_from_str(
            "name = \"x\"\n[[interfaces]]\nname = \"a\"\ndirection = \"sideways\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn parse_description() {
        let desc = load_description_from_str(
            r#"
[[instances]]
name = "u0"
type = "uart"

[[instances]]
name = "u1"
type = "uart"

[[connections]]
from = "u0.tx"
to = "u1.rx"

[[externals]]
port = "out0"
kind = "output"
endpoint = "u1.tx"
"#,
        )
        .unwrap();
        assert_eq!(desc.instances.len(), 2);
        assert_eq!(desc.connections[0].to, Endpoint::new("u1", "rx"));
        assert_eq!(desc.externals[0].kind, ExternalKind::Output);
    }

    #[test]
    fn malformed_endpoint_is_parse_error() {
        let err = load_description_from_str("[[connections]]\nfrom = \"u0\"\nto = \"u1.rx\"\n")
            .unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(msg) if msg.contains("u0")));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("ipcores")).unwrap();
        std::fs::write(dir.path().join("ipcores/uart.toml"), UART).unwrap();
        std::fs::write(dir.path().join("ipcores/ic.toml"), INTERCONNECT).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[project]
name = "demo"
catalog = ["ipcores/uart.toml", "ipcores/ic.toml"]
"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        let catalog = load_catalog(&config.catalog_paths(dir.path())).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.iter().next().unwrap().name, "uart");
        assert!(catalog.contains("axi_interconnect"));
    }

    #[test]
    fn duplicate_catalog_entry_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.toml");
        let b = dir.path().join("b.toml");
        std::fs::write(&a, UART).unwrap();
        std::fs::write(&b, UART).unwrap();
        let err = load_catalog(&[a, b]).unwrap_err();
        assert!(matches!(err, ConfigError::Catalog(_)));
    }

    #[test]
    fn parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "name = ").unwrap();
        let err = load_ip_core(&path).unwrap_err();
        assert!(format!("{err}").contains("broken.toml"));
    }

    #[test]
    fn config_file_under_another_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[project]\nname = \"alt\"\n").unwrap();
        assert_eq!(load_config_file(&path).unwrap().project.name, "alt");
        // The directory has no loom.toml of its own.
        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn written_description_reads_back() {
        let desc = DesignDescription::new()
            .instance("u0", "uart")
            .instance("u1", "uart")
            .connect(Endpoint::new("u0", "tx"), Endpoint::new("u1", "rx"))
            .external("out0", ExternalKind::Output, Endpoint::new("u1", "tx"));
        let text = description_to_toml(&desc).unwrap();
        assert!(text.contains("[[instances]]"));
        assert!(text.contains("from = \"u0.tx\""));
        assert_eq!(load_description_from_str(&text).unwrap(), desc);
    }

    #[test]
    fn written_empty_description_reads_back() {
        let text = description_to_toml(&DesignDescription::new()).unwrap();
        assert_eq!(load_description_from_str(&text).unwrap(), DesignDescription::new());
    }
}
