//! Shared pipeline helpers for CLI commands.
//!
//! Project root resolution, catalog loading, editor-graph reading, output
//! writing, and diagnostic rendering.

use std::path::{Path, PathBuf};

use loom_config::{LintConfig, ProjectConfig, CONFIG_FILE};
use loom_diagnostics::{Diagnostic, DiagnosticRenderer, JsonRenderer, TerminalRenderer};
use loom_ir::{Catalog, Dataflow, Graph};

use crate::{GlobalArgs, ReportFormat};

/// A loaded project: its root directory, configuration, and catalog.
pub struct Project {
    /// Directory containing `loom.toml`.
    pub root: PathBuf,
    /// The parsed configuration.
    pub config: ProjectConfig,
    /// The validated IP-core catalog.
    pub catalog: Catalog,
}

/// Walks up from `start` looking for the nearest directory containing `loom.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project file from global CLI args.
///
/// `--config` may name the file itself (under any name) or a directory
/// holding `loom.toml`. Without it, walks up from the current directory.
pub fn resolve_config_file(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match global.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            Ok(if p.is_dir() { p.join(CONFIG_FILE) } else { p })
        }
        None => Ok(find_project_root(&std::env::current_dir()?)?.join(CONFIG_FILE)),
    }
}

/// Loads the project file and the catalog it names.
///
/// Relative paths in the project file resolve against its directory.
pub fn load_project(global: &GlobalArgs) -> Result<Project, Box<dyn std::error::Error>> {
    let config_file = resolve_config_file(global)?;
    let root = match config_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let config = loom_config::load_config_file(&config_file)?;
    let catalog = loom_config::load_catalog(&config.catalog_paths(&root))?;
    if global.verbose {
        eprintln!(
            "     Catalog {} IP core(s) from {}",
            catalog.len(),
            config_file.display()
        );
    }
    Ok(Project {
        root,
        config,
        catalog,
    })
}

/// Reads an editor graph saved as `{"graph": {...}}`.
pub fn read_graph(path: &Path) -> Result<Graph, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let dataflow: Dataflow = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse {}: {e}", path.display()))?;
    Ok(dataflow.graph)
}

/// Writes `json` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&str>, json: &str) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => std::fs::write(path, format!("{json}\n"))?,
        None => println!("{json}"),
    }
    Ok(())
}

/// Prints a cargo-style status line to stderr unless `--quiet` is set.
pub fn status(global: &GlobalArgs, verb: &str, message: impl std::fmt::Display) {
    if !global.quiet {
        eprintln!("{verb:>12} {message}");
    }
}

/// Renders diagnostics to stderr in the requested format.
pub fn render_diagnostics(diagnostics: &[Diagnostic], format: ReportFormat, color: bool) {
    let renderer: Box<dyn DiagnosticRenderer> = match format {
        ReportFormat::Text => Box::new(TerminalRenderer::new(color, 80)),
        ReportFormat::Json => Box::new(JsonRenderer),
    };
    for diag in diagnostics {
        let rendered = renderer.render(diag);
        eprintln!("{}", rendered.trim_end());
    }
}

/// Merges CLI `--allow`/`--deny` flags with the config file's lint section.
///
/// CLI flags take precedence: a rule in both CLI `--allow` and config `deny`
/// ends up allowed.
pub fn merge_lint_config(config: &LintConfig, allow: &[String], deny: &[String]) -> LintConfig {
    let mut merged = config.clone();
    for rule in deny {
        merged.allow.retain(|r| r != rule);
        if !merged.deny.contains(rule) {
            merged.deny.push(rule.clone());
        }
    }
    for rule in allow {
        merged.deny.retain(|r| r != rule);
        if !merged.allow.contains(rule) {
            merged.allow.push(rule.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn find_project_root_in_current_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname=\"t\"\n").unwrap();
        assert_eq!(find_project_root(tmp.path()).unwrap(), tmp.path());
    }

    #[test]
    fn find_project_root_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname=\"t\"\n").unwrap();
        let sub = tmp.path().join("graphs");
        fs::create_dir_all(&sub).unwrap();
        assert_eq!(find_project_root(&sub).unwrap(), tmp.path());
    }

    #[test]
    fn find_project_root_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = find_project_root(tmp.path());
        // Another loom.toml further up the real filesystem would satisfy the walk.
        if let Err(e) = err {
            assert!(e.to_string().contains(CONFIG_FILE));
        }
    }

    fn global_with_config(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config,
        }
    }

    #[test]
    fn config_flag_names_file_directly() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname = \"default\"\n").unwrap();
        let custom = tmp.path().join("custom.toml");
        fs::write(&custom, "[project]\nname = \"custom\"\n").unwrap();

        let global = global_with_config(custom.to_str().map(String::from));
        assert_eq!(resolve_config_file(&global).unwrap(), custom);
        let project = load_project(&global).unwrap();
        assert_eq!(project.config.project.name, "custom");
        assert_eq!(project.root, tmp.path());
    }

    #[test]
    fn config_flag_accepts_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname = \"default\"\n").unwrap();
        let global = global_with_config(tmp.path().to_str().map(String::from));
        assert_eq!(load_project(&global).unwrap().config.project.name, "default");
    }

    #[test]
    fn read_graph_unwraps_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("g.json");
        fs::write(
            &path,
            r#"{"version": "1", "graph": {"nodes": [
                {"name": "u0", "type": "uart",
                 "interfaces": [{"id": "1", "name": "tx", "direction": "output"}]}
            ], "connections": []}}"#,
        )
        .unwrap();
        let graph = read_graph(&path).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].interfaces[0].id, "1");
    }

    #[test]
    fn read_graph_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        fs::write(&path, "{").unwrap();
        let err = read_graph(&path).unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn cli_flags_override_config() {
        let config = LintConfig {
            deny: vec!["W101".into()],
            allow: vec!["C201".into()],
        };
        let merged = merge_lint_config(&config, &["W101".into()], &["C201".into()]);
        assert_eq!(merged.allow, vec!["W101"]);
        assert_eq!(merged.deny, vec!["C201"]);
    }

    #[test]
    fn write_output_to_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("out.json");
        write_output(path.to_str(), "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}\n");
    }
}
