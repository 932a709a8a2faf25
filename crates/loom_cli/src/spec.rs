//! `loom spec`: the editor's node palette for the project's catalog.

use crate::pipeline::{load_project, status, write_output};
use crate::{GlobalArgs, OutputArgs};

/// Runs the `loom spec` command.
pub fn run(args: &OutputArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let spec = loom_translate::to_editor_specification(&project.catalog);
    write_output(args.output.as_deref(), &serde_json::to_string_pretty(&spec)?)?;
    status(
        global,
        "Generated",
        format!(
            "{} node type(s) for {}",
            spec.nodes.len(),
            project.config.project.name
        ),
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_palette_with_metanodes() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("uart.toml"),
            "name = \"uart\"\n[[interfaces]]\nname = \"tx\"\ndirection = \"output\"\n",
        )
        .unwrap();
        fs::write(
            tmp.path().join("loom.toml"),
            "[project]\nname = \"t\"\ncatalog = [\"uart.toml\"]\n",
        )
        .unwrap();
        let out = tmp.path().join("spec.json");
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: Some(tmp.path().to_string_lossy().into_owned()),
        };
        let args = OutputArgs {
            output: Some(out.to_string_lossy().into_owned()),
        };
        assert_eq!(run(&args, &global).unwrap(), 0);
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let nodes = json["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0]["category"], "IPcore");
        assert_eq!(nodes[2]["type"], "External Output");
    }
}
