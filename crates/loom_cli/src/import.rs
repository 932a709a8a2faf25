//! `loom import`: editor graph to design description.

use std::path::Path;

use crate::pipeline::{load_project, read_graph, render_diagnostics, status, write_output};
use crate::{GlobalArgs, ImportArgs};

/// Runs the `loom import` command.
///
/// Writes the reconstructed description as TOML, ready to be named as the
/// project's `design`. Returns exit code 1 if the graph cannot be expressed
/// as a description.
pub fn run(args: &ImportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let graph = read_graph(Path::new(&args.graph))?;

    match loom_translate::from_editor_graph(&graph, &project.catalog) {
        Ok(desc) => {
            let text = loom_config::description_to_toml(&desc)?;
            write_output(args.output.as_deref(), text.trim_end())?;
            status(
                global,
                "Imported",
                format!(
                    "{} instance(s), {} connection(s), {} external port(s)",
                    desc.instances.len(),
                    desc.connections.len(),
                    desc.externals.len()
                ),
            );
            Ok(0)
        }
        Err(err) => {
            render_diagnostics(&[err.to_diagnostic()], args.format, global.color);
            Ok(1)
        }
    }
}
