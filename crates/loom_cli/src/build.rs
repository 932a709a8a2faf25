//! `loom build`: description (or editor graph) to validated design.
//!
//! 1. Find the project root and load `loom.toml` plus the catalog
//! 2. Load the design description, or import it from `--graph`
//! 3. Build the design
//! 4. Run the lint engine on the result
//! 5. Render diagnostics and write the design JSON

use std::path::Path;

use loom_diagnostics::DiagnosticSink;
use loom_ir::DesignDescription;
use loom_lint::LintEngine;

use crate::pipeline::{
    load_project, merge_lint_config, read_graph, render_diagnostics, status, write_output, Project,
};
use crate::{BuildArgs, GlobalArgs};

/// Runs the `loom build` command.
///
/// Returns exit code 0 if no errors were reported, 1 otherwise.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    status(global, "Building", &project.config.project.name);

    let sink = DiagnosticSink::new();
    let design = load_description(&project, args, &sink)?
        .and_then(|desc| loom_elaborate::elaborate(&desc, &project.catalog, &sink));

    if let Some(design) = &design {
        let lint_config = merge_lint_config(&project.config.lint, &args.allow, &args.deny);
        LintEngine::new(&lint_config).run(design, &project.catalog, &sink);
    }

    let diagnostics = sink.diagnostics();
    render_diagnostics(&diagnostics, args.format, global.color);

    let design = match design {
        Some(design) if !sink.has_errors() => design,
        _ => {
            status(
                global,
                "Failed",
                format!(
                    "{} error(s), {} warning(s)",
                    sink.error_count(),
                    sink.warning_count()
                ),
            );
            return Ok(1);
        }
    };

    write_output(
        args.output.as_deref(),
        &serde_json::to_string_pretty(&design)?,
    )?;
    if global.verbose {
        eprintln!("  Fingerprint {}", design.fingerprint()?);
    }
    status(
        global,
        "Finished",
        format!(
            "{} instance(s), {} connection(s), {} external port(s), {} warning(s)",
            design.instances.len(),
            design.connections.len(),
            design.externals.len(),
            sink.warning_count()
        ),
    );
    Ok(0)
}

/// Produces the description to build.
///
/// Import failures are reported through `sink` and yield `None`; I/O and
/// parse failures are returned as errors.
fn load_description(
    project: &Project,
    args: &BuildArgs,
    sink: &DiagnosticSink,
) -> Result<Option<DesignDescription>, Box<dyn std::error::Error>> {
    if let Some(graph_path) = &args.graph {
        let graph = read_graph(Path::new(graph_path))?;
        return Ok(
            match loom_translate::from_editor_graph(&graph, &project.catalog) {
                Ok(desc) => Some(desc),
                Err(err) => {
                    sink.emit(err.to_diagnostic());
                    None
                }
            },
        );
    }
    let path = project
        .config
        .design_path(&project.root)
        .ok_or("no design configured: set `project.design` in loom.toml or pass --graph")?;
    Ok(Some(loom_config::load_description(&path)?))
}
