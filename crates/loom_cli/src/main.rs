//! Loom CLI: the command-line interface for the Loom composition toolchain.
//!
//! Provides `loom build` to validate a design and emit it for code generation,
//! `loom spec` to produce the graph editor's node palette, `loom import` to
//! turn an edited graph into a design description, and `loom inspect` to
//! look inside a saved editor graph.

#![warn(missing_docs)]

mod build;
mod import;
mod inspect;
mod pipeline;
mod spec;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Loom: IP-core composition between a graph editor and hardware designs.
#[derive(Parser, Debug)]
#[command(name = "loom", version, about = "Loom IP-core composition toolchain")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Project file to use (any name), or a directory containing `loom.toml`.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the project's design and write it as JSON.
    Build(BuildArgs),
    /// Write the editor specification for the project's catalog.
    Spec(OutputArgs),
    /// Convert an editor graph into a design description.
    Import(ImportArgs),
    /// Summarize an editor graph and look up nodes or interfaces.
    Inspect(InspectArgs),
}

/// Arguments for the `loom build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Build from an editor graph instead of the configured description.
    #[arg(short, long)]
    pub graph: Option<String>,

    /// Where to write the design JSON (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Rule names or codes to suppress (e.g., `--allow isolated-instance`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,

    /// Rule names or codes to promote to errors (e.g., `--deny W101`).
    #[arg(long, num_args = 1..)]
    pub deny: Vec<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for commands whose only option is an output path.
#[derive(Parser, Debug)]
pub struct OutputArgs {
    /// Where to write the JSON (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the `loom import` subcommand.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// The editor graph JSON file.
    pub graph: String,

    /// Where to write the description TOML (default: stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `loom inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// The editor graph JSON file.
    pub graph: String,

    /// Show the node and name owning this interface id.
    #[arg(long)]
    pub interface: Option<String>,

    /// Show the type of the node with this name.
    #[arg(long)]
    pub node: Option<String>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// One JSON object per diagnostic.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Build(ref args) => build::run(args, &global),
        Command::Spec(ref args) => spec::run(args, &global),
        Command::Import(ref args) => import::run(args, &global),
        Command::Inspect(ref args) => inspect::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_build_default() {
        let cli = Cli::parse_from(["loom", "build"]);
        match cli.command {
            Command::Build(ref args) => {
                assert!(args.graph.is_none());
                assert!(args.output.is_none());
                assert!(args.allow.is_empty());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_build_with_args() {
        let cli = Cli::parse_from([
            "loom",
            "build",
            "--graph",
            "hdmi.json",
            "-o",
            "design.json",
            "--deny",
            "W101",
            "--allow",
            "naming-violation",
            "isolated-instance",
            "--format",
            "json",
        ]);
        match cli.command {
            Command::Build(ref args) => {
                assert_eq!(args.graph.as_deref(), Some("hdmi.json"));
                assert_eq!(args.output.as_deref(), Some("design.json"));
                assert_eq!(args.deny, vec!["W101"]);
                assert_eq!(args.allow, vec!["naming-violation", "isolated-instance"]);
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_spec_output() {
        let cli = Cli::parse_from(["loom", "spec", "--output", "spec.json"]);
        match cli.command {
            Command::Spec(ref args) => assert_eq!(args.output.as_deref(), Some("spec.json")),
            _ => panic!("expected Spec command"),
        }
    }

    #[test]
    fn parse_import_requires_graph() {
        assert!(Cli::try_parse_from(["loom", "import"]).is_err());
        let cli = Cli::parse_from(["loom", "import", "g.json"]);
        match cli.command {
            Command::Import(ref args) => {
                assert_eq!(args.graph, "g.json");
                assert!(args.output.is_none());
            }
            _ => panic!("expected Import command"),
        }
    }

    #[test]
    fn parse_inspect_lookups() {
        let cli = Cli::parse_from([
            "loom",
            "inspect",
            "g.json",
            "--interface",
            "7",
            "--node",
            "u0",
        ]);
        match cli.command {
            Command::Inspect(ref args) => {
                assert_eq!(args.interface.as_deref(), Some("7"));
                assert_eq!(args.node.as_deref(), Some("u0"));
            }
            _ => panic!("expected Inspect command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["loom", "--quiet", "--color", "never", "build"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_import_format() {
        let cli = Cli::parse_from(["loom", "import", "g.json", "--format", "json"]);
        match cli.command {
            Command::Import(args) => {
                assert_eq!(args.graph, "g.json");
                assert_eq!(args.format, ReportFormat::Json);
            }
            _ => panic!("expected Import command"),
        }
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["loom", "--config", "/p/loom.toml", "spec"]);
        assert_eq!(cli.config.as_deref(), Some("/p/loom.toml"));
    }
}
