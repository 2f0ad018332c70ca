//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "drawlint",
    version,
    about = "drawlint — draw-path performance linter for compiled classes",
    long_about = "drawlint — flags performance-sensitive patterns inside the draw callbacks of UI widget classes, from instruction-event dumps produced by a bytecode walker.\n\nConfiguration precedence: CLI > drawlint.toml > defaults.",
    after_help = "Examples:\n  drawlint analyze --events 'build/drawlint/*.json'\n  drawlint analyze --variant release --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current drawlint version.")]
    Version,
    /// Analyze instruction-event dumps
    #[command(
        about = "Run draw-path analysis",
        long_about = "Classify widget classes from event dumps, scan their draw callbacks against the rule catalog, and print per-class issues with a summary. The pass is diagnostics-only and never fails a build.",
        after_help = "Examples:\n  drawlint analyze --events 'build/drawlint/*.json'\n  drawlint analyze --variant release --output json"
    )]
    Analyze {
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Build variant results are accumulated under (default: debug)")]
        variant: Option<String>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Glob(s) for event dump files, relative to repo root")]
        events: Vec<String>,
    },
}
