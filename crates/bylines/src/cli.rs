use clap::Parser;
use std::path::PathBuf;

/// Bylines CLI – generate a contributors page from git history
#[derive(Debug, Parser)]
#[command(name = "bylines", version, about, long_about = None)]
pub struct Cli {
    /// Path to the repository root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Where to write the rendered page (defaults to src/contributors.md under the root)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the rendered page to stdout instead of writing a file
    #[arg(long)]
    pub dry_run: bool,
}
