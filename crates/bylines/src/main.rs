mod cli;
mod roster;

use bylines_core::{
    GitLog, HistorySource, Result, build_view_model, render_contributors, unique_committers,
};
use clap::Parser;
use cli::Cli;
use std::path::Path;
use std::process::ExitCode;

/// Default output path, relative to the repository root.
const DEFAULT_OUTPUT: &str = "src/contributors.md";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    let history = GitLog::new(&root).read_history()?;
    let unique = unique_committers(history);
    let kept = roster::blacklist().filter(unique);
    let model = build_view_model(&kept, &roster::overrides());
    let output = render_contributors(&model);

    if cli.dry_run {
        println!("{output}");
        return Ok(());
    }

    let path = cli
        .output
        .unwrap_or_else(|| root.join(DEFAULT_OUTPUT));
    write_page(&path, &output)?;
    println!("Wrote {} contributors to {}", model.len(), path.display());
    Ok(())
}

fn write_page(path: &Path, output: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, output)?;
    Ok(())
}
