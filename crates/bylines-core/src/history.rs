use crate::errors::{BylinesError, Result};
use crate::types::Committer;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Field separator used in the git pretty format. Not expected to occur in
/// committer names or emails.
const DELIMITER: char = ';';

/// Source of committer history, one entry per commit.
///
/// Abstracted behind a trait so the pipeline can be driven from a fixture in
/// tests instead of a real git invocation.
pub trait HistorySource {
    /// Returns one `Committer` per commit, oldest commit first.
    fn read_history(&self) -> Result<Vec<Committer>>;
}

/// Reads committer history by running `git log` in a repository root.
pub struct GitLog {
    root: PathBuf,
}

impl GitLog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl HistorySource for GitLog {
    fn read_history(&self) -> Result<Vec<Committer>> {
        // --reverse yields oldest commit first, which makes the downstream
        // "last write wins" resolution chronological.
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(["log", "--reverse", "--pretty=%cn;%ce"])
            .output()
            .map_err(BylinesError::Io)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(BylinesError::History(format!(
                "git log failed with {}: {stderr}",
                output.status
            )));
        }

        Ok(parse_history(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse `name;email` log lines into committers.
///
/// Lines without the delimiter are skipped. This is what discards the blank
/// trailing line git emits, and it means malformed lines contribute no entry
/// rather than failing the run.
pub fn parse_history(text: &str) -> Vec<Committer> {
    text.lines()
        .filter_map(|line| line.split_once(DELIMITER))
        .map(|(name, email)| Committer::new(name, email))
        .collect()
}

/// Collapse committers into distinct `(name, email)` values.
///
/// First-seen order is preserved, so with chronological input the first
/// occurrence of each identity keeps its place in history.
pub fn unique_committers(committers: impl IntoIterator<Item = Committer>) -> Vec<Committer> {
    let mut seen = FxHashSet::default();
    committers
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
