//! Batch text patcher - the read/transform/compare/write pipeline.
//!
//! Visits each target in list order and applies the rule set as a sequence
//! of verbatim replace-alls. A missing target is an expected outcome, not an
//! error; an existing file that cannot be read or written aborts the run
//! immediately, leaving any files already rewritten in their new state (no
//! rollback across the batch).

use crate::rules::ReplacementRule;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-target classification. The three outcomes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// At least one rule changed the content and the file was rewritten.
    Fixed,
    /// File exists but no rule changed anything (already patched, or the
    /// patterns were never present).
    Skipped,
    /// Path does not resolve to a file.
    NotFound,
}

/// Outcome of a full run over the target list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "RunResult carries the per-file outcomes and the modified count"]
pub struct RunResult {
    /// One entry per target, in target-list order.
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
    /// Number of `Fixed` classifications.
    pub fixed: usize,
}

impl RunResult {
    /// Outcome for a single target path, if it was in the run.
    pub fn outcome_of(&self, path: impl AsRef<Path>) -> Option<FileOutcome> {
        let path = path.as_ref();
        self.outcomes
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, outcome)| *outcome)
    }
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PatchError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        PatchError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Apply `rules` to every path in `targets`, resolved against `root`.
///
/// Each rule sees the output of the previous rule. A target is rewritten only
/// when the accumulated result differs from the original content, so re-running
/// against already-patched files reports `Skipped` for every one of them.
///
/// Errors abort the run at the failing target; earlier writes stay in place.
pub fn run(
    root: &Path,
    targets: &[impl AsRef<Path>],
    rules: &[ReplacementRule],
) -> Result<RunResult, PatchError> {
    let mut outcomes = Vec::with_capacity(targets.len());
    let mut fixed = 0;

    for target in targets {
        let target = target.as_ref().to_path_buf();
        let path = root.join(&target);

        if !path.is_file() {
            outcomes.push((target, FileOutcome::NotFound));
            continue;
        }

        let original = fs::read_to_string(&path).map_err(|e| PatchError::io(&path, e))?;

        let mut patched = original.clone();
        for rule in rules {
            patched = rule.apply(&patched);
        }

        if patched == original {
            outcomes.push((target, FileOutcome::Skipped));
            continue;
        }

        atomic_write(&path, patched.as_bytes())?;

        // Bump mtime so dev servers and incremental builds see the rewrite.
        let now = filetime::FileTime::now();
        filetime::set_file_mtime(&path, now).map_err(|e| PatchError::io(&path, e))?;

        outcomes.push((target, FileOutcome::Fixed));
        fixed += 1;
    }

    Ok(RunResult { outcomes, fixed })
}

/// Atomic file write: tempfile + fsync + rename.
///
/// Either the full rewrite lands or the original file is untouched; there is
/// never a half-written target on disk.
fn atomic_write(path: &Path, content: &[u8]) -> Result<(), PatchError> {
    let parent = path.parent().ok_or_else(|| {
        PatchError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent directory"),
        )
    })?;

    let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| PatchError::io(path, e))?;
    temp.write_all(content).map_err(|e| PatchError::io(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| PatchError::io(path, e))?;
    temp.persist(path).map_err(|e| PatchError::io(path, e.error))?;

    Ok(())
}
