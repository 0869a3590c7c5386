use std::path::{Path, PathBuf};

use crate::classify::MoveDecision;
use crate::error::{ErrorKind, OrganizeError};
use crate::file_utils::FileSystem;
use crate::logger::Logger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeResult {
    /// Moved; `destination` is the collision-free path actually used.
    Success { destination: PathBuf },
    Error { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub decision: MoveDecision,
    pub result: OutcomeResult,
}

impl MoveOutcome {
    fn failed(decision: &MoveDecision, err: OrganizeError) -> Self {
        Self {
            decision: decision.clone(),
            result: OutcomeResult::Error {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.result, OutcomeResult::Success { .. })
    }
}

/// `path` relative to `root` for display, or the full path when it is outside.
pub fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// First of `path`, `path (1)`, `path (2)`, ... that does not exist yet.
pub fn unique_destination(fs: &dyn FileSystem, path: &Path) -> PathBuf {
    if !fs.path_exists(path) {
        return path.to_path_buf();
    }
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let base_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    (1..)
        .map(|counter| base_dir.join(format!("{} ({})", base_name, counter)))
        .find(|candidate| !fs.path_exists(candidate))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Apply the planned moves in order. A failing item is recorded and the run
/// continues; nothing already moved is rolled back.
pub fn execute(
    moves: &[MoveDecision],
    fs: &dyn FileSystem,
    root: &Path,
    logger: &Logger,
) -> Vec<MoveOutcome> {
    let mut outcomes = Vec::with_capacity(moves.len());

    for decision in moves {
        let Some(destination) = decision.destination.as_deref() else {
            continue;
        };
        let src = decision.record.path.as_path();
        let src_rel = relative_display(src, root);

        if let Some(artist_dir) = destination.parent() {
            if !fs.path_exists(artist_dir) {
                logger.dir_created(&relative_display(artist_dir, root));
                if let Err(source) = fs.create_dir_all(artist_dir) {
                    let err = OrganizeError::DirectoryCreateFailed {
                        path: artist_dir.to_path_buf(),
                        source,
                    };
                    logger.move_failed(&src_rel, err.kind().display_name(), &err.to_string());
                    outcomes.push(MoveOutcome::failed(decision, err));
                    continue;
                }
            }
        }

        logger.move_start(&src_rel);
        let resolved = unique_destination(fs, destination);
        if resolved != destination {
            logger.warn(&format!(
                "{} already exists, using {}",
                relative_display(destination, root),
                relative_display(&resolved, root)
            ));
        }
        match fs.move_dir(src, &resolved) {
            Ok(()) => {
                logger.move_complete(&src_rel, &relative_display(&resolved, root));
                outcomes.push(MoveOutcome {
                    decision: decision.clone(),
                    result: OutcomeResult::Success {
                        destination: resolved,
                    },
                });
            }
            Err(source) => {
                let err = OrganizeError::MoveFailed {
                    source_path: src.to_path_buf(),
                    destination: resolved,
                    source,
                };
                logger.move_failed(&src_rel, err.kind().display_name(), &err.to_string());
                outcomes.push(MoveOutcome::failed(decision, err));
            }
        }
    }

    outcomes
}
