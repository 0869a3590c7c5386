use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::classify::MoveAction;
use crate::error::ErrorKind;
use crate::executor::{MoveOutcome, OutcomeResult};
use crate::plan::MovePlan;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    NothingFound,
    NothingToMove,
    DryRun,
    Cancelled,
    Completed,
}

impl RunStatus {
    pub fn message(&self) -> &'static str {
        match self {
            RunStatus::NothingFound => "No folders found matching 'Artist - Album' pattern.",
            RunStatus::NothingToMove => "Nothing to move! All folders are already organized.",
            RunStatus::DryRun => "Dry run: no folders were moved.",
            RunStatus::Cancelled => "Operation cancelled.",
            RunStatus::Completed => "Done!",
        }
    }
}

/// A move that did not happen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureEntry {
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
    pub kind: ErrorKind,
    pub message: String,
}

/// Summary of one organizer run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub root: PathBuf,
    pub dry_run: bool,
    pub status: RunStatus,
    pub found: usize,
    pub planned: usize,
    pub already_organized: usize,
    pub single_album_kept: usize,
    pub no_separator: usize,
    pub moved: usize,
    pub errors: usize,
    pub failures: Vec<FailureEntry>,
}

impl RunReport {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            root: root.to_path_buf(),
            dry_run,
            status: RunStatus::NothingFound,
            found: 0,
            planned: 0,
            already_organized: 0,
            single_album_kept: 0,
            no_separator: 0,
            moved: 0,
            errors: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_plan(&mut self, plan: &MovePlan) {
        self.planned = plan.moves.len();
        self.already_organized = plan.skipped_count(MoveAction::SkipAlreadyOrganized);
        self.single_album_kept = plan.skipped_count(MoveAction::SkipSingleAlbumPolicy);
        self.no_separator = plan.skipped_count(MoveAction::SkipNoSeparator);
    }

    /// Tally executor outcomes into success/error counts.
    pub fn record_outcomes(&mut self, outcomes: &[MoveOutcome]) {
        for outcome in outcomes {
            match &outcome.result {
                OutcomeResult::Success { .. } => self.moved += 1,
                OutcomeResult::Error { kind, message } => {
                    self.errors += 1;
                    self.failures.push(FailureEntry {
                        source: outcome.decision.record.path.clone(),
                        destination: outcome.decision.destination.clone(),
                        kind: *kind,
                        message: message.clone(),
                    });
                }
            }
        }
    }

    pub fn finish(mut self, status: RunStatus) -> Self {
        self.status = status;
        self.finished_at = Some(Utc::now());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MoveDecision;
    use crate::folder::FolderRecord;

    fn decision(path: &str, dst: &str) -> MoveDecision {
        MoveDecision {
            record: FolderRecord::from_path(Path::new(path)).unwrap(),
            action: MoveAction::Move,
            destination: Some(PathBuf::from(dst)),
            artist: "Drake".into(),
        }
    }

    #[test]
    fn test_record_outcomes_counts_and_collects_failures() {
        let mut report = RunReport::new(Path::new("/music"), false);
        let outcomes = vec![
            MoveOutcome {
                decision: decision("/music/Drake - Views", "/music/Drake/Drake - Views"),
                result: OutcomeResult::Success {
                    destination: PathBuf::from("/music/Drake/Drake - Views"),
                },
            },
            MoveOutcome {
                decision: decision("/music/Drake - Scorpion", "/music/Drake/Drake - Scorpion"),
                result: OutcomeResult::Error {
                    kind: ErrorKind::MoveFailed,
                    message: "permission denied".into(),
                },
            },
        ];
        report.record_outcomes(&outcomes);
        let report = report.finish(RunStatus::Completed);

        assert_eq!(report.moved, 1);
        assert_eq!(report.errors, 1);
        assert_eq!(report.failures[0].source, PathBuf::from("/music/Drake - Scorpion"));
        assert_eq!(report.failures[0].kind, ErrorKind::MoveFailed);
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_report_serializes() {
        let report = RunReport::new(Path::new("/music"), true).finish(RunStatus::DryRun);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "dry_run");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["root"], "/music");
        assert!(json["run_id"].is_string());
    }
}
