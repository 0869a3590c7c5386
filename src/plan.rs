use std::path::Path;

use crate::classify::{classify, MoveAction, MoveDecision};
use crate::folder::FolderRecord;
use crate::registry::ArtistRegistry;

/// Classified folders, split into what moves and what stays. Building a plan
/// never touches the filesystem, so it doubles as the dry-run preview.
#[derive(Debug, Default, Clone)]
pub struct MovePlan {
    pub moves: Vec<MoveDecision>,
    pub skipped: Vec<MoveDecision>,
}

impl MovePlan {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn skipped_count(&self, action: MoveAction) -> usize {
        self.skipped.iter().filter(|d| d.action == action).count()
    }
}

/// Classify every record in discovery order and partition the results.
pub fn build_plan(
    records: &[FolderRecord],
    registry: &ArtistRegistry,
    move_single_album_artists: bool,
    root: &Path,
) -> MovePlan {
    let (moves, skipped) = records
        .iter()
        .map(|record| classify(record, registry, move_single_album_artists, root))
        .partition(MoveDecision::is_move);
    MovePlan { moves, skipped }
}
