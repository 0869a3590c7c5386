//! Decides, per album folder, whether it moves under an artist folder or stays put.

use std::path::{Path, PathBuf};

use crate::artist::extract_primary;
use crate::file_utils::sanitize_filename;
use crate::folder::FolderRecord;
use crate::normalize::{normalize, path_key};
use crate::registry::ArtistRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Move,
    SkipNoSeparator,
    SkipSingleAlbumPolicy,
    SkipAlreadyOrganized,
}

impl MoveAction {
    pub fn reason(&self) -> &'static str {
        match self {
            MoveAction::Move => "move",
            MoveAction::SkipNoSeparator => "no artist separator",
            MoveAction::SkipSingleAlbumPolicy => "single album - keeping as-is",
            MoveAction::SkipAlreadyOrganized => "already organized",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDecision {
    pub record: FolderRecord,
    pub action: MoveAction,
    /// Set only when `action` is `Move`.
    pub destination: Option<PathBuf>,
    /// Artist folder name the album is grouped under.
    pub artist: String,
}

impl MoveDecision {
    fn skip(record: &FolderRecord, action: MoveAction, artist: String) -> Self {
        Self {
            record: record.clone(),
            action,
            destination: None,
            artist,
        }
    }

    pub fn is_move(&self) -> bool {
        self.action == MoveAction::Move
    }
}

/// The parent directory is the artist directory, ignoring trailing dots and case.
pub fn parent_path_matches(record: &FolderRecord, artist_dir: &Path) -> bool {
    path_key(record.parent()) == path_key(artist_dir)
}

/// The parent directory's literal name is the sanitized artist name, ignoring trailing dots.
pub fn parent_name_matches(record: &FolderRecord, canonical_artist: &str) -> bool {
    let parent_name = record.parent_name();
    let sanitized = sanitize_filename(canonical_artist);
    parent_name.trim_end_matches('.') == sanitized.trim_end_matches('.')
}

/// The parent directory is named after the full collaboration credit
/// ("A & B - Album" inside "A & B").
pub fn parent_matches_full_credit(record: &FolderRecord) -> bool {
    normalize(&record.artist_raw) == normalize(&record.parent_name())
}

pub fn is_already_organized(record: &FolderRecord, canonical_artist: &str, artist_dir: &Path) -> bool {
    parent_path_matches(record, artist_dir)
        || parent_name_matches(record, canonical_artist)
        || parent_matches_full_credit(record)
}

/// Classify one folder. Rules are evaluated in order; the first match wins.
pub fn classify(
    record: &FolderRecord,
    registry: &ArtistRegistry,
    move_single_album_artists: bool,
    root: &Path,
) -> MoveDecision {
    let primary = extract_primary(&record.artist_raw);
    let identity = registry.identity_for(record);
    let canonical = identity
        .map(|a| a.canonical_display_name.clone())
        .unwrap_or_else(|| primary.to_string());

    if !record.has_separator() {
        return MoveDecision::skip(record, MoveAction::SkipNoSeparator, canonical);
    }

    let album_count = identity.map_or(0, |a| a.albums.len());
    if !move_single_album_artists && album_count == 1 {
        return MoveDecision::skip(record, MoveAction::SkipSingleAlbumPolicy, canonical);
    }

    let artist_dir = root.join(sanitize_filename(&canonical));
    if is_already_organized(record, &canonical, &artist_dir) {
        return MoveDecision::skip(record, MoveAction::SkipAlreadyOrganized, canonical);
    }

    let destination = artist_dir.join(sanitize_filename(&record.folder_name));
    MoveDecision {
        record: record.clone(),
        action: MoveAction::Move,
        destination: Some(destination),
        artist: canonical,
    }
}
