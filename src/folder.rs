use std::path::{Path, PathBuf};

/// Separator between the artist credit and the album title in a folder name.
pub const ALBUM_SEPARATOR: &str = " - ";

/// An "Artist - Album" folder found during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecord {
    pub path: PathBuf,
    pub folder_name: String,
    pub artist_raw: String,
    pub album_raw: String,
}

impl FolderRecord {
    /// Split the folder's basename on the first `" - "`. Folders without the
    /// separator (or without a UTF-8 name) are not album folders.
    pub fn from_path(path: &Path) -> Option<Self> {
        let folder_name = path.file_name()?.to_str()?;
        let (artist, album) = folder_name.split_once(ALBUM_SEPARATOR)?;
        Some(Self {
            path: path.to_path_buf(),
            folder_name: folder_name.to_string(),
            artist_raw: artist.trim().to_string(),
            album_raw: album.trim().to_string(),
        })
    }

    pub fn has_separator(&self) -> bool {
        self.folder_name.contains(ALBUM_SEPARATOR)
    }

    /// Directory the folder currently sits in.
    pub fn parent(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Basename of the parent directory, empty at the filesystem root.
    pub fn parent_name(&self) -> String {
        self.parent()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_splits_on_first_separator() {
        let record = FolderRecord::from_path(Path::new("/music/Drake - Views - Deluxe")).unwrap();
        assert_eq!(record.folder_name, "Drake - Views - Deluxe");
        assert_eq!(record.artist_raw, "Drake");
        assert_eq!(record.album_raw, "Views - Deluxe");
        assert!(record.has_separator());
    }

    #[test]
    fn test_from_path_rejects_folders_without_separator() {
        assert!(FolderRecord::from_path(Path::new("/music/Drake")).is_none());
        assert!(FolderRecord::from_path(Path::new("/music/Drake-Views")).is_none());
        assert!(FolderRecord::from_path(Path::new("/")).is_none());
    }

    #[test]
    fn test_parent_name() {
        let record = FolderRecord::from_path(Path::new("/music/Drake./Drake - Views")).unwrap();
        assert_eq!(record.parent(), Path::new("/music/Drake."));
        assert_eq!(record.parent_name(), "Drake.");
    }
}
