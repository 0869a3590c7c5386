use std::collections::HashMap;

use crate::artist::{extract_primary, uppercase_count};
use crate::folder::FolderRecord;
use crate::normalize::normalize;

/// One artist, as grouped by normalized primary credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistIdentity {
    pub key: String,
    pub canonical_display_name: String,
    pub albums: Vec<FolderRecord>,
}

/// Artist → albums mapping built once from a scan, then read by the planner.
#[derive(Debug, Default, Clone)]
pub struct ArtistRegistry {
    artists: HashMap<String, ArtistIdentity>,
    // first-seen order of keys, for stable iteration
    order: Vec<String>,
}

impl ArtistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a FolderRecord>,
    {
        let mut registry = Self::new();
        for record in records {
            registry.register(record.clone());
        }
        registry
    }

    /// Add an album folder under its primary artist. The display name is
    /// replaced only by a variant with strictly more uppercase letters.
    pub fn register(&mut self, record: FolderRecord) {
        let primary = extract_primary(&record.artist_raw).to_string();
        let key = normalize(&primary);

        match self.artists.get_mut(&key) {
            Some(identity) => {
                if uppercase_count(&primary) > uppercase_count(&identity.canonical_display_name) {
                    identity.canonical_display_name = primary;
                }
                identity.albums.push(record);
            }
            None => {
                self.order.push(key.clone());
                self.artists.insert(
                    key.clone(),
                    ArtistIdentity {
                        key,
                        canonical_display_name: primary,
                        albums: vec![record],
                    },
                );
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ArtistIdentity> {
        self.artists.get(key)
    }

    /// Identity the record's artist credit resolves to.
    pub fn identity_for(&self, record: &FolderRecord) -> Option<&ArtistIdentity> {
        self.get(&normalize(extract_primary(&record.artist_raw)))
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Artists in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &ArtistIdentity> {
        self.order.iter().filter_map(|key| self.artists.get(key))
    }

    pub fn single_album_artist_count(&self) -> usize {
        self.artists.values().filter(|a| a.albums.len() == 1).count()
    }
}
