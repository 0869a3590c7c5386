//! Groups "Artist - Album" folders into one folder per primary artist.
//!
//! Collaboration credits ("A feat. B", "A & B", "A x B", ...) collapse to the
//! lead artist, and artists are matched ignoring case and diacritics, so every
//! album by one artist lands in the same folder.

pub mod artist;
pub mod classify;
pub mod cli;
pub mod config;
pub mod console;
pub mod error;
pub mod executor;
pub mod file_utils;
pub mod folder;
pub mod logger;
pub mod normalize;
pub mod organizer;
pub mod plan;
pub mod registry;
pub mod report;

#[cfg(test)]
mod testing;
