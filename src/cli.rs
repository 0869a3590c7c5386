use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "artistsort")]
#[command(version = "0.1.0")]
#[command(about = "Group 'Artist - Album' folders into per-artist folders")]
pub struct Cli {
    /// Music folder to organize (drop a folder onto the program to fill this in)
    pub root: Option<PathBuf>,
}
