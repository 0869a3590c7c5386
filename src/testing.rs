//! In-memory stand-ins for the filesystem and the terminal.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::file_utils::FileSystem;

/// A directory tree held in memory, recording every mutation.
#[derive(Default)]
pub struct MemoryFs {
    dirs: RefCell<BTreeSet<PathBuf>>,
    mutations: RefCell<Vec<String>>,
    failing_creates: RefCell<HashSet<PathBuf>>,
    failing_moves: RefCell<HashSet<PathBuf>>,
}

impl MemoryFs {
    pub fn with_dirs(paths: &[&str]) -> Self {
        let fs = Self::default();
        for path in paths {
            fs.insert_with_ancestors(Path::new(path));
        }
        fs
    }

    fn insert_with_ancestors(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn fail_create(&self, path: &str) {
        self.failing_creates.borrow_mut().insert(PathBuf::from(path));
    }

    pub fn fail_move(&self, src: &str) {
        self.failing_moves.borrow_mut().insert(PathBuf::from(src));
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.dirs.borrow().contains(Path::new(path))
    }

    pub fn mutations(&self) -> Vec<String> {
        self.mutations.borrow().clone()
    }
}

impl FileSystem for MemoryFs {
    fn list_directories_recursive(&self, root: &Path) -> Vec<PathBuf> {
        self.dirs
            .borrow()
            .iter()
            .filter(|d| d.starts_with(root) && d.as_path() != root)
            .cloned()
            .collect()
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.path_exists(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.mutations
            .borrow_mut()
            .push(format!("create {}", path.display()));
        if self.failing_creates.borrow().contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        }
        self.insert_with_ancestors(path);
        Ok(())
    }

    fn move_dir(&self, src: &Path, dst: &Path) -> io::Result<()> {
        self.mutations
            .borrow_mut()
            .push(format!("move {} -> {}", src.display(), dst.display()));
        if self.failing_moves.borrow().contains(src) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "file in use"));
        }
        if !self.path_exists(src) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "source not found"));
        }
        if self.path_exists(dst) {
            return Err(io::Error::new(io::ErrorKind::AlreadyExists, "destination exists"));
        }

        let mut dirs = self.dirs.borrow_mut();
        let moved: Vec<PathBuf> = dirs.iter().filter(|d| d.starts_with(src)).cloned().collect();
        for old in moved {
            dirs.remove(&old);
            match old.strip_prefix(src) {
                Ok(rest) if !rest.as_os_str().is_empty() => dirs.insert(dst.join(rest)),
                _ => dirs.insert(dst.to_path_buf()),
            };
        }
        Ok(())
    }
}

/// Console that answers from a script and records what it was asked.
#[derive(Default)]
pub struct ScriptedConsole {
    pub yes_no: VecDeque<bool>,
    pub choices: VecDeque<String>,
    pub asked: Vec<String>,
    pub printed: Vec<String>,
    pub key_waits: usize,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_yes_no(mut self, answer: bool) -> Self {
        self.yes_no.push_back(answer);
        self
    }

    pub fn answer_choice(mut self, answer: &str) -> Self {
        self.choices.push_back(answer.to_string());
        self
    }
}

impl Console for ScriptedConsole {
    fn ask_yes_no(&mut self, prompt: &str) -> anyhow::Result<bool> {
        self.asked.push(prompt.to_string());
        self.yes_no
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected prompt: {prompt}"))
    }

    fn ask_choice(&mut self, prompt: &str, options: &[&str]) -> anyhow::Result<String> {
        self.asked.push(prompt.to_string());
        let answer = self
            .choices
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected prompt: {prompt}"))?;
        anyhow::ensure!(options.contains(&answer.as_str()), "invalid scripted choice {answer}");
        Ok(answer)
    }

    fn print(&mut self, line: &str) {
        self.printed.push(line.to_string());
    }

    fn wait_for_key(&mut self) -> anyhow::Result<()> {
        self.key_waits += 1;
        Ok(())
    }
}
