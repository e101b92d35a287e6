//! Walker - lazy pre-order traversal of a directory tree

use std::collections::VecDeque;
use std::fs::{self, DirEntry};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::WalkError;

use super::config::WalkerConfig;
use super::event::Event;

/// Tree walker holding only configuration.
/// Every call to `walk` starts a fresh traversal.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Start walking at `root`. Nothing touches the filesystem beyond a
    /// single `is_dir` check until the returned iterator is advanced.
    pub fn walk(&self, root: &Path) -> Walk {
        Walk::new(root, self.config.clone())
    }
}

/// What a directory child turned out to be.
enum ChildKind {
    Dir,
    /// Symlink resolving to a directory: never descended, never reported.
    DirLink,
    File,
}

/// Lazy pre-order sequence of [`Event`]s.
///
/// A directory's event is followed by the events of all its files, then
/// by the full subtree of each subdirectory in sibling order. Errors never
/// end the sequence; they are recorded and available through `errors`.
#[derive(Debug)]
pub struct Walk {
    config: WalkerConfig,
    root_found: bool,
    /// Directories still to be read, next one on top.
    pending_dirs: Vec<PathBuf>,
    /// Events of the most recently read directory not yet handed out.
    queued: VecDeque<Event>,
    errors: Vec<WalkError>,
}

impl Walk {
    fn new(root: &Path, config: WalkerConfig) -> Self {
        let root_found = root.is_dir();
        if !root_found {
            debug!("{} is not a directory, nothing to walk", root.display());
        }
        Self {
            config,
            root_found,
            pending_dirs: if root_found {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            },
            queued: VecDeque::new(),
            errors: Vec::new(),
        }
    }

    /// Whether the root existed and was a directory when the walk started.
    pub fn root_found(&self) -> bool {
        self.root_found
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[WalkError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<WalkError> {
        self.errors
    }

    fn skip(&mut self, err: WalkError) {
        debug!("skipping: {}", err);
        self.errors.push(err);
    }

    /// List `dir`, queue its directory and file events and schedule its
    /// subdirectories. A directory that cannot be listed produces no events.
    fn read_dir(&mut self, dir: PathBuf) {
        trace!("reading {}", dir.display());

        let read = match fs::read_dir(&dir) {
            Ok(r) => r,
            Err(source) => {
                self.skip(WalkError::ReadDir { path: dir, source });
                return;
            }
        };

        let mut entries = Vec::new();
        for entry in read {
            match entry {
                Ok(e) => entries.push(e),
                Err(source) => self.skip(WalkError::Entry {
                    path: dir.clone(),
                    source,
                }),
            }
        }
        if self.config.sorted {
            entries.sort_by_key(|e| e.file_name());
        }

        let mut subdirs = Vec::new();
        self.queued.push_back(Event::Dir { path: dir.clone() });

        for entry in entries {
            let path = entry.path();
            match classify(&entry) {
                ChildKind::Dir => subdirs.push(path),
                ChildKind::DirLink => trace!("not following directory link {}", path.display()),
                ChildKind::File => self.queued.push_back(Event::File {
                    path,
                    parent: dir.clone(),
                }),
            }
        }

        // Reversed so the first sibling ends up on top of the stack.
        self.pending_dirs.extend(subdirs.into_iter().rev());
    }
}

fn classify(entry: &DirEntry) -> ChildKind {
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => {
            debug!("cannot stat {}: {}", entry.path().display(), e);
            return ChildKind::File;
        }
    };

    if file_type.is_dir() {
        ChildKind::Dir
    } else if file_type.is_symlink() && entry.path().is_dir() {
        ChildKind::DirLink
    } else {
        ChildKind::File
    }
}

impl Iterator for Walk {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        loop {
            if let Some(event) = self.queued.pop_front() {
                return Some(event);
            }
            let dir = self.pending_dirs.pop()?;
            self.read_dir(dir);
        }
    }
}

impl FusedIterator for Walk {}
