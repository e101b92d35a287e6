//! Visitation events produced by a walk

use std::path::{Path, PathBuf};

/// One visited node of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// A directory, emitted before any of its contents.
    Dir { path: PathBuf },
    /// A non-directory child of `parent`. `path` is always `parent.join(name)`.
    File { path: PathBuf, parent: PathBuf },
}

impl Event {
    pub fn path(&self) -> &Path {
        match self {
            Event::Dir { path } | Event::File { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Event::Dir { .. })
    }

    /// Containing directory of a file event; `None` for directories.
    pub fn parent(&self) -> Option<&Path> {
        match self {
            Event::Dir { .. } => None,
            Event::File { parent, .. } => Some(parent),
        }
    }
}
