//! Errors recorded while walking a tree

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A filesystem error that caused part of the tree to be skipped.
///
/// Walking never stops on these; they are collected on the [`Walk`](crate::Walk)
/// and can be inspected once iteration ends.
#[derive(Error, Debug)]
pub enum WalkError {
    /// The directory could not be listed, so neither it nor its subtree was reported.
    #[error("cannot read '{}': {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single entry inside a readable directory could not be read.
    #[error("cannot read entry in '{}': {source}", .path.display())]
    Entry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// The directory the error was raised for.
    pub fn path(&self) -> &Path {
        match self {
            WalkError::ReadDir { path, .. } | WalkError::Entry { path, .. } => path,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            WalkError::ReadDir { source, .. } | WalkError::Entry { source, .. } => source.kind(),
        }
    }
}
