//! treewalk - walk a directory tree and print every directory and file

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use output::{OutputConfig, StreamingFormatter};
pub use tree::{Event, EventOutput, Walk, WalkReport, Walker, WalkerConfig};
