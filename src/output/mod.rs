//! Event formatting and display
//!
//! `StreamingFormatter` turns each walk event into one line:
//!
//! ```text
//! [DIR]  <directory_path>
//!    [FILE] <file_path>
//! ```

mod config;
mod streaming;

pub use config::OutputConfig;
pub use streaming::{DIR_TAG, FILE_TAG, StreamingFormatter};
