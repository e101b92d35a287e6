//! Directory tree walking
//!
//! The walk is split in two stages:
//!
//! - `Walker` / `Walk`: a restartable, lazy pre-order sequence of [`Event`]s
//! - `EventOutput`: a consumer driven by `Walker::walk_streaming`

mod config;
mod event;
mod streaming;
mod walker;

pub use config::WalkerConfig;
pub use event::Event;
pub use streaming::{EventOutput, WalkReport};
pub use walker::{Walk, Walker};
