//! Driving an output sink from a walk

use std::io;
use std::path::Path;

use log::debug;

use crate::error::WalkError;

use super::event::Event;
use super::walker::Walker;

/// Callback for streaming output - receives each event as it is visited.
pub trait EventOutput {
    fn output_event(&mut self, event: &Event) -> io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

/// Totals of a completed walk plus everything that was skipped.
#[derive(Debug, Default)]
pub struct WalkReport {
    pub dir_count: usize,
    pub file_count: usize,
    pub errors: Vec<WalkError>,
}

impl Walker {
    /// Walk `root` and hand every event to `output` as soon as it is produced.
    ///
    /// Returns `Ok(None)` when `root` is missing or not a directory; in that
    /// case `output` receives nothing, not even `finish`.
    pub fn walk_streaming<O: EventOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<Option<WalkReport>> {
        let mut walk = self.walk(root);
        if !walk.root_found() {
            return Ok(None);
        }

        let mut dir_count = 0usize;
        let mut file_count = 0usize;

        for event in walk.by_ref() {
            output.output_event(&event)?;
            if event.is_dir() {
                dir_count += 1;
            } else {
                file_count += 1;
            }
        }

        output.finish(dir_count, file_count)?;

        let errors = walk.into_errors();
        debug!(
            "walked {}: {} directories, {} files, {} skipped",
            root.display(),
            dir_count,
            file_count,
            errors.len()
        );

        Ok(Some(WalkReport {
            dir_count,
            file_count,
            errors,
        }))
    }
}
