//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes one line per event
//! as soon as the walker produces it, for use with `Walker::walk_streaming`.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{Event, EventOutput};

use super::config::OutputConfig;

pub const DIR_TAG: &str = "[DIR]";
pub const FILE_TAG: &str = "[FILE]";

/// Line formatter over any color-aware writer.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout, colored only if `config.use_color` is set.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_tag(&mut self, tag: &str, spec: &ColorSpec) -> io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{}", tag)?;
        self.out.reset()
    }

    fn write_dir(&mut self, path: &Path) -> io::Result<()> {
        self.write_tag(
            DIR_TAG,
            ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true),
        )?;
        write!(self.out, "  ")?;
        self.write_path(path)
    }

    fn write_file(&mut self, path: &Path) -> io::Result<()> {
        write!(self.out, "   ")?;
        self.write_tag(FILE_TAG, ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.out, " ")?;
        self.write_path(path)
    }

    /// Write `path` and end the line. On unix the raw bytes are written so
    /// names that are not valid UTF-8 come out unchanged.
    fn write_path(&mut self, path: &Path) -> io::Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::ffi::OsStrExt;
            self.out.write_all(path.as_os_str().as_bytes())?;
        }
        #[cfg(not(unix))]
        write!(self.out, "{}", path.display())?;

        writeln!(self.out)
    }
}

impl<W: WriteColor> EventOutput for StreamingFormatter<W> {
    fn output_event(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::Dir { path } => self.write_dir(path),
            Event::File { path, .. } => self.write_file(path),
        }
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        if self.config.summary {
            writeln!(self.out)?;
            writeln!(self.out, "{} directories, {} files", dir_count, file_count)?;
        }
        self.out.flush()
    }
}
