//! CLI entry point for treewalk

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::debug;
use treewalk::{OutputConfig, StreamingFormatter, WalkError, Walker, WalkerConfig, logging};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treewalk")]
#[command(about = "Walk a directory tree and print every directory and file")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print directory and file totals after the listing
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Report unreadable directories and entries on stderr
    #[arg(short = 'e', long = "report-errors")]
    report_errors: bool,

    /// List siblings in filesystem order instead of sorting by name
    #[arg(short = 'U', long = "unsorted")]
    unsorted: bool,
}

/// One `treewalk: warning:` line per skipped directory or entry.
fn write_warnings<W: Write>(out: &mut W, errors: &[WalkError]) -> io::Result<()> {
    for err in errors {
        writeln!(out, "treewalk: warning: {}", err)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("treewalk: cannot initialize logging: {}", e);
    }
    debug!("{:?}", args);

    let walker = Walker::new(WalkerConfig {
        sorted: !args.unsorted,
    });
    let mut formatter = StreamingFormatter::stdout(OutputConfig {
        use_color: should_use_color(args.color),
        summary: args.summary,
    });

    match walker.walk_streaming(&args.path, &mut formatter) {
        Ok(Some(report)) => {
            if args.report_errors {
                let _ = write_warnings(&mut io::stderr().lock(), &report.errors);
            }
        }
        Ok(None) => {
            if args.report_errors {
                eprintln!(
                    "treewalk: warning: cannot access '{}': not a directory or does not exist",
                    args.path.display()
                );
            }
        }
        // Reader went away (`treewalk | head`); nothing left to report.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("treewalk: error writing output: {}", e);
            process::exit(1);
        }
    }
}
