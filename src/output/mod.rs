//! Listing output formatting
//!
//! Three modes: plain (one relative path per line), long (size and mtime
//! columns), and JSON. Long output colors the size column when enabled.

mod config;
mod json;

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::list::{FileEntry, format_size, relative_path};

pub use config::OutputConfig;
pub use json::{JsonEntry, print_json};

/// Print one relative path per line.
pub fn print_plain(paths: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for path in paths {
        writeln!(stdout, "{}", path)?;
    }
    Ok(())
}

/// Formatter for long output: `SIZE  MTIME  PATH` columns.
pub struct LongFormatter {
    config: OutputConfig,
}

impl LongFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn print(&self, root: &Path, entries: &[FileEntry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        let sizes: Vec<String> = entries.iter().map(|e| format_size(e.size)).collect();
        let width = sizes.iter().map(|s| s.len()).max().unwrap_or(0);

        for (entry, size) in entries.iter().zip(&sizes) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(stdout, "{:>width$}", size, width = width)?;
            stdout.reset()?;
            let mtime = DateTime::<Local>::from(entry.modified);
            writeln!(
                stdout,
                "  {}  {}",
                mtime.format("%Y-%m-%d %H:%M"),
                relative_path(root, &entry.path)
            )?;
        }
        Ok(())
    }
}
