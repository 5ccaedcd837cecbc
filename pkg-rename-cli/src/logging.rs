//! Console logger with optional file mirroring.
//!
//! Info and below go to stdout, warnings and errors to stderr. With
//! `--logfile`, every line is also appended to the given file with ANSI
//! escape codes stripped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger {
    logfile: Option<Mutex<File>>,
}

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format!("{}", record.args());

        match record.level() {
            Level::Error | Level::Warn => eprintln!("{line}"),
            _ => println!("{line}"),
        }

        if let Some(ref file) = self.logfile {
            let stripped = strip_ansi_escapes::strip_str(&line);
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{stripped}");
            }
        }
    }

    fn flush(&self) {}
}

/// Install the logger. `quiet` limits output to warnings and errors,
/// `verbose` enables debug messages.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> std::io::Result<()> {
    let logfile = match logfile {
        Some(path) => Some(Mutex::new(
            OpenOptions::new().create(true).append(true).open(path)?,
        )),
        None => None,
    };

    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    log::set_boxed_logger(Box::new(ConsoleLogger { logfile }))
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}
