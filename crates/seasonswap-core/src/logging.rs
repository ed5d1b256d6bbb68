//! Logging init: file under the XDG state dir, falling back to stderr when
//! the log file cannot be opened.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

/// Per-event writer handed out by the subscriber. Falls back to stderr when
/// the log file handle cannot be cloned.
enum LogWriter {
    File(File),
    Stderr,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogWriter::File(f) => f.write(buf),
            LogWriter::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogWriter::File(f) => f.flush(),
            LogWriter::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("seasonswap")?;
    let path = xdg_dirs.place_state_file("seasonswap.log")?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}

/// Initialize structured logging to `~/.local/state/seasonswap/seasonswap.log`,
/// or to stderr when the state dir is unwritable.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,seasonswap=debug"));

    let (writer, destination) = match open_log_file() {
        Ok((file, path)) => {
            let make = move || {
                file.try_clone()
                    .map(LogWriter::File)
                    .unwrap_or(LogWriter::Stderr)
            };
            (BoxMakeWriter::new(make), path.display().to_string())
        }
        Err(_) => (BoxMakeWriter::new(|| LogWriter::Stderr), "stderr".to_string()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    tracing::info!("seasonswap logging initialized, writing to {destination}");
    Ok(())
}
