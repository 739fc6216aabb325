use crate::config::DEFAULT_LOG_FILE;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Held by tests that swap the log file and then read it back.
#[cfg(test)]
pub(crate) static LOG_FILE_SWAP: Mutex<()> = Mutex::new(());

/// Open `quiz_debug.log` in the working directory, unless a log file is
/// already installed.
pub fn init() -> io::Result<()> {
    let mut logger = LOGGER
        .lock()
        .map_err(|_| io::Error::other("logger lock poisoned"))?;
    if logger.is_none() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEFAULT_LOG_FILE)?;
        *logger = Some(file);
    }
    Ok(())
}

/// Install (or replace) the log file.
pub fn init_with_path<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    if let Ok(mut logger) = LOGGER.lock() {
        *logger = Some(file);
    }
    Ok(())
}

/// Append a line to the log. Does nothing until a logger is installed.
pub fn log(message: &str) {
    if let Ok(mut logger) = LOGGER.lock()
        && let Some(file) = logger.as_mut()
    {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "[{}] {}", timestamp, message);
    }
}
