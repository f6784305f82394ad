use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::model::error::{Result, SinkError};
use crate::model::severity::Severity;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const INIT_MARKER: &str = "Logger initialized";

static GLOBAL: OnceLock<LogSink> = OnceLock::new();

/// Leveled, append-only file logger.
///
/// Every operation takes the one internal lock for its whole duration, so
/// initializations, level changes and writes are totally ordered and records
/// never interleave. Until [`LogSink::initialize`] succeeds, [`LogSink::log`]
/// silently drops everything.
#[derive(Debug)]
pub struct LogSink {
    state: Mutex<SinkState>,
}

#[derive(Debug)]
struct SinkState {
    file: Option<File>,
    path: Option<PathBuf>,
    threshold: Severity,
    ready: bool,
    // Set when the marker write fails, cleared when the next log call reports it.
    faulted: bool,
    // A failed write left an unterminated fragment in the file.
    torn: bool,
}

impl SinkState {
    /// Writes one record without filtering. Only call with the sink lock held.
    ///
    /// A failure is returned to the caller and leaves the stream usable. If
    /// part of the record reached the file, the next record starts on a new line.
    fn write_raw(&mut self, level: Severity, message: &str) -> Result<()> {
        let file = self.file.as_mut().ok_or(SinkError::NotOpen)?;
        let mut line = format_record(level, message);
        if self.torn {
            line.insert(0, '\n');
        }

        let outcome = write_fully(file, line.as_bytes())
            .and_then(|()| file.flush().map_err(|err| (0, err)));
        match outcome {
            Ok(()) => {
                self.torn = false;
                Ok(())
            }
            Err((written, err)) => {
                if written > 0 {
                    self.torn = true;
                }
                Err(SinkError::Write(err))
            }
        }
    }

    fn check_stream(&mut self) -> Result<()> {
        if self.file.is_none() {
            return Err(SinkError::NotOpen);
        }

        if self.faulted {
            self.faulted = false;
            return Err(SinkError::StreamFault);
        }
        Ok(())
    }

    fn close(&mut self) {
        self.file = None;
        self.path = None;
        self.torn = false;
    }
}

/// `write_all` that also reports how many bytes went out before a failure.
fn write_fully<W: Write>(
    out: &mut W,
    mut buf: &[u8],
) -> std::result::Result<(), (usize, io::Error)> {
    let mut written = 0;
    while !buf.is_empty() {
        match out.write(buf) {
            Ok(0) => return Err((written, io::ErrorKind::WriteZero.into())),
            Ok(n) => {
                written += n;
                buf = &buf[n..];
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err((written, err)),
        }
    }
    Ok(())
}

fn format_record(level: Severity, message: &str) -> String {
    let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
    format!("[{}] [{}] {}\n", timestamp, level, message)
}

impl LogSink {
    pub fn new() -> Self {
        LogSink {
            state: Mutex::new(SinkState {
                file: None,
                path: None,
                threshold: Severity::Info,
                ready: false,
                faulted: false,
                torn: false,
            }),
        }
    }

    /// The process-wide sink, created on first access.
    ///
    /// Prefer constructing a [`LogSink`] and passing it where it is needed;
    /// this exists for code that genuinely wants one shared logger.
    pub fn global() -> &'static LogSink {
        GLOBAL.get_or_init(LogSink::new)
    }

    /// Opens `path` for appending and starts accepting records at `level` and above.
    ///
    /// Any previously open file is closed first, even if opening the new one
    /// fails. On success a `Logger initialized` marker is appended. A failed
    /// marker write is not returned; it leaves the stream faulted and the next
    /// [`LogSink::log`] reports it.
    pub fn initialize(&self, path: impl AsRef<Path>, level: Severity) -> Result<()> {
        let path = path.as_ref();
        let mut state = self.state.lock();

        if state.ready {
            state.close();
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| SinkError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        state.file = Some(file);
        state.path = Some(path.to_path_buf());
        state.threshold = level;
        state.ready = true;
        state.faulted = false;
        state.torn = false;

        // The lock is already held, so the marker bypasses the filtered path.
        // Nobody sees this failure now; the next log call reports it.
        if state.write_raw(Severity::Info, INIT_MARKER).is_err() {
            state.faulted = true;
        }
        Ok(())
    }

    /// [`LogSink::initialize`] with the default `Info` threshold.
    pub fn initialize_default(&self, path: impl AsRef<Path>) -> Result<()> {
        self.initialize(path, Severity::default())
    }

    pub fn set_level(&self, level: Severity) {
        self.state.lock().threshold = level;
    }

    pub fn level(&self) -> Severity {
        self.state.lock().threshold
    }

    /// Appends `[timestamp] [LEVEL] message` if the sink is initialized and
    /// `level` reaches the threshold. Otherwise returns `Ok(())` without I/O.
    ///
    /// The message is written verbatim; embedded newlines are not escaped.
    pub fn log(&self, level: Severity, message: &str) -> Result<()> {
        let mut state = self.state.lock();
        if !state.ready || level < state.threshold {
            return Ok(());
        }

        state.check_stream()?;
        state.write_raw(level, message)
    }

    /// Whether a record at `level` would currently reach the file.
    pub fn enabled(&self, level: Severity) -> bool {
        let state = self.state.lock();
        state.ready && level >= state.threshold
    }

    pub fn is_initialized(&self) -> bool {
        self.state.lock().ready
    }

    /// Path of the file currently held open, if any.
    pub fn path(&self) -> Option<PathBuf> {
        self.state.lock().path.clone()
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new()
    }
}
