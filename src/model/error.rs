use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum SinkError {
    /// The log file could not be opened for appending.
    Open { path: PathBuf, source: io::Error },
    /// A write was attempted while no file handle was held.
    NotOpen,
    /// An earlier write left the stream faulted. The fault is cleared when reported.
    StreamFault,
    /// The write itself failed. Part of the record may have reached the file.
    Write(io::Error),
}

pub type Result<T> = std::result::Result<T, SinkError>;

impl SinkError {
    /// OS error code behind an open or write failure, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            SinkError::Open { source, .. } => source.raw_os_error(),
            SinkError::Write(err) => err.raw_os_error(),
            SinkError::NotOpen | SinkError::StreamFault => None,
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SinkError::Open { path, source } => {
                write!(f, "Failed to open log file {}: {}", path.display(), source)
            }
            SinkError::NotOpen => write!(f, "Log file is not open"),
            SinkError::StreamFault => write!(f, "Log file is in failed state"),
            SinkError::Write(err) => write!(f, "Failed to write to log file: {}", err),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::Open { source, .. } => Some(source),
            SinkError::Write(err) => Some(err),
            SinkError::NotOpen | SinkError::StreamFault => None,
        }
    }
}

impl From<io::Error> for SinkError {
    fn from(err: io::Error) -> Self {
        SinkError::Write(err)
    }
}
