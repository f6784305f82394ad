//! A process-wide, leveled, append-only file logger.
//!
//! Records look like `[YYYY-MM-DD HH:MM:SS] [LEVEL] message`. See [`LogSink`].

mod macros;

mod facade;
pub mod logger;
pub mod model;

pub use logger::LogSink;
pub use model::error::{Result, SinkError};
pub use model::severity::Severity;
