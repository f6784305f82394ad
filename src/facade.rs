use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::logger::LogSink;
use crate::model::severity::Severity;

impl Log for LogSink {
    fn enabled(&self, metadata: &Metadata) -> bool {
        LogSink::enabled(self, Severity::from(metadata.level()))
    }

    fn log(&self, record: &Record) {
        // `Log::log` has no way to surface failures.
        let message = record.args().to_string();
        let _ = LogSink::log(self, Severity::from(record.level()), &message);
    }

    // Every record is flushed as it is written.
    fn flush(&self) {}
}

impl LogSink {
    /// Registers `sink` as the `log` crate's logger.
    ///
    /// The facade's max level is opened to `Trace`; the sink's own threshold
    /// does the filtering. Fails if another logger was already installed.
    pub fn install(sink: &'static LogSink) -> Result<(), SetLoggerError> {
        log::set_logger(sink).map(|()| log::set_max_level(LevelFilter::Trace))
    }
}
