//! Formatting shorthands over [`LogSink::log`](crate::LogSink::log).
//!
//! Each macro evaluates to the `Result` returned by the sink.

#[macro_export]
macro_rules! sink_log {
    ($sink:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $sink.log($lvl, &__msg)
    }};
}

#[macro_export]
macro_rules! sink_debug    { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::Severity::Debug, $($arg)*) } }
#[macro_export]
macro_rules! sink_info     { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::Severity::Info, $($arg)*) } }
#[macro_export]
macro_rules! sink_warning  { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::Severity::Warning, $($arg)*) } }
#[macro_export]
macro_rules! sink_error    { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::Severity::Error, $($arg)*) } }
#[macro_export]
macro_rules! sink_critical { ($sink:expr, $($arg:tt)*) => { $crate::sink_log!($sink, $crate::Severity::Critical, $($arg)*) } }
