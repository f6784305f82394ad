use std::env;
use std::fmt;
use std::process;
use std::thread::{self, ScopedJoinHandle};

use logsink::{sink_info, LogSink, Severity, SinkError};

const USAGE: &str = "Usage: logsink [LOG_PATH] [LEVEL]";
const DEFAULT_LOG_PATH: &str = "application.log";
const WORKER_THREADS: usize = 2;
const MESSAGES_PER_THREAD: usize = 5;
const LARGE_MESSAGE_LEN: usize = 1_000_000;

#[derive(Debug)]
enum DemoError {
    InvalidArguments(String),
    Init(SinkError),
    Log(SinkError),
    WorkerPanicked(usize),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DemoError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            DemoError::Init(err) => write!(f, "Logger initialization failed: {}", err),
            DemoError::Log(err) => write!(f, "Error: {}", err),
            DemoError::WorkerPanicked(id) => write!(f, "Error: worker thread {} panicked", id),
        }
    }
}

impl From<SinkError> for DemoError {
    fn from(err: SinkError) -> Self {
        DemoError::Log(err)
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 3 {
        return Err(DemoError::InvalidArguments(USAGE.to_string()));
    }

    let log_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_LOG_PATH);
    let level = match args.get(2) {
        Some(raw) => raw.parse::<Severity>().map_err(|e| {
            DemoError::InvalidArguments(format!("{} ({})", e, USAGE))
        })?,
        None => Severity::Debug,
    };

    let sink = LogSink::global();
    sink.initialize(log_path, level).map_err(DemoError::Init)?;

    sink.log(Severity::Debug, "This is a debug message")?;
    sink.log(Severity::Info, "Application started")?;
    sink.log(Severity::Warning, "Low memory detected")?;
    sink.log(Severity::Error, "Failed to open file")?;
    sink.log(Severity::Critical, "Critical system error")?;

    sink.set_level(Severity::Warning);
    sink.log(Severity::Info, "This message won't be logged")?;

    thread::scope(|scope| {
        let workers: Vec<_> = (1..=WORKER_THREADS)
            .map(|thread_id| {
                let worker = scope.spawn(move || -> Result<(), SinkError> {
                    for i in 0..MESSAGES_PER_THREAD {
                        sink_info!(sink, "Thread {} message {}", thread_id, i)?;
                    }
                    Ok(())
                });
                (thread_id, worker)
            })
            .collect();

        join_workers(workers)
    })?;

    // Large writes may fail on constrained devices; report and carry on.
    let large = "x".repeat(LARGE_MESSAGE_LEN);
    if let Err(e) = sink.log(Severity::Critical, &large) {
        eprintln!("Error caught: {}", e);
    }

    Ok(())
}

/// Joins every worker, surfacing the first panic or logging failure.
fn join_workers(
    workers: Vec<(usize, ScopedJoinHandle<'_, Result<(), SinkError>>)>,
) -> Result<(), DemoError> {
    workers.into_iter().try_for_each(|(thread_id, worker)| {
        worker
            .join()
            .map_err(|_| DemoError::WorkerPanicked(thread_id))?
            .map_err(DemoError::Log)
    })
}
