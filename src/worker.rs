// SPDX-License-Identifier: Apache-2.0 OR MIT
// Background log worker: owns the sink and the single consumer thread

use crate::handshake::{handshake, Waiter};
use crate::queue::{self, Popper, Pusher};
use crate::record::LogRecord;
use crate::sink::{FileSink, LogSink};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

static NEXT_WORKER_ID: AtomicU64 = AtomicU64::new(1);

/// Unit of work handed from a producer thread to the worker
pub(crate) enum Envelope {
    /// Persist this finished record
    Record(LogRecord),
    /// Run this request on the worker thread and signal completion
    Request(Box<dyn FnOnce(&mut Backend) + Send>),
}

/// Worker-thread-owned state. Requests execute against this, in line with
/// record writes, so their effects are causally ordered with all pushes.
pub(crate) struct Backend {
    pub(crate) sink: Box<dyn LogSink>,
    pub(crate) stop: bool,
}

impl Backend {
    fn write(&mut self, record: &LogRecord) {
        self.sink.write_record(record);
        // Fatal records are the last thing the process may ever log
        if record.severity.is_fatal() {
            self.sink.flush();
        }
    }
}

/// Cheap cloneable reference to a running worker: the producer end of the
/// queue plus the worker's identity. This is what the active-logger registry
/// stores; it does not keep the worker alive or restart it.
#[derive(Clone)]
pub struct LoggerHandle {
    tx: Pusher<Envelope>,
    id: u64,
}

impl LoggerHandle {
    /// Enqueue a record. Returns false when the worker has already stopped,
    /// in which case the record is silently dropped (safe to try).
    pub(crate) fn log(&self, record: LogRecord) -> bool {
        self.tx.push(Envelope::Record(record))
    }

    /// Enqueue a request and return a waiter for its result.
    ///
    /// The request runs on the worker thread after every envelope pushed
    /// before it and before every envelope pushed after it. If the worker is
    /// stopped, or stops before reaching the request, the waiter fails fast
    /// instead of hanging.
    pub(crate) fn call<T, F>(&self, request: F) -> Waiter<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Backend) -> T + Send + 'static,
    {
        let (completion, waiter) = handshake();
        self.tx.push(Envelope::Request(Box::new(move |backend| {
            completion.set(request(backend));
        })));
        waiter
    }

    /// Handshake-backed query for the sink's current destination path
    pub fn log_file_name(&self) -> Waiter<String> {
        self.call(|backend| backend.sink.destination())
    }

    /// Handshake that completes once everything pushed before it is durable
    pub(crate) fn flush(&self) -> Waiter<()> {
        self.call(|backend| backend.sink.flush())
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

/// Owner of one background logging worker.
///
/// Exactly one consumer thread per instance. Teardown (explicit or on drop)
/// pushes a stop request through the queue, so everything enqueued earlier
/// is written first, then joins the thread and releases the sink. A stopped
/// worker cannot be restarted; create a new instance instead.
pub struct LogWorker {
    handle: LoggerHandle,
    thread: Option<JoinHandle<()>>,
}

impl LogWorker {
    /// Create a worker writing to a fresh log file named after `name` inside
    /// `directory`.
    pub fn new(name: &str, directory: impl AsRef<Path>) -> Result<Self> {
        let sink = FileSink::new(name, directory)?;
        Self::with_sink(name, Box::new(sink))
    }

    /// Create a worker over an arbitrary sink (tests substitute an in-memory
    /// one here).
    pub fn with_sink(name: &str, sink: Box<dyn LogSink>) -> Result<Self> {
        let (tx, rx) = queue::channel();
        let thread = thread::Builder::new()
            .name(format!("ferrolog-{name}"))
            .spawn(move || run_loop(rx, sink))
            .context("cannot spawn log worker thread")?;

        Ok(Self {
            handle: LoggerHandle {
                tx,
                id: NEXT_WORKER_ID.fetch_add(1, Ordering::Relaxed),
            },
            thread: Some(thread),
        })
    }

    /// Get a cloneable handle for the registry and call sites
    pub fn handle(&self) -> LoggerHandle {
        self.handle.clone()
    }

    /// Handshake-backed query for the current log file path
    pub fn log_file_name(&self) -> Waiter<String> {
        self.handle.log_file_name()
    }

    /// Flush everything enqueued so far and stop the worker thread.
    /// Idempotent; also runs on drop.
    pub fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        let waiter = self.handle.call(|backend| {
            backend.sink.flush();
            backend.stop = true;
        });
        let _ = waiter.wait();
        let _ = thread.join();
    }
}

impl Drop for LogWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The consumer loop: pop, execute, repeat until a request flips `stop`.
///
/// Envelopes still queued behind the stop request are dropped when the
/// consumer end goes away, which fails their waiters instead of hanging
/// them.
fn run_loop(rx: Popper<Envelope>, sink: Box<dyn LogSink>) {
    let mut backend = Backend { sink, stop: false };
    while !backend.stop {
        match rx.pop() {
            Some(Envelope::Record(record)) => backend.write(&record),
            Some(Envelope::Request(request)) => request(&mut backend),
            None => break,
        }
    }
    backend.sink.flush();
}
