// SPDX-License-Identifier: Apache-2.0 OR MIT
// Single-use completion cell for synchronous requests against the worker

use crossbeam_channel::{bounded, Receiver, Sender};
use thiserror::Error;

/// Errors surfaced to a caller waiting on the worker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandshakeError {
    /// The worker never executed the request: it was already stopped, never
    /// started, or dropped the request unexecuted during teardown.
    #[error("log worker is gone; request was never executed")]
    WorkerGone,
}

/// Create a connected completion/waiter pair.
///
/// The completion side travels to the worker thread inside a request
/// envelope; the waiter side stays with the caller. Dropping the completion
/// without setting a value (worker teardown) fails the waiter immediately
/// rather than leaving it blocked.
pub fn handshake<T>() -> (Completion<T>, Waiter<T>) {
    let (tx, rx) = bounded(1);
    (Completion { tx }, Waiter { rx })
}

/// Write side of the handshake, consumed by setting the result once
pub struct Completion<T> {
    tx: Sender<T>,
}

impl<T> Completion<T> {
    /// Deliver the result to the waiting caller.
    ///
    /// A caller that gave up and dropped its waiter is not an error.
    pub fn set(self, value: T) {
        let _ = self.tx.send(value);
    }
}

/// Read side of the handshake
pub struct Waiter<T> {
    rx: Receiver<T>,
}

impl<T> Waiter<T> {
    /// Block until the worker has executed the request and produced a result.
    ///
    /// Fails fast with [`HandshakeError::WorkerGone`] when the completion
    /// side was dropped without a value.
    pub fn wait(self) -> Result<T, HandshakeError> {
        self.rx.recv().map_err(|_| HandshakeError::WorkerGone)
    }
}
