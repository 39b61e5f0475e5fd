// SPDX-License-Identifier: Apache-2.0 OR MIT
// Unbounded FIFO hand-off between producer threads and the single consumer

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Create a connected producer/consumer pair.
///
/// Unbounded: a push never waits for the consumer to drain, so producers are
/// never stalled by slow I/O. Delivery is a strict FIFO linearization across
/// all producers; the consumer observes envelopes in exactly push order.
pub(crate) fn channel<T>() -> (Pusher<T>, Popper<T>) {
    let (tx, rx) = unbounded();
    (Pusher { tx }, Popper { rx })
}

/// Producer end, cheap to clone, safe to share across threads
pub(crate) struct Pusher<T> {
    tx: Sender<T>,
}

impl<T> Clone for Pusher<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> Pusher<T> {
    /// Enqueue one envelope. Returns false when the consumer is gone, in
    /// which case the envelope is dropped (the ignored-call case).
    pub(crate) fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

/// Consumer end, owned by exactly one worker thread
pub(crate) struct Popper<T> {
    rx: Receiver<T>,
}

impl<T> Popper<T> {
    /// Block until the next envelope is available. Returns None only when
    /// every producer end has been dropped.
    pub(crate) fn pop(&self) -> Option<T> {
        self.rx.recv().ok()
    }
}
