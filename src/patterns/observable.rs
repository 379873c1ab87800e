//! Observable stream of values built on a broadcast channel

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::warn;

/// Default number of values buffered per subscriber
pub const DEFAULT_CAPACITY: usize = 16;

/// Source of values that any number of subscribers can observe
#[derive(Debug, Clone)]
pub struct Observable<T> {
    sender: broadcast::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Start observing; only values emitted after this call are seen
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Push a value to every live subscriber
    ///
    /// Returns how many subscribers will see it.
    pub fn emit(&self, value: T) -> usize {
        self.sender.send(value).unwrap_or(0)
    }
}

impl<T: Clone> Default for Observable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A subscriber's view of an [`Observable`]
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: broadcast::Receiver<T>,
}

impl<T: Clone> Subscription<T> {
    /// Wait for the next value; `None` once the observable is gone
    pub async fn next(&mut self) -> Option<T> {
        loop {
            match self.receiver.recv().await {
                Ok(value) => return Some(value),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Subscriber lagged, skipped {} values", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Take every value already emitted, in emission order
    pub fn drain(&mut self) -> Vec<T> {
        let mut values = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(value) => values.push(value),
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Subscriber lagged, skipped {} values", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return values,
            }
        }
    }
}
