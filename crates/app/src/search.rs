//! Debounced search input.
//!
//! Each keystroke submits the whole input and takes a ticket. A submission
//! only settles into a query if no newer one arrived during the quiet
//! window, so a burst of typing issues one request for the final text.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    latest: Arc<AtomicU64>,
}

/// One submitted input waiting out the debounce window.
#[derive(Debug)]
#[must_use]
pub struct PendingQuery {
    input: String,
    ticket: u64,
    delay: Duration,
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Records `input` as the newest search text. Any earlier pending query
    /// is superseded from this point on.
    pub fn submit(&self, input: impl Into<String>) -> PendingQuery {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        PendingQuery {
            input: input.into(),
            ticket,
            delay: self.delay,
            latest: self.latest.clone(),
        }
    }
}

impl PendingQuery {
    /// Waits out the window. Yields the trimmed text if this is still the
    /// newest submission, `None` if it was superseded.
    pub async fn settle(self) -> Option<String> {
        tokio::time::sleep(self.delay).await;
        if self.latest.load(Ordering::SeqCst) != self.ticket {
            debug!("Search input {:?} superseded", self.input);
            return None;
        }
        Some(self.input.trim().to_string())
    }
}
