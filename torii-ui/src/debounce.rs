//! Keystroke debouncing for the search input.
//!
//! A burst of keystrokes must trigger exactly one search, for the text as
//! it stands after the burst. Each submission replaces the previous
//! pending timer, so at most one timer is ever in flight.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Delays query delivery until input has been quiet for a fixed window.
///
/// `submit` is called on every keystroke with the full current text; the
/// query reaches the receiver only after the quiescence window passes with
/// no further submissions. The receiver side feeds
/// [`InputEvent::QueryChanged`](crate::controller::InputEvent) into the
/// controller.
#[derive(Debug)]
pub struct QueryDebouncer {
    delay: Duration,
    tx: mpsc::UnboundedSender<String>,
    pending: Option<JoinHandle<()>>,
}

impl QueryDebouncer {
    /// Creates a debouncer delivering settled queries into `tx`.
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<String>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Registers the current input text, superseding any pending delivery.
    pub fn submit(&mut self, query: impl Into<String>) {
        self.cancel();

        let query = query.into();
        let delay = self.delay;
        let tx = self.tx.clone();

        trace!(%query, "debounce timer armed");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver may be gone during shutdown; nothing to deliver to.
            let _ = tx.send(query);
        }));
    }

    /// Drops the pending delivery, if any, without arming a new one.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for QueryDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
