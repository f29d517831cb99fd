//! # Add-to-cart Feedback
//!
//! The brief "Added!" state an add-to-cart button shows after a click.
//!
//! This is local UI state: it never touches the [`CartStore`](crate::CartStore)
//! and is not part of the cart's contract.
//!
//! ```text
//! click ──► trigger() ──► active = true ──(reset_after)──► active = false
//!              │
//!              └── clicked again before reset? restart the timer
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::config::StoreConfig;

/// "Added!" flag for one button, reset by a timer.
///
/// Cloning gives another handle to the same flag.
#[derive(Debug, Clone)]
pub struct AddedFeedback {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    active: watch::Sender<bool>,
    // Bumped on every trigger; only changed while the watch value is locked.
    generation: AtomicU64,
    reset_after: Duration,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

impl Inner {
    /// Clears the flag unless a later trigger has superseded `generation`.
    fn clear_if_current(&self, generation: u64) -> bool {
        self.active.send_if_modified(|active| {
            if self.generation.load(Ordering::Acquire) != generation || !*active {
                return false;
            }
            *active = false;
            true
        })
    }
}

impl AddedFeedback {
    pub fn new(reset_after: Duration) -> Self {
        let (active, _) = watch::channel(false);
        AddedFeedback {
            inner: Arc::new(Inner {
                active,
                generation: AtomicU64::new(0),
                reset_after,
                pending_reset: Mutex::new(None),
            }),
        }
    }

    /// Uses the configured `CREMA_FEEDBACK_MS` duration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.feedback_duration())
    }

    /// Turns the flag on and schedules it off after `reset_after`.
    ///
    /// Must be called from within a Tokio runtime. A pending reset from an
    /// earlier click is cancelled so the full duration starts over; one that
    /// already woke up finds its generation stale and leaves the flag alone.
    pub fn trigger(&self) {
        let mut generation = 0;
        self.inner.active.send_modify(|active| {
            generation = self.inner.generation.fetch_add(1, Ordering::AcqRel) + 1;
            *active = true;
        });

        let inner = Arc::clone(&self.inner);
        let reset = tokio::spawn(async move {
            tokio::time::sleep(inner.reset_after).await;
            if inner.clear_if_current(generation) {
                trace!(generation, "added feedback reset");
            }
        });

        let previous = self
            .inner
            .pending_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(reset);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        *self.inner.active.borrow()
    }

    /// Button text: "Added!" while active, `idle` otherwise.
    pub fn label<'a>(&self, idle: &'a str) -> &'a str {
        if self.is_active() {
            "Added!"
        } else {
            idle
        }
    }

    /// Notified whenever the flag flips.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.active.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_resets_after_duration() {
        let feedback = AddedFeedback::new(Duration::from_millis(1000));
        assert!(!feedback.is_active());
        assert_eq!(feedback.label("Add to cart"), "Add to cart");

        feedback.trigger();
        assert!(feedback.is_active());
        assert_eq!(feedback.label("Add to cart"), "Added!");

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(feedback.is_active());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!feedback.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_retrigger_restarts_timer() {
        let feedback = AddedFeedback::new(Duration::from_millis(1000));

        feedback.trigger();
        tokio::time::sleep(Duration::from_millis(600)).await;
        feedback.trigger();

        // 1200ms after the first click, 600ms after the second
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(feedback.is_active());

        tokio::time::sleep(Duration::from_millis(401)).await;
        assert!(!feedback.is_active());
    }

    #[tokio::test]
    async fn test_stale_reset_leaves_newer_trigger_active() {
        let feedback = AddedFeedback::new(Duration::from_secs(60));

        feedback.trigger();
        feedback.trigger();

        // A reset from the first click that slipped past its abort
        assert!(!feedback.inner.clear_if_current(1));
        assert!(feedback.is_active());

        assert!(feedback.inner.clear_if_current(2));
        assert!(!feedback.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_from_config_duration() {
        let config = StoreConfig {
            feedback_ms: 300,
            ..StoreConfig::default()
        };
        let feedback = AddedFeedback::from_config(&config);

        feedback.trigger();
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert!(feedback.is_active());
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!feedback.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_see_both_edges() {
        let feedback = AddedFeedback::new(Duration::from_millis(250));
        let mut rx = feedback.subscribe();

        feedback.trigger();
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        rx.changed().await.unwrap();
        assert!(!*rx.borrow_and_update());
    }
}
