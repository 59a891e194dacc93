// SPDX-License-Identifier: MPL-2.0
//! Observable upload progress shared between a host and the viewer.
//!
//! The host is the only writer of start/advance transitions; the viewer only
//! resets a stale completed value back to `None` when it reappears.
//!
//! # Example
//!
//! ```
//! use iced_gallery::application::upload_state::SharedUploadState;
//!
//! let state = SharedUploadState::new();
//! let viewer_copy = state.clone();
//!
//! state.set_progress(Some(0.5));
//! assert_eq!(viewer_copy.progress(), Some(0.5));
//!
//! state.set_progress(Some(3.0));
//! assert_eq!(viewer_copy.progress(), Some(1.0));
//! ```

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use futures_util::stream::{self, Stream};
use tokio::sync::watch;

/// Cloneable handle to a single observable `Option<f64>` in `[0, 1]`.
///
/// All clones observe and mutate the same value.
#[derive(Debug, Clone)]
pub struct SharedUploadState {
    sender: Arc<watch::Sender<Option<f64>>>,
}

impl SharedUploadState {
    /// Creates an idle state (`None`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_progress(None)
    }

    /// Creates a state with an initial value, clamped like [`Self::set_progress`].
    #[must_use]
    pub fn with_progress(progress: Option<f64>) -> Self {
        let initial = progress.and_then(sanitize);
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Current value.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        *self.sender.borrow()
    }

    /// Publishes a new value and notifies subscribers if it changed.
    ///
    /// Finite values are clamped into `[0, 1]`; NaN and infinities are ignored.
    pub fn set_progress(&self, progress: Option<f64>) {
        let next = match progress {
            None => None,
            Some(value) => match sanitize(value) {
                Some(clamped) => Some(clamped),
                None => {
                    tracing::debug!(value, "ignoring non-finite upload progress");
                    return;
                }
            },
        };

        self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    /// Returns a receiver that is notified on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<f64>> {
        self.sender.subscribe()
    }

    /// Stream that yields the current value, then every subsequent change.
    pub fn changes(&self) -> impl Stream<Item = Option<f64>> + Send + 'static {
        let mut receiver = self.subscribe();
        receiver.mark_changed();

        stream::unfold(receiver, |mut receiver| async move {
            receiver.changed().await.ok()?;
            let value = *receiver.borrow_and_update();
            Some((value, receiver))
        })
    }

    /// Whether both handles observe the same value.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.sender, &other.sender)
    }
}

impl Default for SharedUploadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity hash, so a subscription keyed on the state restarts only when the
/// host swaps in a different state object.
impl Hash for SharedUploadState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.sender).hash(state);
    }
}

fn sanitize(value: f64) -> Option<f64> {
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;

    #[test]
    fn starts_idle() {
        assert_eq!(SharedUploadState::new().progress(), None);
        assert_eq!(SharedUploadState::default().progress(), None);
    }

    #[test]
    fn values_are_clamped_and_non_finite_ignored() {
        let state = SharedUploadState::new();
        state.set_progress(Some(-1.0));
        assert_eq!(state.progress(), Some(0.0));
        state.set_progress(Some(0.3));
        state.set_progress(Some(f64::NAN));
        assert_eq!(state.progress(), Some(0.3));
        state.set_progress(Some(f64::INFINITY));
        assert_eq!(state.progress(), Some(0.3));
        state.set_progress(None);
        assert_eq!(state.progress(), None);
    }

    #[test]
    fn clones_share_identity() {
        let a = SharedUploadState::new();
        let b = a.clone();
        let c = SharedUploadState::new();
        assert!(a.same_as(&b));
        assert!(!a.same_as(&c));
    }

    #[tokio::test]
    async fn subscribers_are_notified_on_change() {
        let state = SharedUploadState::new();
        let mut receiver = state.subscribe();

        state.set_progress(Some(0.5));
        receiver.changed().await.expect("sender alive");
        assert_eq!(*receiver.borrow_and_update(), Some(0.5));
    }

    #[tokio::test]
    async fn identical_values_do_not_notify() {
        let state = SharedUploadState::with_progress(Some(0.5));
        let receiver = state.subscribe();

        state.set_progress(Some(0.5));
        assert!(!receiver.has_changed().expect("sender alive"));
    }

    #[tokio::test]
    async fn changes_stream_yields_current_then_updates() {
        let state = SharedUploadState::with_progress(Some(0.25));
        let mut changes = Box::pin(state.changes());

        assert_eq!(changes.next().await, Some(Some(0.25)));
        state.set_progress(Some(1.0));
        assert_eq!(changes.next().await, Some(Some(1.0)));
    }
}
