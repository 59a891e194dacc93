// SPDX-License-Identifier: MPL-2.0
//! Upload progress sub-component.
//!
//! Mirrors the host's shared progress value and turns its transitions into
//! viewer effects: reaching 100% schedules a single dismissal after the
//! settle delay, and a stale 100% found on appearance is reset to idle.

use crate::domain::upload::{UploadPhase, UploadProgress};
use std::time::{Duration, Instant};

/// Upload tracker state.
#[derive(Debug, Clone)]
pub struct State {
    progress: Option<UploadProgress>,
    settle_delay: Duration,
    /// When progress reached 1 in this session.
    completed_at: Option<Instant>,
    /// Set once the dismissal fired; never fires twice per appearance.
    dismissed: bool,
}

/// Messages for the upload sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Viewer became visible; carries the shared value at that instant.
    Appeared(Option<f64>),
    /// The shared value changed.
    ProgressChanged(Option<f64>),
    /// A scheduled settle timer woke up.
    SettleElapsed,
}

/// Effects produced by the upload tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Write `None` back to the shared state.
    ResetShared,
    /// Wake the tracker after this long.
    ScheduleSettle(Duration),
    /// Dismiss the viewer.
    Dismiss,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::DEFAULT_SETTLE_DELAY_MS,
        ))
    }
}

impl State {
    #[must_use]
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            progress: None,
            settle_delay,
            completed_at: None,
            dismissed: false,
        }
    }

    /// Handle an upload message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Appeared(raw) => {
                self.completed_at = None;
                self.dismissed = false;
                let progress = raw.and_then(UploadProgress::try_new);
                if progress.is_some_and(UploadProgress::is_complete) {
                    // Leftover from a previous session
                    self.progress = None;
                    return Effect::ResetShared;
                }
                self.progress = progress;
                Effect::None
            }
            Message::ProgressChanged(raw) => {
                self.progress = raw.and_then(UploadProgress::try_new);
                match self.phase() {
                    UploadPhase::Complete => {
                        if self.dismissed || self.completed_at.is_some() {
                            return Effect::None;
                        }
                        self.completed_at = Some(Instant::now());
                        Effect::ScheduleSettle(self.settle_delay)
                    }
                    _ => {
                        // Dropping below 100% before the timer fires cancels it
                        self.completed_at = None;
                        Effect::None
                    }
                }
            }
            Message::SettleElapsed => {
                if self.dismissed {
                    return Effect::None;
                }
                let Some(completed_at) = self.completed_at else {
                    return Effect::None;
                };
                let elapsed = completed_at.elapsed();
                if elapsed >= self.settle_delay {
                    self.dismissed = true;
                    self.completed_at = None;
                    Effect::Dismiss
                } else {
                    Effect::ScheduleSettle(self.settle_delay - elapsed)
                }
            }
        }
    }

    #[must_use]
    pub fn progress(&self) -> Option<UploadProgress> {
        self.progress
    }

    #[must_use]
    pub fn phase(&self) -> UploadPhase {
        UploadPhase::from_progress(self.progress)
    }

    /// Whether interactive controls are disabled.
    ///
    /// Any positive progress locks them, including the instant of completion.
    #[must_use]
    pub fn locks_controls(&self) -> bool {
        self.phase().locks_controls()
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}
