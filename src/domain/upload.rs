// SPDX-License-Identifier: MPL-2.0
//! Upload progress value objects.
//!
//! `None` means no upload is active and the overlay is hidden. `Some(0.0)`
//! is an upload that is about to start: the overlay is shown at 0%.

/// Upload completion fraction, guaranteed to be within `[0.0, 1.0]`.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::upload::UploadProgress;
///
/// assert_eq!(UploadProgress::new(1.7).value(), 1.0);
/// assert_eq!(UploadProgress::new(0.25).percent(), 25);
/// assert!(UploadProgress::try_new(f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct UploadProgress(f64);

impl UploadProgress {
    /// Fully uploaded.
    pub const COMPLETE: Self = Self(1.0);

    /// Creates a progress value, clamping to `[0, 1]`. NaN becomes 0.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a progress value, rejecting NaN.
    #[must_use]
    pub fn try_new(value: f64) -> Option<Self> {
        (!value.is_nan()).then(|| Self::new(value))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded percentage for the overlay label.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}

/// Phase of the upload derived from the optional progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UploadPhase {
    /// No active upload; overlay hidden.
    Idle,
    /// Progress reported as exactly 0; overlay shown at 0%.
    Starting,
    /// Strictly between 0 and 1.
    Uploading(UploadProgress),
    /// Reached 1.
    Complete,
}

impl UploadPhase {
    #[must_use]
    pub fn from_progress(progress: Option<UploadProgress>) -> Self {
        match progress {
            None => Self::Idle,
            Some(p) if p.is_complete() => Self::Complete,
            Some(p) if p.value() <= 0.0 => Self::Starting,
            Some(p) => Self::Uploading(p),
        }
    }

    /// Whether the progress overlay is on screen.
    #[must_use]
    pub fn shows_overlay(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether interactive controls must be disabled.
    ///
    /// Locked while uploading and from the instant progress reaches 1.
    #[must_use]
    pub fn locks_controls(self) -> bool {
        matches!(self, Self::Uploading(_) | Self::Complete)
    }

    /// Strictly between 0 and 1.
    #[must_use]
    pub fn is_uploading(self) -> bool {
        matches!(self, Self::Uploading(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_unit_range() {
        assert_eq!(UploadProgress::new(-0.5).value(), 0.0);
        assert_eq!(UploadProgress::new(2.0).value(), 1.0);
        assert_eq!(UploadProgress::new(0.4).value(), 0.4);
        assert_eq!(UploadProgress::new(f64::NAN).value(), 0.0);
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(UploadProgress::try_new(f64::NAN).is_none());
        assert_eq!(UploadProgress::try_new(f64::INFINITY), Some(UploadProgress::COMPLETE));
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(UploadProgress::new(0.0).percent(), 0);
        assert_eq!(UploadProgress::new(0.666).percent(), 67);
        assert_eq!(UploadProgress::COMPLETE.percent(), 100);
    }

    #[test]
    fn phase_from_progress() {
        assert_eq!(UploadPhase::from_progress(None), UploadPhase::Idle);
        assert_eq!(
            UploadPhase::from_progress(Some(UploadProgress::new(0.0))),
            UploadPhase::Starting
        );
        assert_eq!(
            UploadPhase::from_progress(Some(UploadProgress::new(0.5))),
            UploadPhase::Uploading(UploadProgress::new(0.5))
        );
        assert_eq!(
            UploadPhase::from_progress(Some(UploadProgress::COMPLETE)),
            UploadPhase::Complete
        );
    }

    #[test]
    fn zero_shows_overlay_but_is_not_uploading() {
        let phase = UploadPhase::from_progress(Some(UploadProgress::new(0.0)));
        assert!(phase.shows_overlay());
        assert!(!phase.is_uploading());
        assert!(!phase.locks_controls());
    }

    #[test]
    fn complete_locks_controls_but_is_not_uploading() {
        let phase = UploadPhase::Complete;
        assert!(phase.locks_controls());
        assert!(!phase.is_uploading());
        assert!(!UploadPhase::Idle.shows_overlay());
    }
}
