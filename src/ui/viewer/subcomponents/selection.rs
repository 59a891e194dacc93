// SPDX-License-Identifier: MPL-2.0
//! Grid selection sub-component.
//!
//! Selected items are stored as indices into the currently displayed
//! collection. Indices are only meaningful until the collection changes, so
//! every mutation of the collection must go through [`State::clear`].

use std::collections::BTreeSet;

/// Whether `count` assets are shown with the single-item layout.
///
/// Zero counts as single, so a video-only viewer with no photos renders the
/// single-item surface rather than an empty grid.
#[must_use]
pub fn is_single_photo_mode(count: usize) -> bool {
    count <= 1
}

/// Selection state for the grid.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Whether taps toggle membership instead of viewing.
    selection_mode: bool,
    selected: BTreeSet<usize>,
}

/// Messages for the selection sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Select/Done pressed in the top bar.
    ToggleMode,
    /// Grid cell badge pressed.
    Toggle(usize),
}

/// Effects produced by selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Selection mode was entered (`true`) or left (`false`).
    ModeChanged(bool),
}

impl State {
    /// Handle a selection message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ToggleMode => {
                self.selection_mode = !self.selection_mode;
                if !self.selection_mode {
                    self.selected.clear();
                }
                Effect::ModeChanged(self.selection_mode)
            }
            Message::Toggle(index) => {
                if self.selection_mode {
                    self.toggle(index);
                }
                Effect::None
            }
        }
    }

    /// Flips membership of `index`.
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Empties the selection and leaves selection mode.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.selection_mode = false;
    }

    #[must_use]
    pub fn is_selection_mode(&self) -> bool {
        self.selection_mode
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    #[must_use]
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_photo_mode_boundary() {
        assert!(is_single_photo_mode(0));
        assert!(is_single_photo_mode(1));
        for n in 2..50 {
            assert!(!is_single_photo_mode(n));
        }
    }

    #[test]
    fn toggling_twice_restores_selection() {
        let mut state = State::default();
        state.toggle(1);
        let before = state.selected().clone();

        state.toggle(4);
        state.toggle(4);
        assert_eq!(state.selected(), &before);

        state.toggle(1);
        assert!(state.is_empty());
    }

    #[test]
    fn toggle_message_ignored_outside_selection_mode() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::Toggle(0)), Effect::None);
        assert!(state.is_empty());
    }

    #[test]
    fn leaving_selection_mode_clears_selection() {
        let mut state = State::default();
        assert_eq!(state.handle(Message::ToggleMode), Effect::ModeChanged(true));
        state.handle(Message::Toggle(0));
        state.handle(Message::Toggle(2));
        assert_eq!(state.len(), 2);

        assert_eq!(state.handle(Message::ToggleMode), Effect::ModeChanged(false));
        assert!(state.is_empty());
        assert!(!state.is_selection_mode());
    }

    #[test]
    fn clear_exits_selection_mode() {
        let mut state = State::default();
        state.handle(Message::ToggleMode);
        state.handle(Message::Toggle(3));
        state.clear();
        assert!(state.is_empty());
        assert!(!state.is_selection_mode());
        assert!(!state.is_selected(3));
    }
}
