// SPDX-License-Identifier: MPL-2.0
//! Callback handles for hosts that prefer callbacks over matching effects.
//!
//! Every handler is optional and defaults to doing nothing. The struct holds
//! plain boxed functions, so the viewer never owns its host.

use super::component::Effect;
use crate::media::Asset;

type SaveFn = Box<dyn Fn(&str, &[Asset])>;
type CloseFn = Box<dyn Fn()>;
type EditFn = Box<dyn Fn(&Asset)>;
type RemovedFn = Box<dyn Fn(&[Asset])>;

/// Optional handlers invoked for viewer effects.
#[derive(Default)]
pub struct HostCallbacks {
    on_save: Option<SaveFn>,
    on_close: Option<CloseFn>,
    on_edit: Option<EditFn>,
    on_removed: Option<RemovedFn>,
}

impl std::fmt::Debug for HostCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCallbacks")
            .field("on_save", &self.on_save.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_edit", &self.on_edit.is_some())
            .field("on_removed", &self.on_removed.is_some())
            .finish()
    }
}

impl HostCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the comment and the current assets.
    #[must_use]
    pub fn on_save(mut self, f: impl Fn(&str, &[Asset]) + 'static) -> Self {
        self.on_save = Some(Box::new(f));
        self
    }

    /// Called when the viewer is closed, by the user or automatically.
    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Box::new(f));
        self
    }

    /// Called with the displayed asset when edit is requested.
    #[must_use]
    pub fn on_edit(mut self, f: impl Fn(&Asset) + 'static) -> Self {
        self.on_edit = Some(Box::new(f));
        self
    }

    /// Called with the assets removed from the collection.
    #[must_use]
    pub fn on_removed(mut self, f: impl Fn(&[Asset]) + 'static) -> Self {
        self.on_removed = Some(Box::new(f));
        self
    }

    /// Routes `effect` to the matching handler, if any.
    ///
    /// Automatic dismissal is reported through `on_close`.
    pub fn dispatch(&self, effect: &Effect) {
        match effect {
            Effect::None => {}
            Effect::Save { comment, assets } => {
                if let Some(f) = &self.on_save {
                    f(comment, assets);
                }
            }
            Effect::Close | Effect::Dismiss => {
                if let Some(f) = &self.on_close {
                    f();
                }
            }
            Effect::Edit(asset) => {
                if let Some(f) = &self.on_edit {
                    f(asset);
                }
            }
            Effect::AssetsRemoved(assets) => {
                if let Some(f) = &self.on_removed {
                    f(assets);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::asset::LibraryRef;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn missing_handlers_are_no_ops() {
        let callbacks = HostCallbacks::new();
        callbacks.dispatch(&Effect::Close);
        callbacks.dispatch(&Effect::Save {
            comment: String::new(),
            assets: Vec::new(),
        });
    }

    #[test]
    fn effects_reach_their_handlers() {
        let log = Rc::new(RefCell::new(Vec::<String>::new()));
        let (l1, l2, l3, l4) = (log.clone(), log.clone(), log.clone(), log.clone());
        let callbacks = HostCallbacks::new()
            .on_save(move |comment, assets| {
                l1.borrow_mut().push(format!("save {comment} {}", assets.len()));
            })
            .on_close(move || l2.borrow_mut().push("close".into()))
            .on_edit(move |asset| l3.borrow_mut().push(format!("edit {}", asset.id())))
            .on_removed(move |assets| l4.borrow_mut().push(format!("removed {}", assets.len())));

        let asset = Asset::from_library(LibraryRef::new("a"));
        callbacks.dispatch(&Effect::Save {
            comment: "hi".into(),
            assets: vec![asset.clone()],
        });
        callbacks.dispatch(&Effect::Edit(asset.clone()));
        callbacks.dispatch(&Effect::AssetsRemoved(vec![asset.clone(), asset.clone()]));
        callbacks.dispatch(&Effect::Dismiss);

        assert_eq!(
            *log.borrow(),
            vec![
                "save hi 1".to_string(),
                format!("edit {}", asset.id()),
                "removed 2".to_string(),
                "close".to_string(),
            ]
        );
    }
}
