//! Picker engine: routes inputs through the store and projects the result.
//!
//! [`PickerCore`] owns the [`AssetStore`] and the [`SelectionView`] and is
//! free of browser dependencies. Each input returns the list of
//! [`Action`]s the host must apply to the DOM, in order. A form submit, when
//! present, is always the last action so the file input is synchronized
//! before the browser serializes the form.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::asset::{Asset, AssetId};
use crate::input::{PickerInput, image_files};
use crate::store::AssetStore;
use crate::view::{SelectionView, ViewUpdate};

/// DOM updates returned from input handlers for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<F> {
    /// Reflect the checked state of an existing thumbnail.
    SetChecked { id: AssetId, checked: bool },
    /// Render a new, checked local thumbnail at the front of the grid.
    ShowLocal { id: AssetId, file: F },
    /// Replace the file input's list with these files.
    SyncFiles(Vec<F>),
    /// Enable or disable the submit button.
    SetSubmitDisabled(bool),
    /// Submit the owning form natively.
    SubmitForm,
}

pub struct PickerCore<F> {
    store: AssetStore<F>,
    view: SelectionView,
}

impl<F: Clone> PickerCore<F> {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { store: AssetStore::new(capacity), view: SelectionView::new(capacity) }
    }

    // --- Setup ---

    /// Register a server-rendered thumbnail. Returns its id and the checked
    /// state it was seeded with, which may differ from `checked` when the
    /// page pre-checks more candidates than capacity allows.
    pub fn seed_remote(&mut self, url: impl Into<String>, checked: bool) -> (AssetId, bool) {
        let id = self.store.insert_remote(url, checked);
        (id, self.store.is_checked(id))
    }

    /// Initial projection once all thumbnails are seeded.
    pub fn mount(&mut self) -> Vec<Action<F>> {
        let update = self.view.mount(self.store.count());
        vec![Action::SetSubmitDisabled(update.submit_disabled)]
    }

    // --- Inputs ---

    /// Apply one user input.
    pub fn handle(&mut self, input: PickerInput<F>) -> Vec<Action<F>> {
        match input {
            PickerInput::Click(id) => self.toggle(id),
            PickerInput::Drop(files) => self.add_files(files),
            PickerInput::Paste(items) => self.add_files(image_files(items)),
        }
    }

    /// Toggle a thumbnail. Returns no actions when the toggle was rejected.
    pub fn toggle(&mut self, id: AssetId) -> Vec<Action<F>> {
        if !self.store.try_toggle(id) {
            return Vec::new();
        }
        let checked = self.store.is_checked(id);
        let local = self.store.get(id).is_some_and(Asset::is_local);
        log::debug!("asset {id} checked={checked} count={}", self.store.count());

        let mut actions = vec![Action::SetChecked { id, checked }];
        if local {
            actions.push(Action::SyncFiles(self.store.pending_files()));
        }
        self.push_render(&mut actions);
        actions
    }

    /// Add local files. Returns no actions when nothing fit.
    pub fn add_files(&mut self, files: Vec<F>) -> Vec<Action<F>> {
        if files.is_empty() {
            return Vec::new();
        }
        let offered = files.len();
        let added = self.store.try_add(files);
        if added.is_empty() {
            log::debug!("selection full; ignored {offered} file(s)");
            return Vec::new();
        }
        log::debug!("accepted {}/{offered} file(s) count={}", added.len(), self.store.count());

        let mut actions: Vec<Action<F>> =
            added.into_iter().map(|a| Action::ShowLocal { id: a.id, file: a.file }).collect();
        actions.push(Action::SyncFiles(self.store.pending_files()));
        self.push_render(&mut actions);
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count()
    }

    #[must_use]
    pub fn store(&self) -> &AssetStore<F> {
        &self.store
    }

    fn push_render(&mut self, actions: &mut Vec<Action<F>>) {
        let ViewUpdate { submit_disabled, auto_submit } = self.view.render(self.store.count());
        actions.push(Action::SetSubmitDisabled(submit_disabled));
        if auto_submit {
            actions.push(Action::SubmitForm);
        }
    }
}
