//! Bounded asset store: the canonical selection state of the picker.
//!
//! The store owns every asset the page knows about, in insertion order, and
//! enforces the capacity invariant: at most `capacity` assets are checked at
//! any time. Operations that would exceed the bound are silent no-ops (or
//! partial acceptances) rather than errors, since the user already sees the
//! checked state of every thumbnail.
//!
//! The pending file list (local files backing the multipart payload) is not
//! stored separately. It is derived from the checked local assets, so it can
//! never drift from the selection.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::asset::{AddedAsset, Asset, AssetId, AssetSource};

#[derive(Debug, Clone)]
pub struct AssetStore<F> {
    assets: Vec<Asset<F>>,
    capacity: usize,
}

impl<F: Clone> AssetStore<F> {
    /// Create an empty store holding at most `capacity` checked assets.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { assets: Vec::new(), capacity }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of currently checked assets, remote and local.
    #[must_use]
    pub fn count(&self) -> usize {
        self.assets.iter().filter(|a| a.checked).count()
    }

    /// How many more assets may be checked before reaching capacity.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.count())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    /// Register a pre-rendered remote candidate.
    ///
    /// A candidate rendered as checked is seeded checked only while capacity
    /// remains; otherwise it starts unchecked.
    pub fn insert_remote(&mut self, url: impl Into<String>, checked: bool) -> AssetId {
        let id = AssetId::new();
        let checked = checked && !self.is_full();
        self.assets.push(Asset { id, source: AssetSource::Remote { url: url.into() }, checked });
        id
    }

    /// Flip the checked state of `id`.
    ///
    /// Turning an asset off always succeeds. Turning one on fails when the
    /// store is at capacity. Returns `false` for unknown ids.
    pub fn try_toggle(&mut self, id: AssetId) -> bool {
        let full = self.is_full();
        let Some(asset) = self.assets.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        if !asset.checked && full {
            log::debug!("toggle {id} rejected: selection full");
            return false;
        }
        asset.checked = !asset.checked;
        true
    }

    /// Accept files in input order while capacity remains, as new checked
    /// local assets. Files beyond the remaining capacity are discarded.
    pub fn try_add<I>(&mut self, files: I) -> Vec<AddedAsset<F>>
    where
        I: IntoIterator<Item = F>,
    {
        let room = self.remaining();
        let mut added = Vec::new();
        let mut dropped = 0usize;
        for file in files {
            if added.len() == room {
                dropped += 1;
                continue;
            }
            let id = AssetId::new();
            self.assets.push(Asset { id, source: AssetSource::Local { file: file.clone() }, checked: true });
            added.push(AddedAsset { id, file });
        }
        if dropped > 0 {
            log::debug!("discarded {dropped} file(s) beyond capacity {}", self.capacity);
        }
        added
    }

    /// Return an asset by id.
    #[must_use]
    pub fn get(&self, id: AssetId) -> Option<&Asset<F>> {
        self.assets.iter().find(|a| a.id == id)
    }

    #[must_use]
    pub fn is_checked(&self, id: AssetId) -> bool {
        self.get(id).is_some_and(|a| a.checked)
    }

    /// All assets in insertion order.
    pub fn assets(&self) -> impl Iterator<Item = &Asset<F>> {
        self.assets.iter()
    }

    /// Local files backing the submission payload, in the order they were added.
    #[must_use]
    pub fn pending_files(&self) -> Vec<F> {
        self.assets
            .iter()
            .filter(|a| a.checked)
            .filter_map(Asset::file)
            .cloned()
            .collect()
    }

    /// Identifiers of the checked remote candidates, in render order.
    #[must_use]
    pub fn checked_urls(&self) -> Vec<&str> {
        self.assets
            .iter()
            .filter(|a| a.checked)
            .filter_map(Asset::url)
            .collect()
    }

    /// Number of assets, checked or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
