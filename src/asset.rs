//! Asset model: the selectable units behind each thumbnail.
//!
//! An asset is either a remote candidate rendered by the server (identified
//! by the checkbox value it submits) or a local file the user dropped or
//! pasted. The file handle type is generic so the store can be exercised with
//! plain values in tests and with `web_sys::File` in the browser.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use std::fmt;

use uuid::Uuid;

/// Unique identifier for an asset within one page lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(Uuid);

impl AssetId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where an asset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource<F> {
    /// Pre-rendered candidate; `url` is the value submitted under the `url` field.
    Remote { url: String },
    /// File added at runtime by drop or paste.
    Local { file: F },
}

/// A selectable unit and its checked state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset<F> {
    pub id: AssetId,
    pub source: AssetSource<F>,
    pub checked: bool,
}

impl<F> Asset<F> {
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self.source, AssetSource::Local { .. })
    }

    /// The backing file of a local asset.
    #[must_use]
    pub fn file(&self) -> Option<&F> {
        match &self.source {
            AssetSource::Local { file } => Some(file),
            AssetSource::Remote { .. } => None,
        }
    }

    /// The submitted identifier of a remote asset.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.source {
            AssetSource::Remote { url } => Some(url),
            AssetSource::Local { .. } => None,
        }
    }
}

/// A file accepted by [`crate::store::AssetStore::try_add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedAsset<F> {
    pub id: AssetId,
    pub file: F,
}
