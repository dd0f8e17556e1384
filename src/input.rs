//! Input model: the three producers feeding the asset store.
//!
//! The host translates raw DOM events into [`PickerInput`] values. Filtering
//! that does not need the browser (clipboard MIME checks, drop-zone hover
//! styling) lives here so it can be tested natively.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::asset::AssetId;
use crate::consts::{DROP_ZONE_ACTIVE_BORDER, DROP_ZONE_IDLE_BORDER};

/// One entry of a clipboard payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem<F> {
    /// MIME type reported by the browser, e.g. `image/png` or `text/plain`.
    pub mime: String,
    /// The item as a file, when the browser can provide one.
    pub file: Option<F>,
}

/// A user action routed to the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerInput<F> {
    /// Pointer click on a thumbnail.
    Click(AssetId),
    /// Files released anywhere on the document.
    Drop(Vec<F>),
    /// Clipboard items pasted anywhere on the document.
    Paste(Vec<ClipboardItem<F>>),
}

/// Whether `mime` names an image type.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Keep the image files of a clipboard payload, in clipboard order.
pub fn image_files<F, I>(items: I) -> Vec<F>
where
    I: IntoIterator<Item = ClipboardItem<F>>,
{
    items
        .into_iter()
        .filter(|item| is_image_mime(&item.mime))
        .filter_map(|item| item.file)
        .collect()
}

/// Hover-highlight state of the drop zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZoneState {
    hovering: bool,
}

impl DropZoneState {
    #[must_use]
    pub fn is_hovering(self) -> bool {
        self.hovering
    }

    /// Border color matching the current state.
    #[must_use]
    pub fn border_color(self) -> &'static str {
        if self.hovering { DROP_ZONE_ACTIVE_BORDER } else { DROP_ZONE_IDLE_BORDER }
    }

    /// A drag moved over the zone. Returns the new border color when it changed.
    pub fn drag_over(&mut self) -> Option<&'static str> {
        self.set_hovering(true)
    }

    /// A `dragleave` fired. Moving onto one of the zone's own children is not
    /// leaving, so the highlight stays.
    pub fn drag_leave(&mut self, into_child: bool) -> Option<&'static str> {
        if into_child {
            return None;
        }
        self.drag_end()
    }

    /// The drag left the zone or was released. Returns the new border color when it changed.
    pub fn drag_end(&mut self) -> Option<&'static str> {
        self.set_hovering(false)
    }

    fn set_hovering(&mut self, hovering: bool) -> Option<&'static str> {
        if self.hovering == hovering {
            return None;
        }
        self.hovering = hovering;
        Some(self.border_color())
    }
}
