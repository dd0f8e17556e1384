//! Browser host for the image picker.
//!
//! ARCHITECTURE
//! ============
//! [`PickerCore`] owns selection semantics. This host binds the grid, file
//! input, drop zone and submit button, translates DOM events into
//! [`PickerInput`]s and applies the returned [`Action`]s. Every callback holds
//! a `Weak` handle and releases its borrow of the core before applying
//! actions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_file::ObjectUrl;
use wasm_bindgen::JsCast;
use web_sys::{
    ClipboardEvent, DataTransfer, Document, DragEvent, Element, Event, EventTarget, File, HtmlButtonElement,
    HtmlElement, HtmlImageElement, HtmlInputElement, MouseEvent, Node,
};

use crate::asset::AssetId;
use crate::config::PickerConfig;
use crate::consts::{REMOTE_FIELD_NAME, SELECTED_CLASS};
use crate::engine::{Action, PickerCore};
use crate::error::PickerError;
use crate::host::dom::{document, element_by_id, log_js_err, optional_element_by_id};
use crate::input::{ClipboardItem, DropZoneState, PickerInput};

/// One rendered thumbnail: the checkbox carrying its state and the element
/// that shows the selected highlight.
struct Tile {
    checkbox: HtmlInputElement,
    marker: Element,
}

impl Tile {
    fn set_checked(&self, checked: bool) {
        self.checkbox.set_checked(checked);
        log_js_err("toggle selected class", self.marker.class_list().toggle_with_force(SELECTED_CLASS, checked));
    }
}

struct Inner {
    core: PickerCore<File>,
    grid: Element,
    submit: HtmlButtonElement,
    file_input: HtmlInputElement,
    tiles: HashMap<AssetId, Tile>,
    drop_zone: DropZoneState,
    previews: Vec<ObjectUrl>,
    tile_listeners: Vec<EventListener>,
}

/// Mounted picker. Dropping it removes every listener it installed.
pub struct PickerHost {
    _inner: Rc<RefCell<Inner>>,
    _listeners: Vec<EventListener>,
}

impl PickerHost {
    /// Bind to the page. Returns `Ok(None)` when the page has no grid.
    ///
    /// # Errors
    ///
    /// Fails when the grid exists but the submit button or file input is
    /// missing, or when the grid cannot be scanned.
    pub fn mount(config: &PickerConfig) -> Result<Option<Self>, PickerError> {
        let doc = document()?;
        let ids = &config.ids;
        let Some(grid) = optional_element_by_id::<Element>(&doc, &ids.grid)? else {
            log::debug!("no #{} on this page; picker not mounted", ids.grid);
            return Ok(None);
        };
        let submit: HtmlButtonElement = element_by_id(&doc, &ids.submit)?;
        let file_input: HtmlInputElement = element_by_id(&doc, &ids.file_input)?;
        let drop_zone: Option<HtmlElement> = optional_element_by_id(&doc, &ids.drop_zone)?;

        let inner = Rc::new(RefCell::new(Inner {
            core: PickerCore::new(config.capacity),
            grid: grid.clone(),
            submit,
            file_input,
            tiles: HashMap::new(),
            drop_zone: DropZoneState::default(),
            previews: Vec::new(),
            tile_listeners: Vec::new(),
        }));

        seed_remote_tiles(&inner, &grid)?;

        let mut listeners = document_listeners(&inner, &doc);
        if let Some(zone) = drop_zone {
            listeners.extend(drop_zone_listeners(&inner, &zone));
        }

        let actions = inner.borrow_mut().core.mount();
        apply(&inner, actions);
        log::info!(
            "picker mounted: {} candidate(s), {} checked, capacity {}",
            inner.borrow().tiles.len(),
            inner.borrow().core.count(),
            config.capacity
        );

        Ok(Some(Self { _inner: inner, _listeners: listeners }))
    }
}

// =============================================================
// Setup
// =============================================================

fn seed_remote_tiles(inner: &Rc<RefCell<Inner>>, grid: &Element) -> Result<(), PickerError> {
    let labels = grid.query_selector_all("label")?;
    let selector = format!(r#"input[name="{REMOTE_FIELD_NAME}"]"#);
    for index in 0..labels.length() {
        let Some(node) = labels.get(index) else { continue };
        let Ok(label) = node.dyn_into::<Element>() else { continue };
        let Some(checkbox) = label.query_selector(&selector)? else {
            log::debug!("grid label without a candidate checkbox skipped");
            continue;
        };
        let Ok(checkbox) = checkbox.dyn_into::<HtmlInputElement>() else { continue };
        let marker = label.query_selector("img")?.unwrap_or_else(|| label.clone());

        let (id, checked) = inner.borrow_mut().core.seed_remote(checkbox.value(), checkbox.checked());
        let tile = Tile { checkbox, marker };
        tile.set_checked(checked);

        let listener = click_listener(inner, &label, id);
        let mut state = inner.borrow_mut();
        state.tiles.insert(id, tile);
        state.tile_listeners.push(listener);
    }
    Ok(())
}

fn click_listener(inner: &Rc<RefCell<Inner>>, target: &EventTarget, id: AssetId) -> EventListener {
    let weak = Rc::downgrade(inner);
    EventListener::new_with_options(target, "click", EventListenerOptions::enable_prevent_default(), move |event| {
        // The store drives the checkbox; native label activation would flip it twice.
        event.prevent_default();
        dispatch(&weak, PickerInput::Click(id));
    })
}

fn document_listeners(inner: &Rc<RefCell<Inner>>, doc: &Document) -> Vec<EventListener> {
    let dragover =
        EventListener::new_with_options(doc, "dragover", EventListenerOptions::enable_prevent_default(), |event| {
            event.prevent_default();
        });

    let weak = Rc::downgrade(inner);
    let drop = EventListener::new_with_options(doc, "drop", EventListenerOptions::enable_prevent_default(), move |event| {
        event.prevent_default();
        let Some(transfer) = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer) else {
            return;
        };
        let files = dropped_files(&transfer);
        if !files.is_empty() {
            dispatch(&weak, PickerInput::Drop(files));
        }
    });

    let weak = Rc::downgrade(inner);
    let paste = EventListener::new(doc, "paste", move |event| {
        let Some(transfer) = event.dyn_ref::<ClipboardEvent>().and_then(ClipboardEvent::clipboard_data) else {
            return;
        };
        let items = clipboard_items(&transfer);
        if !items.is_empty() {
            dispatch(&weak, PickerInput::Paste(items));
        }
    });

    vec![dragover, drop, paste]
}

fn drop_zone_listeners(inner: &Rc<RefCell<Inner>>, zone: &HtmlElement) -> Vec<EventListener> {
    let hover = |name: &'static str| {
        let weak = Rc::downgrade(inner);
        let styled = zone.clone();
        EventListener::new(zone, name, move |event| {
            let Some(inner) = weak.upgrade() else { return };
            let color = {
                let mut state = inner.borrow_mut();
                match name {
                    "dragover" => state.drop_zone.drag_over(),
                    "dragleave" => state.drop_zone.drag_leave(leaves_into(&styled, event)),
                    _ => state.drop_zone.drag_end(),
                }
            };
            if let Some(color) = color {
                log_js_err("drop zone border", styled.style().set_property("border-color", color));
            }
        })
    };
    vec![hover("dragover"), hover("dragleave"), hover("drop")]
}

/// Whether a `dragleave` on `zone` moved onto one of its descendants.
fn leaves_into(zone: &HtmlElement, event: &Event) -> bool {
    event
        .dyn_ref::<MouseEvent>()
        .and_then(MouseEvent::related_target)
        .is_some_and(|target| target.dyn_ref::<Node>().is_some_and(|node| zone.contains(Some(node))))
}

// =============================================================
// Event payloads
// =============================================================

fn dropped_files(transfer: &DataTransfer) -> Vec<File> {
    let Some(list) = transfer.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

fn clipboard_items(transfer: &DataTransfer) -> Vec<ClipboardItem<File>> {
    let items = transfer.items();
    (0..items.length())
        .filter_map(|index| items.get(index))
        .map(|item| {
            let file = match item.get_as_file() {
                Ok(file) => file,
                Err(e) => {
                    log::warn!("clipboard item unreadable: {}", PickerError::from(e));
                    None
                }
            };
            ClipboardItem { mime: item.type_(), file }
        })
        .collect()
}

// =============================================================
// Applying actions
// =============================================================

fn dispatch(weak: &Weak<RefCell<Inner>>, input: PickerInput<File>) {
    let Some(inner) = weak.upgrade() else { return };
    let actions = inner.borrow_mut().core.handle(input);
    apply(&inner, actions);
}

fn apply(inner: &Rc<RefCell<Inner>>, actions: Vec<Action<File>>) {
    for action in actions {
        match action {
            Action::SetChecked { id, checked } => {
                if let Some(tile) = inner.borrow().tiles.get(&id) {
                    tile.set_checked(checked);
                }
            }
            Action::ShowLocal { id, file } => {
                if let Err(e) = show_local(inner, id, &file) {
                    log::error!("preview for '{}' failed: {e}", file.name());
                }
            }
            Action::SyncFiles(files) => {
                if let Err(e) = sync_files(&inner.borrow().file_input, &files) {
                    log::error!("file input sync failed: {e}");
                }
            }
            Action::SetSubmitDisabled(disabled) => inner.borrow().submit.set_disabled(disabled),
            Action::SubmitForm => submit_form(&inner.borrow().submit),
        }
    }
}

fn show_local(inner: &Rc<RefCell<Inner>>, id: AssetId, file: &File) -> Result<(), PickerError> {
    let doc = document()?;
    let preview = ObjectUrl::from(gloo_file::File::from(file.clone()));

    let label = doc.create_element("label")?;
    let checkbox: HtmlInputElement = create(&doc, "input")?;
    checkbox.set_type("checkbox");
    checkbox.set_hidden(true);
    let img: HtmlImageElement = create(&doc, "img")?;
    img.set_src(&preview);
    img.set_alt("");
    label.append_child(&checkbox)?;
    label.append_child(&img)?;

    let tile = Tile { checkbox, marker: img.into() };
    tile.set_checked(true);
    let listener = click_listener(inner, &label, id);

    let mut state = inner.borrow_mut();
    let first = state.grid.first_child();
    state.grid.insert_before(&label, first.as_ref())?;
    state.tiles.insert(id, tile);
    state.previews.push(preview);
    state.tile_listeners.push(listener);
    Ok(())
}

fn create<T: JsCast>(doc: &Document, tag: &str) -> Result<T, PickerError> {
    doc.create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| PickerError::Js(format!("created <{tag}> has an unexpected type")))
}

fn sync_files(input: &HtmlInputElement, files: &[File]) -> Result<(), PickerError> {
    let transfer = DataTransfer::new()?;
    let items = transfer.items();
    for file in files {
        items.add_with_file(file)?;
    }
    input.set_files(transfer.files().as_ref());
    Ok(())
}

fn submit_form(submit: &HtmlButtonElement) {
    let Some(form) = submit.form() else {
        log::warn!("selection full but the submit button has no form");
        return;
    };
    log::info!("selection full; submitting");
    log_js_err("auto-submit", form.submit());
}
