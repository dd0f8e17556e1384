//! Bounded asset picker for the note-building pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. Users pick
//! up to a fixed number of images from server-rendered candidates, files
//! dropped or pasted onto the page, and may attach one microphone recording.
//! The selection rules, recording state machine and collaborator payloads are
//! plain Rust and tested natively; the [`host`] module (feature `hydrate`)
//! only wires DOM events to them and applies the returned actions.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::PickerCore`] routing inputs to DOM actions |
//! | [`store`] | Bounded asset store and pending file list |
//! | [`asset`] | Asset ids and remote/local sources |
//! | [`input`] | Click, drop and paste inputs; drop-zone hover state |
//! | [`view`] | Submit enablement and auto-submit at capacity |
//! | [`recorder`] | Record button state machine |
//! | [`net`] | AJAX submit responses and push events |
//! | [`config`] | `data-picker-*` configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Element ids, labels, classes and messages |

pub mod asset;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
#[cfg(feature = "hydrate")]
pub mod host;
pub mod input;
pub mod net;
pub mod recorder;
pub mod store;
pub mod view;
