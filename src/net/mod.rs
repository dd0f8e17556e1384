//! Collaborator contracts at the edge of the picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! `submit` classifies the server's answer to an opt-in AJAX form post, and
//! `push` parses the progress events a page's socket client forwards to us.
//! Both are pure parsers; the browser glue lives in `host`.

pub mod push;
pub mod submit;
