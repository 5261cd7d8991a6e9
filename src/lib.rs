//! Support-case and lead-capture forms for the terminal.
//!
//! The `form` module holds everything that decides what a form does: field
//! validation, the submission gate, draft persistence and dynamic fields.
//! The remaining modules wire it to a terminal, local storage and a
//! submission worker.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod form;
pub mod logger;
pub mod state;
pub mod storage;
pub mod ui;
