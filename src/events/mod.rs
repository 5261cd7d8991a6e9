//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Submission events: handing validated forms to a server or the demo timer
//! - Terminal events: User input and terminal interactions

pub mod submission;
pub mod terminal;
