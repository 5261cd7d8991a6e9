//! Application state management module.
//!
//! This module contains the state wrapped around a bound form, including:
//! - Main `State` struct that applies form effects
//! - Focus tracking across fields and buttons
//! - Notification lifetime and the log pane toggle

mod focus;

pub use focus::Focus;

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{ActiveNotification, State};
