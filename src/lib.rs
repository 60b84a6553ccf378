//! Weather lookup TUI
//!
//! Current conditions for the detected location or a typed-in city, driven
//! by a tui-dispatch store.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod geo;
pub mod reducer;
pub mod state;
