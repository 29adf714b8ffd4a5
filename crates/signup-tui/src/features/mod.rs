//! Feature slices for the TUI (state/update/render per slice).

pub mod activities;
pub mod auth;
pub mod registration;
