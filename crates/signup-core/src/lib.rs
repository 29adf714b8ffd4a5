//! Core library for the activity sign-up client (session, API, view model, config).

pub mod api;
pub mod config;
pub mod cookie;
pub mod logging;
pub mod messages;
pub mod notice;
pub mod session;
pub mod view;
