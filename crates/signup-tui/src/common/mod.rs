//! Shared TUI helpers.

pub mod text;

pub use text::{mask, truncate_start_with_ellipsis, truncate_with_ellipsis};
