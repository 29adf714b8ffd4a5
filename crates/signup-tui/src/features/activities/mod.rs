//! Activities feature slice: catalog state, list cursor and card rendering.

mod render;
mod state;
mod update;

pub use render::{card_lines, render_activity_list};
pub use state::{CatalogState, ListCursor, ListRow, list_rows};
pub use update::{handle_activities_loaded, move_cursor_down, move_cursor_up};
