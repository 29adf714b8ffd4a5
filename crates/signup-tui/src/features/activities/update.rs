//! Activities feature reducer.

use signup_core::api::{Activity, ApiError};

use super::state::CatalogState;
use crate::state::TuiState;

/// Replaces the catalog with a fetch result.
///
/// Cards and options are derived from the catalog on every render, so a
/// successful fetch rebuilds both from scratch.
pub fn handle_activities_loaded(tui: &mut TuiState, result: Result<Vec<Activity>, ApiError>) {
    let previous = tui
        .form
        .selected_activity(&tui.activity_options())
        .map(str::to_string);

    match result {
        Ok(activities) => {
            tracing::debug!(count = activities.len(), "activities loaded");
            tui.catalog = CatalogState::Loaded(activities);
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch activities");
            tui.catalog = CatalogState::Failed;
        }
    }

    let rows = tui.row_count();
    tui.cursor.clamp(rows);
    let options = tui.activity_options();
    tui.form.retain_selection(previous.as_deref(), &options);
}

pub fn move_cursor_up(tui: &mut TuiState) {
    tui.cursor.move_up();
}

pub fn move_cursor_down(tui: &mut TuiState) {
    let rows = tui.row_count();
    tui.cursor.move_down(rows);
}

#[cfg(test)]
mod tests {
    use signup_core::api::StatusCode;
    use signup_core::session::Session;

    use super::*;
    use crate::state::test_support::{activity, app};

    #[test]
    fn test_load_replaces_catalog() {
        let mut state = app(Session::default());
        handle_activities_loaded(
            &mut state.tui,
            Ok(vec![activity("Chess Club", 10, &["a@x.com"])]),
        );
        handle_activities_loaded(&mut state.tui, Ok(vec![activity("Drama", 5, &[])]));

        let names: Vec<_> = state.tui.cards().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Drama"]);
        assert_eq!(state.tui.activity_options(), vec!["Drama"]);
    }

    #[test]
    fn test_failure_replaces_list() {
        let mut state = app(Session::default());
        handle_activities_loaded(&mut state.tui, Ok(vec![activity("Drama", 5, &[])]));
        handle_activities_loaded(
            &mut state.tui,
            Err(ApiError::Server {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: None,
            }),
        );

        assert!(state.tui.catalog.is_failed());
        assert!(state.tui.cards().is_empty());
    }

    #[test]
    fn test_reload_keeps_cursor_in_range() {
        let mut state = app(Session::default());
        handle_activities_loaded(
            &mut state.tui,
            Ok(vec![activity("Chess Club", 10, &["a@x.com", "b@x.com"])]),
        );
        move_cursor_down(&mut state.tui);
        move_cursor_down(&mut state.tui);
        assert_eq!(state.tui.cursor.selected, 2);

        handle_activities_loaded(
            &mut state.tui,
            Ok(vec![activity("Chess Club", 10, &["a@x.com"])]),
        );
        assert_eq!(state.tui.cursor.selected, 1);
    }

    #[test]
    fn test_reload_keeps_selected_option() {
        let mut state = app(Session::default());
        handle_activities_loaded(
            &mut state.tui,
            Ok(vec![activity("Chess Club", 10, &[]), activity("Drama", 5, &[])]),
        );
        state.tui.form.selected = 1;

        handle_activities_loaded(
            &mut state.tui,
            Ok(vec![activity("Art Club", 8, &[]), activity("Drama", 5, &[])]),
        );
        let options = state.tui.activity_options();
        assert_eq!(state.tui.form.selected_activity(&options), Some("Drama"));
    }
}
