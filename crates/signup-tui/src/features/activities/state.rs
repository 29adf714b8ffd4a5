//! Activity catalog and list cursor state.

use signup_core::api::Activity;

/// What the activity list currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogState {
    /// First fetch still in flight.
    #[default]
    Loading,
    /// Last successful fetch, in server order.
    Loaded(Vec<Activity>),
    /// Last fetch failed; the list shows the failure line instead.
    Failed,
}

impl CatalogState {
    /// Activities to render; empty unless loaded.
    pub fn activities(&self) -> &[Activity] {
        match self {
            CatalogState::Loaded(activities) => activities,
            CatalogState::Loading | CatalogState::Failed => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogState::Failed)
    }
}

/// One selectable line of the activity list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    /// Card header for the activity at this index.
    Card(usize),
    /// Participant `index` of card `card`.
    Participant { card: usize, index: usize },
}

/// Flattens the catalog into cursor rows: each card followed by its participants.
pub fn list_rows(activities: &[Activity]) -> Vec<ListRow> {
    let mut rows = Vec::new();
    for (card, activity) in activities.iter().enumerate() {
        rows.push(ListRow::Card(card));
        rows.extend(
            (0..activity.participants.len()).map(|index| ListRow::Participant { card, index }),
        );
    }
    rows
}

/// Cursor over [`list_rows`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
}

impl ListCursor {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    /// Keeps the cursor in range after the catalog changed.
    pub fn clamp(&mut self, row_count: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
    }

    pub fn row(&self, activities: &[Activity]) -> Option<ListRow> {
        list_rows(activities).get(self.selected).copied()
    }

    /// The `(activity, email)` under the cursor, if it is on a participant row.
    pub fn selected_participant<'a>(
        &self,
        activities: &'a [Activity],
    ) -> Option<(&'a str, &'a str)> {
        match self.row(activities)? {
            ListRow::Participant { card, index } => {
                let activity = activities.get(card)?;
                let email = activity.participants.get(index)?;
                Some((activity.name.as_str(), email.as_str()))
            }
            ListRow::Card(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: String::new(),
            schedule: String::new(),
            max_participants: 10,
            participants: participants.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_rows_interleave_cards_and_participants() {
        let catalog = vec![
            activity("Chess Club", &["a@x.com", "b@x.com"]),
            activity("Art Club", &[]),
        ];
        assert_eq!(
            list_rows(&catalog),
            vec![
                ListRow::Card(0),
                ListRow::Participant { card: 0, index: 0 },
                ListRow::Participant { card: 0, index: 1 },
                ListRow::Card(1),
            ]
        );
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = ListCursor::default();
        cursor.move_up();
        assert_eq!(cursor.selected, 0);
        cursor.move_down(2);
        cursor.move_down(2);
        assert_eq!(cursor.selected, 1);

        cursor.selected = 7;
        cursor.clamp(3);
        assert_eq!(cursor.selected, 2);
        cursor.clamp(0);
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_selected_participant() {
        let catalog = vec![activity("Chess Club", &["a@x.com"])];
        let mut cursor = ListCursor::default();
        assert_eq!(cursor.selected_participant(&catalog), None);
        cursor.move_down(2);
        assert_eq!(
            cursor.selected_participant(&catalog),
            Some(("Chess Club", "a@x.com"))
        );
    }
}
