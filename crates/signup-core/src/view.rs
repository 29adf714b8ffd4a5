//! View model for the activity list.
//!
//! Pure functions from catalog data and the authentication flag to what the
//! UI shows. Nothing here touches the terminal, so every rendering rule is
//! testable on its own.

use crate::api::Activity;

pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Remaining capacity of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    /// `max - participants`, clamped at zero.
    pub spots_left: u32,
    /// How far the server reports the activity over capacity (usually 0).
    pub overbooked_by: u32,
}

impl Availability {
    pub fn of(activity: &Activity) -> Self {
        let taken = u32::try_from(activity.participants.len()).unwrap_or(u32::MAX);
        Self {
            spots_left: activity.max_participants.saturating_sub(taken),
            overbooked_by: taken.saturating_sub(activity.max_participants),
        }
    }

    pub fn is_overbooked(&self) -> bool {
        self.overbooked_by > 0
    }

    pub fn label(&self) -> String {
        if self.is_overbooked() {
            format!(
                "{} spots left (over capacity by {})",
                self.spots_left, self.overbooked_by
            )
        } else {
            format!("{} spots left", self.spots_left)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    /// Whether a removal control is shown for this row.
    pub removable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub availability: Availability,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity, authenticated: bool) -> Self {
        let availability = Availability::of(activity);
        if availability.is_overbooked() {
            tracing::warn!(
                activity = %activity.name,
                max = activity.max_participants,
                participants = activity.participants.len(),
                "server reports activity over capacity"
            );
        }

        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            availability,
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow {
                    email: email.clone(),
                    removable: authenticated,
                })
                .collect(),
        }
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }

    /// Plain-text rendering used by the CLI.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}\n  {}\n  Schedule: {}\n  Availability: {}\n",
            self.name,
            self.description,
            self.schedule,
            self.availability.label()
        );
        if self.has_participants() {
            out.push_str("  Participants:\n");
            for row in &self.participants {
                out.push_str("    - ");
                out.push_str(&row.email);
                if row.removable {
                    out.push_str("  [x]");
                }
                out.push('\n');
            }
        } else {
            out.push_str("  ");
            out.push_str(NO_PARTICIPANTS);
            out.push('\n');
        }
        out
    }
}

/// Builds one card per activity, in catalog order.
pub fn build_cards(activities: &[Activity], authenticated: bool) -> Vec<ActivityCard> {
    activities
        .iter()
        .map(|activity| ActivityCard::from_activity(activity, authenticated))
        .collect()
}

/// Options for the signup form's activity selector, in catalog order.
pub fn activity_options(activities: &[Activity]) -> Vec<String> {
    activities.iter().map(|a| a.name.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity {
            name: name.to_string(),
            description: format!("{name} description"),
            schedule: "Mon 3pm".to_string(),
            max_participants: max,
            participants: participants.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn test_chess_club_scenario() {
        let catalog = vec![activity("Chess Club", 10, &["a@x.com"])];
        let cards = build_cards(&catalog, false);

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].availability.label(), "9 spots left");
        assert_eq!(
            cards[0].participants,
            vec![ParticipantRow {
                email: "a@x.com".to_string(),
                removable: false,
            }]
        );
        assert_eq!(cards[0].schedule, "Mon 3pm");
    }

    #[test]
    fn test_spots_left_is_capacity_minus_participants() {
        for (max, count) in [(0, 0), (1, 0), (5, 5), (12, 3), (30, 29)] {
            let emails: Vec<String> = (0..count).map(|i| format!("s{i}@x.com")).collect();
            let refs: Vec<&str> = emails.iter().map(String::as_str).collect();
            let availability = Availability::of(&activity("A", max, &refs));
            assert_eq!(availability.spots_left, max - count);
            assert!(!availability.is_overbooked());
        }
    }

    #[test]
    fn test_overbooked_activity_clamps_to_zero() {
        let availability = Availability::of(&activity("Gym", 1, &["a@x.com", "b@x.com", "c@x.com"]));
        assert_eq!(availability.spots_left, 0);
        assert_eq!(availability.overbooked_by, 2);
        assert_eq!(availability.label(), "0 spots left (over capacity by 2)");
    }

    #[test]
    fn test_unauthenticated_never_removable() {
        let catalog = vec![
            activity("Chess Club", 10, &["a@x.com", "b@x.com"]),
            activity("Art Club", 5, &[]),
            activity("Drama", 2, &["c@x.com"]),
        ];
        let cards = build_cards(&catalog, false);
        assert!(
            cards
                .iter()
                .flat_map(|card| &card.participants)
                .all(|row| !row.removable)
        );
    }

    #[test]
    fn test_authenticated_rows_are_removable() {
        let catalog = vec![activity("Chess Club", 10, &["a@x.com", "b@x.com"])];
        let cards = build_cards(&catalog, true);
        assert!(cards[0].participants.iter().all(|row| row.removable));
    }

    #[test]
    fn test_options_follow_catalog_order() {
        let catalog = vec![activity("Drama", 2, &[]), activity("Art Club", 5, &[])];
        assert_eq!(activity_options(&catalog), vec!["Drama", "Art Club"]);
    }

    #[test]
    fn test_text_rendering() {
        let empty = ActivityCard::from_activity(&activity("Art Club", 5, &[]), false);
        assert!(empty.to_text().contains(NO_PARTICIPANTS));

        let full = ActivityCard::from_activity(&activity("Chess Club", 10, &["a@x.com"]), true);
        let text = full.to_text();
        assert!(text.contains("Availability: 9 spots left"));
        assert!(text.contains("- a@x.com  [x]"));
    }
}
