//! Activity listing.

use anyhow::Result;
use signup_core::view::{self, ActivityCard, LOAD_FAILED};

use super::Remote;

/// Prints every activity card. Participants are marked removable (`[x]`)
/// only when the stored session is confirmed by the server.
pub async fn list(remote: &Remote) -> Result<()> {
    let (session, fetched) = tokio::join!(remote.confirmed_session(), remote.client.activities());

    let activities = match fetched {
        Ok(activities) => activities,
        Err(err) => {
            tracing::warn!(error = %err, "failed to fetch activities");
            anyhow::bail!(LOAD_FAILED);
        }
    };

    let cards = view::build_cards(&activities, session.is_authenticated());
    let text = cards
        .iter()
        .map(ActivityCard::to_text)
        .collect::<Vec<_>>()
        .join("\n");
    print!("{text}");
    Ok(())
}
