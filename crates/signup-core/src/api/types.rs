use serde::{Deserialize, Serialize};

/// `GET /auth/status` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub authenticated: bool,
    #[serde(default)]
    pub username: Option<String>,
}

/// `POST /auth/login` success body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub username: String,
    pub session_token: String,
}

/// Success body of the signup/unregister endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned with non-2xx statuses.
///
/// `detail` is usually a string; anything else (e.g. a list of validation
/// errors) is treated as missing.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub(crate) fn parse_detail(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(detail) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

/// One entry of the `/activities` object, without its key.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A named, capacity-limited activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub(crate) fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Parses the catalog object, keeping the server's key order.
    pub(crate) fn parse_catalog(body: &str) -> Result<Vec<Self>, serde_json::Error> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body)?;
        map.into_iter()
            .map(|(name, value)| {
                serde_json::from_value::<ActivityDetails>(value)
                    .map(|details| Activity::from_details(name, details))
            })
            .collect()
    }
}
