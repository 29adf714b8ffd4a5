use reqwest::header::COOKIE;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::ApiError;
use super::types::{Activity, ErrorBody, LoginResponse, MessageResponse, StatusResponse};
use crate::session::SessionCookie;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("signup/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around reqwest for the sign-up service endpoints.
///
/// Credentialed calls take the session token explicitly and send it as the
/// `session_token` cookie; the client itself holds no session state.
#[derive(Clone, Debug)]
pub struct SignupClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SignupClient {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `base_url` is not an absolute http(s) URL, or
    /// `Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(ApiError::InvalidUrl)?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self { http, base_url })
    }

    /// Builds `<base>/<segments...>`, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `GET /auth/status`.
    pub async fn status(&self, token: Option<&str>) -> Result<StatusResponse, ApiError> {
        let url = self.endpoint(&["auth", "status"]);
        tracing::debug!(%url, "checking auth status");
        let res = with_cookie(self.http.get(url), token)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        read_json(res).await
    }

    /// `POST /auth/login` with form-encoded credentials.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint(&["auth", "login"]);
        tracing::debug!(%url, username, "logging in");
        let res = self
            .http
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        read_json(res).await
    }

    /// `POST /auth/logout`.
    ///
    /// Any HTTP response counts as success; only transport failures error.
    pub async fn logout(&self, token: Option<&str>) -> Result<(), ApiError> {
        let url = self.endpoint(&["auth", "logout"]);
        tracing::debug!(%url, "logging out");
        let res = with_cookie(self.http.post(url), token)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        if !res.status().is_success() {
            tracing::debug!(status = %res.status(), "logout returned non-success status");
        }
        Ok(())
    }

    /// `GET /activities`, no credentials.
    pub async fn activities(&self) -> Result<Vec<Activity>, ApiError> {
        let url = self.endpoint(&["activities"]);
        tracing::debug!(%url, "fetching activities");
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let body = read_success_body(res).await?;
        Activity::parse_catalog(&body).map_err(ApiError::Decode)
    }

    /// `POST /activities/{name}/signup?email=...`.
    pub async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint(&["activities", activity, "signup"]);
        tracing::debug!(%url, email, "signing up");
        let res = with_cookie(self.http.post(url), token)
            .query(&[("email", email)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        read_json(res).await
    }

    /// `DELETE /activities/{name}/unregister?email=...`.
    pub async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: Option<&str>,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.endpoint(&["activities", activity, "unregister"]);
        tracing::debug!(%url, email, "unregistering");
        let res = with_cookie(self.http.delete(url), token)
            .query(&[("email", email)])
            .send()
            .await
            .map_err(ApiError::Transport)?;
        read_json(res).await
    }
}

fn with_cookie(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header(COOKIE, SessionCookie::request_header(token)),
        None => builder,
    }
}

/// Reads the body, turning non-2xx statuses into `ApiError::Server`.
async fn read_success_body(res: Response) -> Result<String, ApiError> {
    let status = res.status();
    let body = res.text().await.map_err(ApiError::Transport)?;
    if !status.is_success() {
        let detail = ErrorBody::parse_detail(&body);
        tracing::warn!(%status, detail = detail.as_deref().unwrap_or(""), "request rejected");
        return Err(ApiError::Server { status, detail });
    }
    Ok(body)
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let body = read_success_body(res).await?;
    serde_json::from_str(&body).map_err(ApiError::Decode)
}
