//! UI event types.
//!
//! Everything the reducer reacts to: terminal input, the frame tick, and the
//! result of each network call the runtime spawned.

use crossterm::event::Event;
use signup_core::api::{Activity, ApiError, LoginResponse, MessageResponse, StatusResponse};

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives notice expiry and rendering.
    Tick,

    /// Raw terminal input.
    Terminal(Event),

    /// Result of `GET /auth/status` for the token that was sent.
    StatusChecked {
        token: Option<String>,
        result: Result<StatusResponse, ApiError>,
    },

    /// Result of `POST /auth/login`.
    LoginFinished(Result<LoginResponse, ApiError>),

    /// Result of `POST /auth/logout`.
    LogoutFinished(Result<(), ApiError>),

    /// Result of `GET /activities`.
    ActivitiesLoaded(Result<Vec<Activity>, ApiError>),

    /// Result of `POST /activities/{name}/signup`.
    SignupFinished(Result<MessageResponse, ApiError>),

    /// Result of `DELETE /activities/{name}/unregister`.
    UnregisterFinished(Result<MessageResponse, ApiError>),
}
