//! HTTP client for the activity sign-up service.
//!
//! - `types.rs`: wire DTOs and the `Activity` record
//! - `error.rs`: two-tier error taxonomy (transport vs server-reported)
//! - `client.rs`: `SignupClient`, one method per endpoint

mod client;
mod error;
mod types;

pub use client::{SignupClient, USER_AGENT};
pub use error::ApiError;
pub use reqwest::StatusCode;
pub use types::{Activity, LoginResponse, MessageResponse, StatusResponse};
