//! User-facing message text shared by the CLI and the TUI.

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const LOGGED_OUT: &str = "Logged out successfully";

pub const SIGNUP_GUARD: &str = "You must be logged in as a teacher to register students.";
pub const UNREGISTER_GUARD: &str = "You must be logged in as a teacher to unregister students.";
/// Shown when a failed registration response carries no `detail`.
pub const SERVER_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
