//! Auth feature slice: session status, login and logout.

mod render;
mod update;

pub use render::{AUTH_NOTICE, header_line, render_auth_notice, render_login_overlay};
pub use update::{
    INVALID_CREDENTIALS, LOGGED_OUT, LOGIN_FAILED, LOGIN_SUCCESS, LoginOverlayAction,
    check_status, handle_login_result, handle_logout_result, handle_status_result, start_logout,
};
