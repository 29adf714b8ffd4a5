//! Registration feature slice: signup form and participant removal.

mod render;
mod state;
mod update;

pub use render::{FORM_HEIGHT, render_signup_form};
pub use state::SignupForm;
pub use update::{
    ACTIVITY_REQUIRED, EMAIL_REQUIRED, SERVER_FALLBACK, SIGNUP_FAILED, SIGNUP_GUARD,
    UNREGISTER_FAILED, UNREGISTER_GUARD, focus_form, handle_form_key, handle_form_paste,
    handle_signup_result, handle_unregister_result, request_unregister, submit_signup,
};
