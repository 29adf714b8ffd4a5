//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signup_core::notice::Notice;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{self, LoginState, Overlay};
use crate::state::{AppState, Focus};
use crate::{activities, auth, registration};

/// Effects to run once at launch: confirm the stored session and load the
/// catalog, concurrently.
pub fn startup(app: &AppState) -> Vec<UiEffect> {
    vec![auth::check_status(&app.tui), UiEffect::FetchActivities]
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.notice.expire(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::StatusChecked { token, result } => {
            auth::handle_status_result(&mut app.tui, token, result)
        }
        UiEvent::LoginFinished(result) => {
            let (effects, action) = auth::handle_login_result(&mut app.tui, result);
            match action {
                auth::LoginOverlayAction::Close => {
                    app.overlay = None;
                }
                auth::LoginOverlayAction::ShowError(message) => {
                    match app.overlay.as_mut().and_then(Overlay::as_login_mut) {
                        Some(login) => login.fail(message),
                        // The form was dismissed while the request ran.
                        None => app.tui.show_login_notice(Notice::error(message)),
                    }
                }
            }
            effects
        }
        UiEvent::LogoutFinished(result) => auth::handle_logout_result(&mut app.tui, result),
        UiEvent::ActivitiesLoaded(result) => {
            activities::handle_activities_loaded(&mut app.tui, result);
            vec![]
        }
        UiEvent::SignupFinished(result) => {
            registration::handle_signup_result(&mut app.tui, result)
        }
        UiEvent::UnregisterFinished(result) => {
            registration::handle_unregister_result(&mut app.tui, result)
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if let Some(overlay) = app.overlay.as_mut() {
                overlay.handle_paste(&text);
            } else if app.tui.focus == Focus::Form {
                registration::handle_form_paste(&mut app.tui, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(update) = overlays::handle_overlay_key(&mut app.overlay, key) {
        return update.effects;
    }

    match app.tui.focus {
        Focus::Form => registration::handle_form_key(&mut app.tui, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Char('r') => vec![UiEffect::FetchActivities],
        KeyCode::Char('l' | 'L') => {
            if app.tui.session.is_authenticated() {
                auth::start_logout(&app.tui)
            } else {
                app.overlay = Some(Overlay::Login(LoginState::open()));
                vec![]
            }
        }
        KeyCode::Tab | KeyCode::Char('s') => {
            registration::focus_form(&mut app.tui);
            vec![]
        }
        KeyCode::Up | KeyCode::Char('k') => {
            activities::move_cursor_up(&mut app.tui);
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            activities::move_cursor_down(&mut app.tui);
            vec![]
        }
        KeyCode::Char('d') | KeyCode::Delete => registration::request_unregister(&mut app.tui),
        _ => vec![],
    }
}
