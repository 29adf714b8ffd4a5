//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use signup_core::notice::NoticeKind;

use crate::common::truncate_with_ellipsis;
use crate::overlays::OverlayExt;
use crate::overlays::render_utils::{InputHint, hints_line};
use crate::state::{AppState, Focus, TuiState};
use crate::{activities, auth, registration};

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let authenticated = state.session.is_authenticated();

    let top_height = if authenticated {
        registration::FORM_HEIGHT
    } else {
        1
    };
    let [header, top, list, notice, hints] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(top_height),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(auth::header_line(state, header.width)),
        header,
    );
    if authenticated {
        registration::render_signup_form(frame, top, state);
    } else {
        auth::render_auth_notice(frame, top);
    }
    activities::render_activity_list(frame, list, state);
    render_notice(frame, notice, state);
    frame.render_widget(Paragraph::new(key_hints(state)), hints);

    app.overlay.render(frame, area);
}

fn render_notice(frame: &mut Frame, area: Rect, state: &TuiState) {
    let Some(notice) = state.notice.current() else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let line = Line::from(Span::styled(
        truncate_with_ellipsis(&notice.text, area.width as usize),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(state: &TuiState) -> Line<'static> {
    let login = if state.session.is_authenticated() {
        "logout"
    } else {
        "login"
    };
    let mut hints = vec![
        InputHint::new("↑/↓", "move"),
        InputHint::new("L", login),
        InputHint::new("r", "reload"),
        InputHint::new("q", "quit"),
    ];
    if state.session.is_authenticated() && state.focus == Focus::List {
        hints.insert(1, InputHint::new("Tab", "sign up"));
        hints.insert(2, InputHint::new("d", "unregister"));
    }
    hints_line(&hints, Color::Cyan)
}
