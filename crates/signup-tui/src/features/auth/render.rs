//! Auth feature view.
//!
//! Header line, the unauthenticated notice and the login overlay.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::{mask, truncate_with_ellipsis};
use crate::overlays::render_utils::{
    InputHint, InputLine, calculate_overlay_area, hints_line, inner_area, render_overlay_container,
};
use crate::overlays::{LoginField, LoginState};
use crate::state::TuiState;

pub const AUTH_NOTICE: &str = "Teachers: log in to register or unregister students.";

/// Title and server on the left, session status and the login/logout key on the right.
pub fn header_line(tui: &TuiState, width: u16) -> Line<'static> {
    let title = "School Activities";
    let status = if tui.session.is_authenticated() {
        format!("Logged in as {}  [L]ogout", tui.session.display_name())
    } else {
        "[L]ogin".to_string()
    };

    let server = format!("  {}", tui.base_url);

    let used = title.chars().count() + server.chars().count() + status.chars().count();
    let gap = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(server, Style::default().fg(Color::DarkGray)),
        Span::raw(" ".repeat(gap)),
        Span::styled(status, Style::default().fg(Color::Yellow)),
    ])
}

pub fn render_auth_notice(frame: &mut Frame, area: Rect) {
    let line = Line::from(Span::styled(
        truncate_with_ellipsis(AUTH_NOTICE, area.width as usize),
        Style::default().fg(Color::Yellow),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Renders the login overlay.
pub fn render_login_overlay(frame: &mut Frame, state: &LoginState, area: Rect) {
    let popup = calculate_overlay_area(area, 56, 10);
    render_overlay_container(frame, popup, "Teacher Login", Color::Cyan);

    let inner = inner_area(popup);
    frame.render_widget(Paragraph::new(login_lines(state, inner.width)), inner);
}

fn login_lines(state: &LoginState, width: u16) -> Vec<Line<'static>> {
    let masked = mask(&state.password);
    let username = InputLine {
        label: "Username",
        value: &state.username,
        placeholder: None,
        focused: state.field == LoginField::Username,
        accent: Color::Cyan,
    };
    let password = InputLine {
        label: "Password",
        value: &masked,
        placeholder: None,
        focused: state.field == LoginField::Password,
        accent: Color::Cyan,
    };

    let status = if state.pending {
        Line::from(Span::styled(
            "Logging in…",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(error) = &state.error {
        Line::from(Span::styled(
            truncate_with_ellipsis(error, width as usize),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::from("")
    };

    let hints = [
        InputHint::new("Tab", "switch field"),
        InputHint::new("Enter", "log in"),
        InputHint::new("Esc", "cancel"),
    ];

    vec![
        Line::from(""),
        username.to_line(width),
        password.to_line(width),
        Line::from(""),
        status,
        Line::from(""),
        hints_line(&hints, Color::Cyan),
    ]
}

#[cfg(test)]
mod tests {
    use signup_core::session::Session;

    use super::*;
    use crate::state::test_support::app;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_header_shows_login_key_when_logged_out() {
        let state = app(Session::default());
        let header = text(&header_line(&state.tui, 80));
        assert!(header.ends_with("[L]ogin"));
        assert!(!header.contains("Logged in as"));
    }

    #[test]
    fn test_header_shows_username_when_logged_in() {
        let state = app(Session::logged_in("teacher1", "tok"));
        let header = text(&header_line(&state.tui, 80));
        assert!(header.contains("Logged in as teacher1"));
    }

    #[test]
    fn test_password_is_masked() {
        let state = LoginState {
            username: "teacher1".to_string(),
            password: "hunter2".to_string(),
            field: LoginField::Password,
            ..Default::default()
        };
        let lines: Vec<String> = login_lines(&state, 50).iter().map(text).collect();
        assert!(lines.iter().all(|line| !line.contains("hunter2")));
        assert!(lines.iter().any(|line| line.contains("•••••••")));
    }
}
