//! Signup form view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::truncate_with_ellipsis;
use crate::overlays::render_utils::InputLine;
use crate::state::{Focus, TuiState};

/// Rows taken by the form, borders included.
pub const FORM_HEIGHT: u16 = 4;

pub fn render_signup_form(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let focused = tui.focus == Focus::Form;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let title = if focused {
        " Sign Up a Student (Enter submit • ←/→ activity • Esc back) "
    } else {
        " Sign Up a Student (Tab to edit) "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let options = tui.activity_options();
    let lines = vec![
        InputLine {
            label: "Student email",
            value: &tui.form.email,
            placeholder: Some("your-student@mergington.edu"),
            focused,
            accent: Color::Cyan,
        }
        .to_line(inner.width),
        activity_line(tui.form.selected_activity(&options), focused, inner.width),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn activity_line(selected: Option<&str>, focused: bool, width: u16) -> Line<'static> {
    let label = "Activity: ";
    let arrow_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let value_width = (width as usize).saturating_sub(label.len() + 4);

    let value = match selected {
        Some(name) => Span::styled(
            truncate_with_ellipsis(name, value_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "-- Select an activity --",
            Style::default().fg(Color::DarkGray),
        ),
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled("◀ ", arrow_style),
        value,
        Span::styled(" ▶", arrow_style),
    ])
}
