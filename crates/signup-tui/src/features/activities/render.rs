//! Activity list view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use signup_core::view::{ActivityCard, LOAD_FAILED, NO_PARTICIPANTS};

use super::state::ListRow;
use crate::common::truncate_with_ellipsis;
use crate::state::{Focus, TuiState};

const SELECTED_BG: Color = Color::DarkGray;

/// Renders the bordered activity list, scrolled to keep the cursor visible.
pub fn render_activity_list(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let focused = tui.focus == Focus::List;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Activities ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (lines, selected_line) = if tui.catalog.is_loading() {
        (vec![dim_line("Loading activities…")], None)
    } else if tui.catalog.is_failed() {
        (
            vec![Line::from(Span::styled(
                LOAD_FAILED,
                Style::default().fg(Color::Red),
            ))],
            None,
        )
    } else if tui.catalog.activities().is_empty() {
        (vec![dim_line("No activities available.")], None)
    } else {
        let selected = focused
            .then(|| tui.cursor.row(tui.catalog.activities()))
            .flatten();
        card_lines(&tui.cards(), selected, inner.width)
    };

    let offset = scroll_offset(selected_line, inner.height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

/// Smallest offset that keeps `selected_line` on screen.
fn scroll_offset(selected_line: Option<usize>, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    match selected_line {
        Some(line) if line >= height => (line + 1 - height) as u16,
        _ => 0,
    }
}

fn dim_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Builds the list lines and the index of the line under the cursor.
pub fn card_lines(
    cards: &[ActivityCard],
    selected: Option<ListRow>,
    width: u16,
) -> (Vec<Line<'static>>, Option<usize>) {
    let width = width as usize;
    let mut lines = Vec::new();
    let mut selected_line = None;

    for (card_index, card) in cards.iter().enumerate() {
        let header_selected = selected == Some(ListRow::Card(card_index));
        if header_selected {
            selected_line = Some(lines.len());
        }
        let mut name_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        if header_selected {
            name_style = name_style.bg(SELECTED_BG);
        }
        lines.push(Line::from(Span::styled(
            truncate_with_ellipsis(&card.name, width),
            name_style,
        )));
        lines.push(Line::from(truncate_with_ellipsis(
            &format!("  {}", card.description),
            width,
        )));
        lines.push(labelled("Schedule", &card.schedule, Style::default(), width));

        let availability_style = if card.availability.is_overbooked() {
            Style::default().fg(Color::Red)
        } else if card.availability.spots_left == 0 {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Green)
        };
        lines.push(labelled(
            "Availability",
            &card.availability.label(),
            availability_style,
            width,
        ));

        if card.has_participants() {
            lines.push(Line::from(Span::styled(
                "  Participants:",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for (index, row) in card.participants.iter().enumerate() {
                let row_selected = selected
                    == Some(ListRow::Participant {
                        card: card_index,
                        index,
                    });
                if row_selected {
                    selected_line = Some(lines.len());
                }
                lines.push(participant_line(&row.email, row.removable, row_selected, width));
            }
        } else {
            lines.push(Line::from(Span::styled(
                format!("  {NO_PARTICIPANTS}"),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(""));
    }

    (lines, selected_line)
}

fn labelled(label: &str, value: &str, value_style: Style, width: usize) -> Line<'static> {
    let prefix = format!("  {label}: ");
    let value = truncate_with_ellipsis(value, width.saturating_sub(prefix.chars().count()));
    Line::from(vec![
        Span::styled(prefix, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(value, value_style),
    ])
}

fn participant_line(email: &str, removable: bool, selected: bool, width: usize) -> Line<'static> {
    let control = if removable { "  [d] remove" } else { "" };
    let email_width = width.saturating_sub(6 + control.chars().count());
    let mut email_style = Style::default();
    if selected {
        email_style = email_style.bg(SELECTED_BG);
    }

    let mut spans = vec![
        Span::raw("    • "),
        Span::styled(truncate_with_ellipsis(email, email_width), email_style),
    ];
    if removable {
        spans.push(Span::styled(control, Style::default().fg(Color::Red)));
    }
    Line::from(spans)
}
