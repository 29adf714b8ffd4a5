use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::common::truncate_start_with_ellipsis;

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Clears the background and draws the overlay border and title.
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Area inside the border, with one column of horizontal padding.
pub fn inner_area(popup: Rect) -> Rect {
    Rect::new(
        popup.x + 2,
        popup.y + 1,
        popup.width.saturating_sub(4),
        popup.height.saturating_sub(2),
    )
}

pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Builds a centered "key action • key action" hint line.
pub fn hints_line(hints: &[InputHint<'_>], highlight_color: Color) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            hint.key.to_string(),
            Style::default().fg(highlight_color),
        ));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans).alignment(Alignment::Center)
}

/// Renders the hint line on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint<'_>], color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    frame.render_widget(Paragraph::new(hints_line(hints, color)), hints_area);
}

/// A labelled single-line input: "Label: value█".
pub struct InputLine<'a> {
    pub label: &'a str,
    /// Text to display (already masked for secrets).
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub focused: bool,
    pub accent: Color,
}

impl InputLine<'_> {
    /// Builds the line for a row `width` columns wide.
    pub fn to_line(&self, width: u16) -> Line<'static> {
        let label_width = self.label.chars().count() + 2;
        let max_text = (width as usize).saturating_sub(label_width + 1);
        let label_style = if self.focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::styled(format!("{}: ", self.label), label_style)];
        if self.value.is_empty() {
            if self.focused {
                spans.push(Span::styled("█", Style::default().fg(self.accent)));
            }
            if let Some(placeholder) = self.placeholder {
                spans.push(Span::styled(
                    truncate_start_with_ellipsis(placeholder, max_text),
                    Style::default().fg(Color::DarkGray),
                ));
            }
        } else {
            spans.push(Span::styled(
                truncate_start_with_ellipsis(self.value, max_text),
                Style::default().fg(Color::White),
            ));
            if self.focused {
                spans.push(Span::styled("█", Style::default().fg(self.accent)));
            }
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_area_is_centered() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(calculate_overlay_area(area, 50, 10), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_overlay_area_shrinks_to_fit() {
        let area = Rect::new(0, 0, 30, 8);
        let popup = calculate_overlay_area(area, 50, 10);
        assert_eq!(popup.width, 26);
        assert_eq!(popup.height, 6);
    }
}
