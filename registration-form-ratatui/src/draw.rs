//! Rendering of a [`FormView`] into a ratatui frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
};
use registration::SubmissionState;

use crate::field::{FieldKind, FormField};
use crate::{FormView, Theme};

/// Blank rows between two fields.
const FIELD_SPACING: u16 = 1;

const FORM_HELP: &str =
    "Tab: Next  ↑/↓: Navigate  Space/Enter: Select  F10: Submit  Esc: Quit";
const CONFIRMATION_HELP: &str = "Enter: New registration  Esc: Quit";

/// Draw the whole screen: the form, or the confirmation after a successful
/// submission.
pub fn draw(frame: &mut Frame, view: &mut FormView) {
    if view.state() == SubmissionState::Success {
        draw_confirmation(frame, view);
    } else {
        draw_form(frame, view);
    }
}

fn title_widget<'a>(view: &FormView, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(view.title.clone())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        )
}

/// Heading line plus its bottom border.
const TITLE_HEIGHT: u16 = 2;

fn draw_confirmation(frame: &mut Frame, view: &FormView) {
    let theme = &view.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(title_widget(view, theme), chunks[0]);

    let confirmation = Paragraph::new(view.confirmation.as_str())
        .style(
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(theme.success)));
    frame.render_widget(confirmation, chunks[1]);

    let help = Paragraph::new(CONFIRMATION_HELP).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[2]);
}

fn draw_form(frame: &mut Frame, view: &mut FormView) {
    let theme = view.theme.clone();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(1), // Banner
            Constraint::Min(5),    // Fields
            Constraint::Length(3), // Submit button
            Constraint::Length(1), // Help bar
        ])
        .split(frame.area());

    frame.render_widget(title_widget(view, &theme), chunks[0]);

    if let Some(banner) = view.banner() {
        let color = if view.state() == SubmissionState::Error {
            theme.error
        } else {
            theme.highlight
        };
        let banner = Paragraph::new(banner).style(
            Style::default()
                .fg(color)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(banner, chunks[1]);
    }

    // Reserve the rightmost column for the scrollbar
    let form_area = chunks[2];
    let content_width = form_area.width.saturating_sub(2);
    let viewport_height = form_area.height;

    adjust_scroll(view, viewport_height);
    // Inside the field borders
    let text_width = content_width.saturating_sub(2);
    for field in &mut view.fields {
        field.scroll_to_cursor(text_width);
    }
    let total_height = total_content_height(view);
    let scroll_offset = view.scroll_offset;

    let mut virtual_y: u16 = 0;
    for (idx, field) in view.fields.iter().enumerate() {
        let spacing = if idx == 0 { 0 } else { FIELD_SPACING };
        let height = field_height(field);
        let field_top = virtual_y + spacing;
        virtual_y = field_top + height;

        // Fields clipped at the top are skipped, they look broken
        if field_top < scroll_offset {
            continue;
        }
        if field_top >= scroll_offset + viewport_height {
            break;
        }

        let visible_top = field_top - scroll_offset;
        let visible_height = height.min(viewport_height - visible_top);
        let field_area = Rect {
            x: form_area.x + 1,
            y: form_area.y + visible_top,
            width: content_width,
            height: visible_height,
        };
        let is_focused = !view.submit_focused && idx == view.focused_idx;
        let error = view.visible_error(field);
        draw_field(frame, field, error.as_deref(), field_area, is_focused, &theme);
    }

    if total_height > viewport_height {
        let scrollbar_area = Rect {
            x: form_area.x + form_area.width.saturating_sub(1),
            y: form_area.y,
            width: 1,
            height: viewport_height,
        };

        let mut scrollbar_state = ScrollbarState::new(total_height as usize)
            .position(scroll_offset as usize)
            .viewport_content_length(viewport_height as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    let submitting = view.state() == SubmissionState::Submitting;
    let submit_style = if view.submit_focused && !submitting {
        Style::default()
            .fg(theme.text)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD)
    } else if submitting {
        Style::default().fg(theme.placeholder)
    } else {
        Style::default()
            .fg(theme.primary)
            .add_modifier(Modifier::BOLD)
    };
    let submit_text = match (submitting, view.submit_focused) {
        (true, _) => "Submitting...",
        (false, true) => "[ Submit ]",
        (false, false) => "Submit",
    };
    let submit_button = Paragraph::new(submit_text)
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(if view.submit_focused {
                    theme.primary
                } else {
                    theme.border
                })),
        );
    frame.render_widget(submit_button, chunks[3]);

    let help = Paragraph::new(FORM_HELP).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[4]);
}

fn field_height(field: &FormField) -> u16 {
    match &field.kind {
        FieldKind::Text { .. } => 3,
        FieldKind::Choice { options, .. } => 2 + options.len() as u16,
    }
}

/// Top row of a field in the scrolled content, spacing included.
fn field_y_position(view: &FormView, target_idx: usize) -> u16 {
    view.fields
        .iter()
        .take(target_idx)
        .map(|f| field_height(f) + FIELD_SPACING)
        .sum()
}

fn total_content_height(view: &FormView) -> u16 {
    let fields: u16 = view.fields.iter().map(field_height).sum();
    fields + FIELD_SPACING * (view.fields.len().saturating_sub(1) as u16)
}

/// Scroll so that the focused field is fully visible.
fn adjust_scroll(view: &mut FormView, viewport_height: u16) {
    if view.submit_focused {
        let bottom = total_content_height(view);
        view.scroll_offset = bottom.saturating_sub(viewport_height);
        return;
    }
    let Some(focused) = view.fields.get(view.focused_idx) else {
        return;
    };
    let field_top = field_y_position(view, view.focused_idx);
    let field_bottom = field_top + field_height(focused);

    if field_top < view.scroll_offset {
        view.scroll_offset = field_top;
    }
    if field_bottom > view.scroll_offset + viewport_height {
        view.scroll_offset = field_bottom.saturating_sub(viewport_height);
    }
}

fn draw_field(
    frame: &mut Frame,
    field: &FormField,
    error: Option<&str>,
    area: Rect,
    is_focused: bool,
    theme: &Theme,
) {
    let border_color = if error.is_some() {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    let title = match &field.kind {
        FieldKind::Choice {
            selected: None,
            placeholder: Some(placeholder),
            ..
        } => placeholder.as_str(),
        _ => field.label.as_str(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &field.kind {
        FieldKind::Text { placeholder } => {
            let (visible, cursor_col) = field.visible_text();
            let text = match placeholder {
                Some(placeholder) if field.value.is_empty() => {
                    Paragraph::new(placeholder.as_str()).style(Style::default().fg(theme.placeholder))
                }
                _ => Paragraph::new(visible).style(Style::default().fg(theme.text)),
            };
            frame.render_widget(text, inner);

            if is_focused {
                let cursor_x = inner.x.saturating_add(cursor_col);
                if cursor_x < inner.x + inner.width {
                    frame.set_cursor_position((cursor_x, inner.y));
                }
            }
        }
        FieldKind::Choice {
            options,
            selected,
            highlight,
            ..
        } => {
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(idx, option)| {
                    let marker = if *selected == Some(idx) { "(●)" } else { "( )" };
                    let style = if is_focused && idx == *highlight {
                        Style::default()
                            .fg(theme.text)
                            .bg(theme.selected_bg)
                            .add_modifier(Modifier::BOLD)
                    } else if *selected == Some(idx) {
                        Style::default().fg(theme.highlight)
                    } else {
                        Style::default().fg(theme.text)
                    };
                    ListItem::new(format!("{marker} {option}")).style(style)
                })
                .collect();
            frame.render_widget(List::new(items), inner);
        }
    }

    // The error replaces the bottom border
    if let Some(error) = error
        && area.height > 0
    {
        let error_area = Rect {
            x: area.x + 1,
            y: area.y + area.height - 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let error_text = Paragraph::new(format!("⚠ {error}")).style(Style::default().fg(theme.error));
        frame.render_widget(error_text, error_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use serde_json::json;

    fn render(view: &mut FormView, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, view)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn press(view: &mut FormView, code: KeyCode) {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn heights_add_up() {
        let view = FormView::new();
        // 7 text fields, 3 choice fields with 3 options each, 9 gaps
        assert_eq!(total_content_height(&view), 7 * 3 + 3 * 5 + 9);
        assert_eq!(field_y_position(&view, 1), 4);
    }

    #[test]
    fn renders_heading_labels_and_button() {
        let mut view = FormView::new();
        let text = screen_text(&render(&mut view, 70, 60));

        assert!(text.contains("Student Registration"));
        assert!(text.contains("First Name"));
        assert!(text.contains("Middle Name (Optional)"));
        assert!(text.contains("YYYY-MM-DD"));
        assert!(text.contains("( ) Graphic Design"));
        assert!(text.contains("Submit"));
    }

    #[test]
    fn blocked_submit_shows_field_errors() {
        let mut view = FormView::new();
        press(&mut view, KeyCode::F(10));
        let text = screen_text(&render(&mut view, 70, 60));

        assert!(text.contains("⚠ First Name is required"));
        assert!(text.contains("⚠ Phone Number is required"));
        assert!(!text.contains("Middle Name (Optional) is required"));
    }

    #[test]
    fn scrolls_to_keep_focus_visible() {
        let mut view = FormView::new();
        for _ in 0..9 {
            press(&mut view, KeyCode::Tab);
        }
        let text = screen_text(&render(&mut view, 60, 20));
        assert!(text.contains("Home Address"));
        assert!(view.scroll_offset > 0);
    }

    #[test]
    fn long_text_scrolls_to_show_the_cursor() {
        let mut view = FormView::new();
        view.focused_idx = 9;
        for c in "Sinkor Old Road, near the Ministry of Health".chars() {
            press(&mut view, KeyCode::Char(c));
        }
        let text = screen_text(&render(&mut view, 30, 40));

        assert!(text.contains("Ministry of Health"));
        assert!(!text.contains("Sinkor"));
    }

    #[test]
    fn confirmation_replaces_the_form() {
        let mut view = FormView::new();
        for (idx, text) in [(0, "Ada"), (1, "Lovelace"), (3, "1990-01-01"), (7, "ada@example.com"), (8, "0123")] {
            view.focused_idx = idx;
            for c in text.chars() {
                press(&mut view, KeyCode::Char(c));
            }
        }
        for idx in [4, 5, 6] {
            view.focused_idx = idx;
            press(&mut view, KeyCode::Enter);
        }
        press(&mut view, KeyCode::F(10));
        view.finish_submit(Ok(json!({"id": 9})));

        let text = screen_text(&render(&mut view, 80, 20));
        assert!(text.contains("Congratulations!"));
        assert!(text.contains("Enter: New registration"));
        assert!(!text.contains("First Name"));
    }
}
