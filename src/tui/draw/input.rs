//! Input block with cursor, placeholder, disabled state, and the bottom bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::app::App;
use super::super::constants::{PLACEHOLDER, USER_BUBBLE};
use super::super::shortcuts::labels;
use super::super::text::wrap_message;

pub(super) fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    // Input width from the layout config, centered in the content column.
    let width = (area.width as u32 * app.layout.input_width_pct as u32 / 100) as u16;
    let width = width.max(10).min(area.width);
    let input_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: area.height,
    };
    draw_input_block(f, app, input_area);
}

fn draw_input_block(f: &mut Frame, app: &App, input_area: Rect) {
    // While a request is outstanding the whole control renders disabled.
    let border_style = if app.awaiting_reply {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(USER_BUBBLE)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    let inner = block.inner(input_area);

    let para = if app.input.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        )))
    } else {
        Paragraph::new(app.input.clone())
    };

    let lines = wrap_message(&app.input, inner.width.max(1) as usize);
    let total_lines = lines.len().max(1);
    let inner_height = inner.height.max(1) as usize;

    // Cursor row/col from the wrapped lines (input_cursor is kept on a char
    // boundary by the handlers).
    let cursor_chars = app.input[..app.input_cursor.min(app.input.len())]
        .chars()
        .count();
    let (cursor_line, cursor_col) = locate_cursor(&lines, cursor_chars);

    let scroll_y = cursor_line
        .saturating_sub(inner_height.saturating_sub(1))
        .min(total_lines.saturating_sub(inner_height));
    let para = para
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll_y as u16, 0));
    f.render_widget(para, input_area);

    if !app.awaiting_reply {
        let cx = inner.x + cursor_col.min(inner.width.saturating_sub(1) as usize) as u16;
        let cy = inner.y + cursor_line.saturating_sub(scroll_y) as u16;
        f.set_cursor_position(Position::new(cx, cy));
    }
}

/// Walk wrapped lines to place a character offset. Wrapping may drop
/// whitespace, so this is a best-effort position, clamped to line ends.
fn locate_cursor(lines: &[String], cursor_chars: usize) -> (usize, usize) {
    let mut remaining = cursor_chars;
    for (i, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if remaining <= len {
            return (i, remaining);
        }
        remaining -= len;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.get(last).map(|l| l.chars().count()).unwrap_or(0))
}

pub(super) fn draw_bottom_bar(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(
        Paragraph::new(labels::bottom_bar(app.awaiting_reply)).alignment(Alignment::Center),
        area,
    );
}
