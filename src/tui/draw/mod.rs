//! TUI rendering: layout and widgets for the three pages.

mod header;
mod input;
mod legal;
mod transcript;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::{App, Page};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let area = content_column(app, area);
    match app.page {
        Page::Chat => draw_chat(f, app, area),
        Page::Terms => legal::draw(f, app, area, "Terms of Use", super::legal::TERMS_MD),
        Page::Privacy => legal::draw(f, app, area, "Privacy Policy", super::legal::PRIVACY_MD),
    }
}

/// Apply horizontal padding and the max content width from the layout
/// config; the column is centered when the terminal is wider.
fn content_column(app: &App, area: Rect) -> Rect {
    let layout = &app.layout;
    let padded = area.width.saturating_sub(layout.h_padding * 2);
    let width = if layout.max_width > 0 {
        padded.min(layout.max_width)
    } else {
        padded
    };
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

fn draw_chat(f: &mut Frame, app: &mut App, area: Rect) {
    let input_height = app.layout.input_lines + 2; // borders
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(input_height),
            Constraint::Length(2),
        ])
        .split(area);
    header::draw_header(f, app, chunks[0]);
    transcript::draw_transcript(f, app, chunks[1]);
    input::draw_input(f, app, chunks[2]);
    input::draw_bottom_bar(f, app, chunks[3]);
}
