//! Header: title, thinking spinner, About hint.

use std::sync::OnceLock;
use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::App;
use super::super::constants::{ACCENT, THINKING_FRAMES, USER_BUBBLE};

/// Start time for the spinner animation phase.
static HEADER_START: OnceLock<Instant> = OnceLock::new();

pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(16),
        ])
        .split(area);

    let symbol = if app.is_thinking() {
        let start = HEADER_START.get_or_init(Instant::now);
        let phase = start.elapsed().as_millis() as usize;
        THINKING_FRAMES[(phase / 80) % THINKING_FRAMES.len()]
    } else {
        "◆"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} ", symbol),
            Style::default().fg(USER_BUBBLE),
        ))),
        chunks[0],
    );

    let title = Line::from(Span::styled(
        "Ask Me Bot",
        Style::default().fg(USER_BUBBLE).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(
        Paragraph::new(title).alignment(Alignment::Center),
        chunks[1],
    );

    // The compact preset shortens the link label, like the shrunken icon on
    // narrow viewports.
    let about_label = if app.layout.compact { "About" } else { "About Me" };
    let about = Line::from(vec![
        Span::styled("Alt+A ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            about_label,
            Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED),
        ),
    ]);
    f.render_widget(
        Paragraph::new(about).alignment(Alignment::Right),
        chunks[2],
    );
}
