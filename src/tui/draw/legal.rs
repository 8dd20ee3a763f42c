//! Static page rendering: terms of use and privacy policy.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::app::App;
use super::super::constants::USER_BUBBLE;
use super::super::text::{parse_markdown_inline, wrap_message};

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect, title: &str, content: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let heading = Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(USER_BUBBLE).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(heading), chunks[0]);

    let width = chunks[1].width.max(1) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();
    for raw_line in content.lines() {
        if raw_line.is_empty() {
            lines.push(Line::default());
            continue;
        }
        for chunk in wrap_message(raw_line, width) {
            lines.push(Line::from(parse_markdown_inline(&chunk)));
        }
    }

    let visible = chunks[1].height.max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible);
    app.page_max_scroll = max_scroll;
    let start = app.page_scroll.min(max_scroll);
    let shown: Vec<Line> = lines.into_iter().skip(start).take(visible).collect();
    f.render_widget(Paragraph::new(shown), chunks[1]);

    let hint = Line::from(vec![
        Span::styled("Esc ", Style::default().fg(Color::DarkGray)),
        Span::raw("back to chat"),
        Span::styled("  Ctrl+C ", Style::default().fg(Color::DarkGray)),
        Span::raw("quit"),
    ]);
    f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), chunks[2]);
}
