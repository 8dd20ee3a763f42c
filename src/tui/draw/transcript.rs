//! Transcript rendering: chat bubbles, thinking row, code blocks, scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use super::super::app::{App, Message};
use super::super::constants::USER_BUBBLE;
use super::super::text::{MessageSegment, parse_markdown_inline, parse_message_segments, wrap_message};

/// Bot avatar glyph shown in the gutter of the first line of each reply.
const BOT_AVATAR: &str = "◉";

pub(super) fn draw_transcript(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let text_area = chunks[0];
    let scrollbar_area = chunks[1];

    let wrap_width = text_area.width.max(1) as usize;
    let bubble_width = (wrap_width * app.layout.bubble_width_pct as usize / 100).max(1);
    let gutter = app.layout.avatar_width as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in &app.messages {
        match msg {
            Message::User(text) => add_user_lines(&mut lines, text, wrap_width, bubble_width),
            Message::Bot(text) => add_bot_lines(
                &mut lines,
                text,
                bubble_width.saturating_sub(gutter).max(1),
                gutter,
            ),
            Message::Thinking => add_thinking_line(&mut lines, gutter),
        }
        lines.push(Line::default());
    }

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let start = app.scroll_line().min(max_scroll);
    let end = (start + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines.into_iter().skip(start).take(end - start).collect();
    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(start)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(USER_BUBBLE))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

/// User bubble: right-aligned, white on teal, literal newlines preserved.
fn add_user_lines(lines: &mut Vec<Line<'static>>, text: &str, wrap_width: usize, bubble_width: usize) {
    let style = Style::default().fg(Color::White).bg(USER_BUBBLE);
    for chunk in wrap_message(text, bubble_width) {
        let content = format!(" {} ", chunk);
        let pad = wrap_width.saturating_sub(content.chars().count());
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(pad)),
            Span::styled(content, style),
        ]));
    }
}

fn gutter_span(first: bool, gutter: usize) -> Span<'static> {
    if first {
        Span::styled(
            format!("{:<w$}", BOT_AVATAR, w = gutter),
            Style::default().fg(USER_BUBBLE),
        )
    } else {
        Span::raw(" ".repeat(gutter))
    }
}

/// Bot reply: left-aligned behind an avatar gutter, markdown rendered
/// inline, fenced code in a box.
fn add_bot_lines(lines: &mut Vec<Line<'static>>, text: &str, width: usize, gutter: usize) {
    let frame_style = Style::default().fg(Color::DarkGray);
    let mut first = true;
    for segment in parse_message_segments(text) {
        match segment {
            MessageSegment::Text(t) => {
                for chunk in wrap_message(t.trim_matches('\n'), width) {
                    let mut spans = vec![gutter_span(first, gutter)];
                    spans.extend(parse_markdown_inline(&chunk));
                    lines.push(Line::from(spans));
                    first = false;
                }
            }
            MessageSegment::CodeBlock { lang, code } => {
                let inner = width.saturating_sub(2).max(1);
                let label = if lang.is_empty() { "code" } else { lang };
                let trail = inner.saturating_sub(label.chars().count() + 4);
                lines.push(Line::from(vec![
                    gutter_span(first, gutter),
                    Span::styled(
                        format!("┌─ {} {}┐", label, "─".repeat(trail)),
                        frame_style,
                    ),
                ]));
                first = false;
                for code_line in code.split('\n') {
                    for chunk in wrap_message(code_line, inner) {
                        lines.push(Line::from(vec![
                            gutter_span(false, gutter),
                            Span::styled("│ ".to_string(), frame_style),
                            Span::raw(chunk),
                        ]));
                    }
                }
                lines.push(Line::from(vec![
                    gutter_span(false, gutter),
                    Span::styled(format!("└{}┘", "─".repeat(inner)), frame_style),
                ]));
            }
        }
    }
    if first {
        // An empty reply still shows the avatar row.
        lines.push(Line::from(gutter_span(true, gutter)));
    }
}

fn add_thinking_line(lines: &mut Vec<Line<'static>>, gutter: usize) {
    lines.push(Line::from(vec![
        gutter_span(true, gutter),
        Span::styled(
            "Thinking...".to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    ]));
}
