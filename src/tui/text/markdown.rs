//! Inline Markdown parsing: **bold**, `code`, ~~strikethrough~~, headings,
//! lists, tables, links.

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::tui::constants::ACCENT;

/// Parse one display line of Markdown into styled spans.
pub(crate) fn parse_markdown_inline(s: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let trimmed = s.trim_start();
    // Heading: starts with one or more #
    if trimmed.starts_with('#') {
        let content = trimmed.trim_start_matches('#').trim_start();
        if !content.is_empty() {
            spans.push(Span::styled(
                content.to_string(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ));
        }
        return spans;
    }
    // Bullet list: - or * at line start
    if trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        spans.push(Span::styled("• ", Style::default().fg(ACCENT)));
        spans.extend(parse_inline_runs(trimmed.get(2..).unwrap_or("")));
        return spans;
    }
    // Table row: | cell1 | cell2 |
    if trimmed.starts_with('|') && trimmed.contains('|') {
        let cells: Vec<&str> = trimmed
            .split('|')
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .collect();
        if !cells.is_empty() {
            for (i, cell) in cells.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(ACCENT)));
                }
                spans.extend(parse_inline_runs(cell));
            }
            return spans;
        }
    }
    // Numbered list: 1. 2. etc. at line start
    if let Some((num, rest)) = parse_numbered_list_prefix(trimmed) {
        spans.push(Span::styled(
            format!("{} ", num),
            Style::default().fg(ACCENT),
        ));
        spans.extend(parse_inline_runs(rest));
        return spans;
    }
    spans.extend(parse_inline_runs(s));
    spans
}

/// Parse "N. " or "N) " at start. Returns (number, rest) or None.
fn parse_numbered_list_prefix(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let digits = s.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let (num, rest) = s.split_at(digits);
    if rest.starts_with(". ") || rest.starts_with(") ") {
        Some((num, &rest[2..]))
    } else {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Inline {
    Bold,
    Strike,
    Code,
    Link,
}

/// Earliest inline marker in `rest`, ties broken by candidate order.
fn next_marker(rest: &str) -> Option<(usize, Inline)> {
    [
        rest.find("**").map(|p| (p, Inline::Bold)),
        rest.find("~~").map(|p| (p, Inline::Strike)),
        rest.find('`').map(|p| (p, Inline::Code)),
        rest.find('[').map(|p| (p, Inline::Link)),
    ]
    .into_iter()
    .flatten()
    .min_by_key(|(p, _)| *p)
}

/// Parse **bold**, ~~strikethrough~~, `code`, [text](url) in the rest of a
/// line. Unclosed markers render literally.
fn parse_inline_runs(s: &str) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut rest = s;
    while !rest.is_empty() {
        let Some((pos, marker)) = next_marker(rest) else {
            spans.push(Span::raw(rest.to_string()));
            break;
        };
        if pos > 0 {
            spans.push(Span::raw(rest[..pos].to_string()));
        }
        rest = &rest[pos..];
        match marker {
            Inline::Bold => {
                rest = &rest[2..];
                if let Some(end) = rest.find("**") {
                    spans.push(Span::styled(
                        rest[..end].to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ));
                    rest = &rest[end + 2..];
                } else {
                    spans.push(Span::raw("**".to_string()));
                }
            }
            Inline::Strike => {
                rest = &rest[2..];
                if let Some(end) = rest.find("~~") {
                    spans.push(Span::styled(
                        rest[..end].to_string(),
                        Style::default().add_modifier(Modifier::CROSSED_OUT),
                    ));
                    rest = &rest[end + 2..];
                } else {
                    spans.push(Span::raw("~~".to_string()));
                }
            }
            Inline::Code => {
                rest = &rest[1..];
                if let Some(end) = rest.find('`') {
                    spans.push(Span::styled(
                        rest[..end].to_string(),
                        Style::default().fg(ACCENT),
                    ));
                    rest = &rest[end + 1..];
                } else {
                    spans.push(Span::raw("`".to_string()));
                }
            }
            Inline::Link => {
                rest = &rest[1..];
                let Some(end_br) = rest.find(']') else {
                    spans.push(Span::raw("[".to_string()));
                    continue;
                };
                let text = &rest[..end_br];
                rest = &rest[end_br + 1..];
                if let Some(url_rest) = rest.strip_prefix('(') {
                    if let Some(end_paren) = url_rest.find(')') {
                        rest = &url_rest[end_paren + 1..];
                        spans.push(Span::styled(
                            text.to_string(),
                            Style::default()
                                .fg(ACCENT)
                                .add_modifier(Modifier::UNDERLINED),
                        ));
                    } else {
                        spans.push(Span::raw(format!("[{}]", text)));
                    }
                } else {
                    spans.push(Span::raw(format!("[{}]", text)));
                }
            }
        }
    }
    spans
}
