use super::{
    MessageSegment, normalize_markdown, parse_markdown_inline, parse_message_segments,
    wrap_message,
};

#[test]
fn normalize_missing_body_is_empty() {
    assert_eq!(normalize_markdown(None), "");
}

#[test]
fn normalize_converts_crlf() {
    assert_eq!(normalize_markdown(Some("a\r\nb")), "a\nb");
}

#[test]
fn normalize_replaces_nbsp() {
    assert_eq!(normalize_markdown(Some("1.\u{a0}Item")), "1. Item");
}

#[test]
fn normalize_collapses_blank_runs() {
    assert_eq!(normalize_markdown(Some("a\n\n\nb")), "a\n\nb");
    assert_eq!(normalize_markdown(Some("a\n\n\n\n\n\nb")), "a\n\nb");
    for n in 0..8 {
        let input = format!("start{}end", "\n".repeat(n));
        assert!(!normalize_markdown(Some(&input)).contains("\n\n\n"));
    }
}

#[test]
fn normalize_dedents_ordered_markers() {
    assert_eq!(
        normalize_markdown(Some("   1. First\n   2. Second")),
        "1. First\n2. Second"
    );
}

#[test]
fn normalize_keeps_other_indentation() {
    // Only ordered-list markers are dedented; plain indented text is content.
    assert_eq!(normalize_markdown(Some("   not a list")), "   not a list");
    assert_eq!(normalize_markdown(Some("   1.no space")), "   1.no space");
}

#[test]
fn normalize_end_to_end() {
    assert_eq!(
        normalize_markdown(Some("**Hi**\r\n\n\n\n  1.\u{a0}a")),
        "**Hi**\n\n1. a"
    );
}

#[test]
fn normalize_leaves_clean_text_alone() {
    let clean = "Para one.\n\nPara two with **bold**.\n\n1. a\n2. b";
    assert_eq!(normalize_markdown(Some(clean)), clean);
}

#[test]
fn parse_markdown_inline_plain() {
    let spans = parse_markdown_inline("hello");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content.as_ref(), "hello");
}

#[test]
fn parse_markdown_inline_bold() {
    use ratatui::style::Modifier;
    let spans = parse_markdown_inline("**bold** text");
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].content.as_ref(), "bold");
    assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
    assert_eq!(spans[1].content.as_ref(), " text");
}

#[test]
fn parse_markdown_inline_strikethrough() {
    use ratatui::style::Modifier;
    let spans = parse_markdown_inline("was ~~wrong~~ right");
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[1].content.as_ref(), "wrong");
    assert!(spans[1].style.add_modifier.contains(Modifier::CROSSED_OUT));
}

#[test]
fn parse_markdown_inline_inline_code() {
    let spans = parse_markdown_inline("Use `pandas` daily");
    assert_eq!(spans.len(), 3);
    assert_eq!(spans[1].content.as_ref(), "pandas");
}

#[test]
fn parse_markdown_inline_heading() {
    let spans = parse_markdown_inline("## Experience");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content.as_ref(), "Experience");
}

#[test]
fn parse_markdown_inline_bullet_list() {
    let spans = parse_markdown_inline("- item one");
    assert!(spans.len() >= 2);
    assert_eq!(spans[0].content.as_ref(), "• ");
}

#[test]
fn parse_markdown_inline_numbered_list() {
    let spans = parse_markdown_inline("1. first");
    assert!(spans.len() >= 2);
    assert_eq!(spans[0].content.as_ref(), "1 ");
}

#[test]
fn parse_markdown_inline_link() {
    let spans = parse_markdown_inline("See [his site](https://example.com) for more.");
    assert!(spans.iter().any(|s| s.content.as_ref() == "his site"));
}

#[test]
fn parse_markdown_inline_unclosed_bold_is_literal() {
    let spans = parse_markdown_inline("oops **dangling");
    let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(text, "oops **dangling");
}

#[test]
fn parse_markdown_inline_table_row() {
    let spans = parse_markdown_inline("| role | years |");
    assert!(!spans.is_empty());
    assert!(spans.iter().any(|s| s.content.as_ref() == "role"));
}

#[test]
fn parse_message_segments_text_only() {
    let segs = parse_message_segments("Hello world");
    assert_eq!(segs, vec![MessageSegment::Text("Hello world")]);
}

#[test]
fn parse_message_segments_code_block() {
    let segs = parse_message_segments("Before:\n\n```python\nprint(1)\n```\n\nAfter.");
    assert_eq!(segs.len(), 3);
    assert_eq!(
        segs[1],
        MessageSegment::CodeBlock {
            lang: "python",
            code: "print(1)"
        }
    );
}

#[test]
fn parse_message_segments_unclosed_block_runs_to_end() {
    let segs = parse_message_segments("```sql\nSELECT 1");
    assert_eq!(
        segs,
        vec![MessageSegment::CodeBlock {
            lang: "sql",
            code: "SELECT 1"
        }]
    );
}

#[test]
fn wrap_message_preserves_newlines() {
    let lines = wrap_message("line1\nline2", 100);
    assert_eq!(lines, ["line1", "line2"]);
}

#[test]
fn wrap_message_wraps_long_line() {
    let lines = wrap_message("hello world test", 8);
    assert_eq!(lines, ["hello", "world", "test"]);
}

#[test]
fn wrap_message_empty_lines() {
    let lines = wrap_message("a\n\nb", 100);
    assert_eq!(lines, ["a", "", "b"]);
}
