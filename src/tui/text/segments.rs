//! Message segmentation: split content into text and fenced code blocks.

/// Segment of a message: either plain text or a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MessageSegment<'a> {
    Text(&'a str),
    CodeBlock { lang: &'a str, code: &'a str },
}

/// Split content on ``` fences. An unclosed fence runs to the end of the
/// message (answers cut short mid-block still render).
pub(crate) fn parse_message_segments(content: &str) -> Vec<MessageSegment<'_>> {
    let mut segments = Vec::new();
    let mut rest = content;
    while let Some(open) = rest.find("```") {
        if open > 0 {
            segments.push(MessageSegment::Text(&rest[..open]));
        }
        let after_fence = &rest[open + 3..];
        let (lang, body) = match after_fence.find('\n') {
            Some(nl) => (after_fence[..nl].trim(), &after_fence[nl + 1..]),
            None => (after_fence.trim(), ""),
        };
        match body.find("```") {
            Some(close) => {
                let code = body[..close].strip_suffix('\n').unwrap_or(&body[..close]);
                segments.push(MessageSegment::CodeBlock { lang, code });
                rest = &body[close + 3..];
            }
            None => {
                segments.push(MessageSegment::CodeBlock { lang, code: body });
                return segments;
            }
        }
    }
    if !rest.is_empty() {
        segments.push(MessageSegment::Text(rest));
    }
    segments
}
