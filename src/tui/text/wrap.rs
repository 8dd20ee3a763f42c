//! Text wrapping for display.

/// Split a message into display lines respecting its own newlines, then
/// wrap each line to `width` columns. Uses textwrap for correct UTF-8
/// handling.
pub(crate) fn wrap_message(msg: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return msg.split('\n').map(str::to_string).collect();
    }
    let mut out = Vec::new();
    for line in msg.split('\n') {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.extend(
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.into_owned()),
            );
        }
    }
    out
}
