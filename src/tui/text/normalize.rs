//! Markdown normalization for bot responses.
//!
//! Inference output arrives with uneven hygiene: Windows line endings,
//! non-breaking spaces, runs of blank lines, and ordered-list markers
//! indented far enough to read as nested blocks. Canonicalize all of that
//! before rendering; nothing here touches actual content.

use std::sync::OnceLock;

use regex::Regex;

static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();
static INDENTED_MARKER: OnceLock<Regex> = OnceLock::new();

/// Canonicalize raw bot-response markdown. Steps, in order: a missing body
/// becomes the empty string, CRLF becomes LF, U+00A0 becomes a plain space,
/// runs of three or more newlines collapse to a single blank line, and
/// ordered-list markers are dedented to column 0.
pub(crate) fn normalize_markdown(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let text = raw.replace("\r\n", "\n").replace('\u{a0}', " ");
    let text = BLANK_RUNS
        .get_or_init(|| Regex::new(r"\n{3,}").expect("valid pattern"))
        .replace_all(&text, "\n\n");
    INDENTED_MARKER
        .get_or_init(|| Regex::new(r"(?m)^[ \t]+(\d+)\. ").expect("valid pattern"))
        .replace_all(&text, "$1. ")
        .into_owned()
}
