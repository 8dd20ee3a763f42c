//! TUI constants: colors, timing, and fixed copy.

use ratatui::style::Color;

/// User bubble teal (#009DB4), carried from the site palette.
pub(super) const USER_BUBBLE: Color = Color::Rgb(0, 157, 180);

/// Link/heading accent blue (#007BFF).
pub(super) const ACCENT: Color = Color::Rgb(0, 123, 255);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys and mouse wheel.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Greeting seeded into every new transcript.
pub(crate) const GREETING: &str = "Hi there! Welcome to Ask Me Bot! \n I'm an AI assistant created by Shusei Yokoi to help you learn more about his career and experience! You can ask me anything related to his professional background—like \"Does he have leadership experience?\" or \"What kind of Data Science experience does he have?\" Feel free to ask me!";

/// Fixed reply shown when the endpoint call fails. The underlying error
/// goes to the operator log only, never to the transcript.
pub(crate) const ERROR_REPLY: &str = "Sorry, something went wrong. Reporting to Shusei.";

/// Input placeholder.
pub(super) const PLACEHOLDER: &str = "Ask me anything about Shusei Yokoi!";

/// About page opened from the header link.
pub(crate) const ABOUT_URL: &str = "https://shuseiyokoi.notion.site/about-me";

/// Spinner frames for the thinking indicator (braille pattern, 4 frames).
pub(super) const THINKING_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸"];
