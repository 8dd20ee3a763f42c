//! Transcript handling for the chat session.

use super::{App, ScrollPosition};

/// Entry in the transcript: user prompt, bot reply, or the transient
/// placeholder shown while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Message {
    User(String),
    Bot(String),
    Thinking,
}

impl App {
    pub(crate) fn push_user(&mut self, text: &str) {
        self.messages.push(Message::User(text.to_string()));
    }

    pub(crate) fn push_bot(&mut self, text: String) {
        self.messages.push(Message::Bot(text));
    }

    /// Insert or remove the thinking placeholder. At most one exists at any
    /// time: inserting drops any stale placeholder first.
    pub(crate) fn set_thinking(&mut self, thinking: bool) {
        self.messages.retain(|m| !matches!(m, Message::Thinking));
        if thinking {
            self.messages.push(Message::Thinking);
        }
    }

    pub(crate) fn is_thinking(&self) -> bool {
        self.messages.iter().any(|m| matches!(m, Message::Thinking))
    }

    /// Accept the current input as a prompt: append the user entry and the
    /// thinking placeholder, clear the buffer. Returns the prompt to send,
    /// or None when the input is blank or a request is already outstanding.
    pub(crate) fn begin_submit(&mut self) -> Option<String> {
        if self.awaiting_reply {
            return None;
        }
        let prompt = self.input.trim().to_string();
        if prompt.is_empty() {
            return None;
        }
        self.input.clear();
        self.input_cursor = 0;
        self.push_user(&prompt);
        self.set_thinking(true);
        self.awaiting_reply = true;
        self.scroll = ScrollPosition::Bottom;
        Some(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::layout::LayoutConfig;

    fn app() -> App {
        App::new(LayoutConfig::resolve(1024))
    }

    #[test]
    fn transcript_starts_with_greeting() {
        let app = app();
        assert_eq!(app.messages.len(), 1);
        assert!(matches!(&app.messages[0], Message::Bot(_)));
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut app = app();
        app.input = "   \n ".to_string();
        assert!(app.begin_submit().is_none());
        assert_eq!(app.messages.len(), 1);
        assert!(!app.awaiting_reply);
    }

    #[test]
    fn submit_appends_user_then_placeholder() {
        let mut app = app();
        app.input = "Hello".to_string();
        assert_eq!(app.begin_submit().as_deref(), Some("Hello"));
        assert_eq!(app.messages[1], Message::User("Hello".to_string()));
        assert_eq!(app.messages[2], Message::Thinking);
        assert!(app.input.is_empty());
        assert!(app.awaiting_reply);
    }

    #[test]
    fn submit_is_blocked_while_awaiting() {
        let mut app = app();
        app.input = "one".to_string();
        app.begin_submit().expect("accepted");
        app.input = "two".to_string();
        assert!(app.begin_submit().is_none());
        // The blocked submit keeps its input for later.
        assert_eq!(app.input, "two");
    }

    #[test]
    fn at_most_one_thinking_entry() {
        let mut app = app();
        app.set_thinking(true);
        app.set_thinking(true);
        let count = app
            .messages
            .iter()
            .filter(|m| matches!(m, Message::Thinking))
            .count();
        assert_eq!(count, 1);
        app.set_thinking(false);
        assert!(!app.is_thinking());
    }
}
