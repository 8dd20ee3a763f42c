//! Applies the outcome of an inference request to the transcript.

use crate::core::api::AskError;

use super::app::{App, ScrollPosition};
use super::constants;
use super::text;

/// Apply the result of the in-flight request: drop the thinking placeholder
/// and append the bot entry. A failure surfaces the fixed apology; the
/// underlying error goes to the operator log only.
pub(super) fn apply(app: &mut App, result: Result<String, AskError>) {
    app.set_thinking(false);
    app.awaiting_reply = false;
    match result {
        Ok(response) => {
            app.push_bot(text::normalize_markdown(Some(&response)));
        }
        Err(err) => {
            log::error!("inference request failed: {}", err);
            app.push_bot(constants::ERROR_REPLY.to_string());
        }
    }
    app.scroll = ScrollPosition::Bottom;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Message;
    use crate::tui::layout::LayoutConfig;

    fn app() -> App {
        App::new(LayoutConfig::resolve(1024))
    }

    #[test]
    fn success_replaces_placeholder_with_normalized_reply() {
        let mut app = app();
        app.input = "Hello".to_string();
        app.begin_submit().expect("accepted");

        apply(&mut app, Ok("**Hi**\n\n\n\n1. a".to_string()));

        assert!(!app.is_thinking());
        assert!(!app.awaiting_reply);
        assert_eq!(
            app.messages.last(),
            Some(&Message::Bot("**Hi**\n\n1. a".to_string()))
        );
    }

    #[test]
    fn failure_appends_fixed_apology_and_reenables_submit() {
        let mut app = app();
        app.input = "Hello".to_string();
        app.begin_submit().expect("accepted");

        apply(
            &mut app,
            Err(AskError::Status(reqwest::StatusCode::BAD_GATEWAY)),
        );

        assert!(!app.is_thinking());
        assert_eq!(
            app.messages.last(),
            Some(&Message::Bot(
                "Sorry, something went wrong. Reporting to Shusei.".to_string()
            ))
        );
        // Back to idle: the next submit is accepted again.
        app.input = "again".to_string();
        assert!(app.begin_submit().is_some());
    }
}
