//! Handlers for the chat input and the static pages.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyModifiers};
use tokio::runtime::Runtime;

use crate::core::config::Config;

use super::super::app::{App, Page};
use super::super::constants;
use super::{HandleResult, PendingReply, ask_spawn};

/// Keys on the chat page: editing, submit, scroll.
pub(super) fn handle_chat_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
    config: &Arc<Config>,
    pending_reply: &mut Option<PendingReply>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    match (key_code, key_modifiers) {
        (KeyCode::Enter, m)
            if m.contains(KeyModifiers::SHIFT) || m.contains(KeyModifiers::ALT) =>
        {
            insert_char(app, '\n');
        }
        (KeyCode::Enter, _) => {
            // At most one request in flight; a blank prompt is a no-op.
            if pending_reply.is_none()
                && let Some(prompt) = app.begin_submit()
            {
                *pending_reply = Some(ask_spawn::spawn_ask(rt, Arc::clone(config), prompt));
            }
        }
        (KeyCode::Backspace, _) => delete_char_before_cursor(app),
        (KeyCode::Left, _) => {
            if let Some(c) = app.input[..app.input_cursor].chars().next_back() {
                app.input_cursor -= c.len_utf8();
            }
        }
        (KeyCode::Right, _) => {
            if let Some(c) = app.input[app.input_cursor..].chars().next() {
                app.input_cursor += c.len_utf8();
            }
        }
        (KeyCode::Home, _) => app.input_cursor = 0,
        (KeyCode::End, _) => app.input_cursor = app.input.len(),
        (KeyCode::Up, _) => app.scroll_up(constants::SCROLL_LINES_SMALL),
        (KeyCode::Down, _) => app.scroll_down(constants::SCROLL_LINES_SMALL),
        (KeyCode::PageUp, _) => app.scroll_up(constants::SCROLL_LINES_PAGE),
        (KeyCode::PageDown, _) => app.scroll_down(constants::SCROLL_LINES_PAGE),
        (KeyCode::Char(c), mods) => {
            // Ignore Alt+key: user likely intended a shortcut
            if !mods.contains(KeyModifiers::ALT) {
                insert_char(app, c);
            }
        }
        _ => {}
    }
    HandleResult::Continue
}

/// Keys on the legal pages: scroll and back.
pub(super) fn handle_page_input(key_code: KeyCode, app: &mut App) -> HandleResult {
    match key_code {
        KeyCode::Esc => app.open_page(Page::Chat),
        KeyCode::Up => app.page_scroll_up(constants::SCROLL_LINES_SMALL),
        KeyCode::Down => app.page_scroll_down(constants::SCROLL_LINES_SMALL),
        KeyCode::PageUp => app.page_scroll_up(constants::SCROLL_LINES_PAGE),
        KeyCode::PageDown => app.page_scroll_down(constants::SCROLL_LINES_PAGE),
        _ => {}
    }
    HandleResult::Continue
}

fn insert_char(app: &mut App, c: char) {
    app.input.insert(app.input_cursor, c);
    app.input_cursor += c.len_utf8();
}

fn delete_char_before_cursor(app: &mut App) {
    if let Some(c) = app.input[..app.input_cursor].chars().next_back() {
        let at = app.input_cursor - c.len_utf8();
        app.input.remove(at);
        app.input_cursor = at;
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
    fn insert_and_delete_stay_on_char_boundaries() {
        let mut app = app();
        for c in "héllo".chars() {
            insert_char(&mut app, c);
        }
        assert_eq!(app.input, "héllo");
        assert_eq!(app.input_cursor, app.input.len());

        delete_char_before_cursor(&mut app);
        assert_eq!(app.input, "héll");

        app.input_cursor = 0;
        delete_char_before_cursor(&mut app); // nothing before the cursor
        assert_eq!(app.input, "héll");
    }

    #[test]
    fn esc_on_legal_page_returns_to_chat() {
        let mut app = app();
        app.open_page(Page::Terms);
        handle_page_input(KeyCode::Esc, &mut app);
        assert_eq!(app.page, Page::Chat);
    }
}
