//! Event handlers for the TUI: keyboard and mouse.

mod ask_spawn;
mod input;

use std::sync::Arc;
use std::sync::mpsc;

use crossterm::event::{KeyEventKind, MouseEventKind};
use tokio::runtime::Runtime;

use crate::core::api::AskError;
use crate::core::config::Config;

use super::app::{App, Page};
use super::constants;
use super::shortcuts::Shortcut;

/// Holds the receiver for a request in flight. At most one exists at a
/// time; submission is disabled until it resolves.
pub(super) struct PendingReply {
    pub(super) result_rx: mpsc::Receiver<Result<String, AskError>>,
}

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(super) enum HandleResult {
    Continue,
    Break,
}

/// Handle a mouse event (wheel scrolling only).
pub(super) fn handle_mouse(mouse: crossterm::event::MouseEvent, app: &mut App) -> HandleResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => match app.page {
            Page::Chat => app.scroll_up(constants::SCROLL_LINES_SMALL),
            Page::Terms | Page::Privacy => app.page_scroll_up(constants::SCROLL_LINES_SMALL),
        },
        MouseEventKind::ScrollDown => match app.page {
            Page::Chat => app.scroll_down(constants::SCROLL_LINES_SMALL),
            Page::Terms | Page::Privacy => app.page_scroll_down(constants::SCROLL_LINES_SMALL),
        },
        _ => {}
    }
    HandleResult::Continue
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub(super) fn handle_key(
    key: crossterm::event::KeyEvent,
    app: &mut App,
    config: &Arc<Config>,
    pending_reply: &mut Option<PendingReply>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    match Shortcut::match_key(&key) {
        Some(Shortcut::Quit) => return HandleResult::Break,
        Some(Shortcut::Terms) => {
            app.open_page(Page::Terms);
            return HandleResult::Continue;
        }
        Some(Shortcut::Privacy) => {
            app.open_page(Page::Privacy);
            return HandleResult::Continue;
        }
        Some(Shortcut::About) => {
            if let Err(err) = opener::open(constants::ABOUT_URL) {
                log::warn!("could not open about page: {}", err);
            }
            return HandleResult::Continue;
        }
        None => {}
    }

    match app.page {
        Page::Chat => input::handle_chat_input(
            key.code,
            key.modifiers,
            app,
            config,
            pending_reply,
            rt,
        ),
        Page::Terms | Page::Privacy => input::handle_page_input(key.code, app),
    }
}
