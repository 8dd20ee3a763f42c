//! TUI application state: page, transcript, input, scroll, layout.

mod messages;

pub(crate) use messages::Message;

use crate::tui::constants;
use crate::tui::layout::LayoutConfig;

/// Which view is on screen. The legal pages are static; chat holds the
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Page {
    Chat,
    Terms,
    Privacy,
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

pub(crate) struct App {
    pub(crate) page: Page,
    /// Ordered transcript; entries are appended, never edited in place.
    pub(crate) messages: Vec<Message>,
    /// User input in the text field.
    pub(crate) input: String,
    /// Cursor position in the input (byte index, always on a char boundary).
    pub(crate) input_cursor: usize,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Scroll line for the legal pages (kept apart from the chat scroll so
    /// returning to the chat restores its position).
    pub(crate) page_scroll: usize,
    pub(crate) page_max_scroll: usize,
    /// Display parameters for the current viewport; replaced wholesale on
    /// resize.
    pub(crate) layout: LayoutConfig,
    /// True while a request is in flight (submission disabled).
    pub(crate) awaiting_reply: bool,
}

impl App {
    pub(crate) fn new(layout: LayoutConfig) -> Self {
        Self {
            page: Page::Chat,
            messages: vec![Message::Bot(constants::GREETING.to_string())],
            input: String::new(),
            input_cursor: 0,
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            page_scroll: 0,
            page_max_scroll: 0,
            layout,
            awaiting_reply: false,
        }
    }

    /// Replace the layout wholesale (resize adapter; no field patching).
    pub(crate) fn set_layout(&mut self, layout: LayoutConfig) {
        self.layout = layout;
    }

    pub(crate) fn open_page(&mut self, page: Page) {
        self.page = page;
        self.page_scroll = 0;
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve the chat scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }

    pub(crate) fn page_scroll_down(&mut self, n: usize) {
        self.page_scroll = (self.page_scroll + n).min(self.page_max_scroll);
    }

    pub(crate) fn page_scroll_up(&mut self, n: usize) {
        self.page_scroll = self.page_scroll.saturating_sub(n);
    }
}
