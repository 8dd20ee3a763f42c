//! Centralized keyboard shortcuts.
//!
//! Complete reference:
//!
//! | Action        | Keys                |
//! |---------------|---------------------|
//! | Send          | Enter               |
//! | Newline       | Shift+Enter, Alt+Enter |
//! | Scroll        | ↑ ↓ PageUp PageDown |
//! | Terms of Use  | Alt+T               |
//! | Privacy       | Alt+P               |
//! | About page    | Alt+A               |
//! | Back to chat  | Esc                 |
//! | Quit          | Ctrl+C              |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shortcut {
    /// Open the Terms of Use page (Alt+T)
    Terms,
    /// Open the Privacy Policy page (Alt+P)
    Privacy,
    /// Open the About page in the browser (Alt+A)
    About,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub(crate) fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::Terms)
            }
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::Privacy)
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Shortcut::About)
            }
            _ => None,
        }
    }
}

/// Labels for the bottom bar.
pub(crate) mod labels {
    use ratatui::style::Color;
    use ratatui::text::{Line, Span, Text};

    const DIM: Color = Color::DarkGray;

    /// Footer for the chat page. While a request is outstanding the send
    /// action is disabled and the bar says so.
    pub(crate) fn bottom_bar(awaiting_reply: bool) -> Text<'static> {
        if awaiting_reply {
            Text::from(Line::from(vec![
                Span::styled("Thinking... ", Color::Yellow),
                Span::styled("  ↑↓ ", DIM),
                Span::raw("scroll"),
            ]))
        } else {
            Text::from(vec![
                Line::from(vec![
                    Span::styled("Enter ", DIM),
                    Span::raw("send"),
                    Span::styled("  Shift+Enter ", DIM),
                    Span::raw("newline"),
                    Span::styled("  ↑↓ ", DIM),
                    Span::raw("scroll"),
                ]),
                Line::from(vec![
                    Span::styled("Alt+T ", DIM),
                    Span::raw("terms"),
                    Span::styled("  Alt+P ", DIM),
                    Span::raw("privacy"),
                    Span::styled("  Alt+A ", DIM),
                    Span::raw("about"),
                    Span::styled("  Ctrl+C ", DIM),
                    Span::raw("quit"),
                ]),
            ])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Shortcut;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn match_quit_ctrl_c() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Shortcut::Quit)
        );
    }

    #[test]
    fn match_terms_alt_t() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('t'), KeyModifiers::ALT)),
            Some(Shortcut::Terms)
        );
    }

    #[test]
    fn match_privacy_alt_p() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('p'), KeyModifiers::ALT)),
            Some(Shortcut::Privacy)
        );
    }

    #[test]
    fn match_about_alt_a() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('a'), KeyModifiers::ALT)),
            Some(Shortcut::About)
        );
    }

    #[test]
    fn plain_chars_are_not_shortcuts() {
        assert_eq!(
            Shortcut::match_key(&key(KeyCode::Char('t'), KeyModifiers::empty())),
            None
        );
    }

    #[test]
    fn key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(Shortcut::match_key(&release), None);
    }
}
