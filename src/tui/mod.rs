//! Interactive terminal UI: the chat session plus the two legal pages,
//! driven by a crossterm event loop.

mod app;
mod constants;
mod draw;
mod handlers;
mod layout;
mod legal;
mod reply;
mod shortcuts;
pub(crate) mod text;

use std::io;
use std::sync::Arc;

use crossterm::event::{self, Event};
use crossterm::execute;
use tokio::runtime::Runtime;

use crate::core::config::Config;

use app::App;
use handlers::{HandleResult, PendingReply};
use layout::{LayoutConfig, viewport_width_px};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for the outbound
/// inference calls.
pub(crate) fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    // Layout is resolved once at mount and again on every resize.
    let size = terminal.size()?;
    let mut app = App::new(LayoutConfig::resolve(viewport_width_px(size.width)));
    let mut pending_reply: Option<PendingReply> = None;

    loop {
        if let Some(ref pending) = pending_reply
            && let Ok(result) = pending.result_rx.try_recv()
        {
            reply::apply(&mut app, result);
            pending_reply = None;
        }

        terminal.draw(|f| draw::draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? {
            match event::read()? {
                Event::Key(key) => {
                    let result =
                        handlers::handle_key(key, &mut app, &config, &mut pending_reply, &rt);
                    if result == HandleResult::Break {
                        break;
                    }
                }
                Event::Mouse(mouse) => {
                    let _ = handlers::handle_mouse(mouse, &mut app);
                }
                Event::Resize(columns, _) => {
                    // Whole-config replacement; fields are never patched.
                    app.set_layout(LayoutConfig::resolve(viewport_width_px(columns)));
                }
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
