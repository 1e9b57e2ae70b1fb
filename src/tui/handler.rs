//! Event handler for the TUI
//!
//! Routes keyboard events to the app state. The dashboard is read-only, so
//! the key map stays small: quit, switch list focus, scroll.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.quit();
        }

        // Switch focused stat list
        KeyCode::Tab => {
            app.toggle_list_focus();
        }

        // Scroll the focused list
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up();
        }

        _ => {}
    }
    Ok(())
}
