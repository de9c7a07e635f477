//! TUI Runner - main loop that owns the terminal
//!
//! Draws the current state, waits for the next terminal event and hands
//! key presses to [`App`]. All state changes happen on this one task.

use eyre::Result;
use tracing::{debug, info};

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views;
use crate::config::TuiConfig;

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    /// Application state
    app: App,
    /// Terminal handle
    terminal: Tui,
    /// Event handler
    event_handler: EventHandler,
}

impl TuiRunner {
    pub fn new(terminal: Tui, config: &TuiConfig) -> Self {
        debug!(?config, "TuiRunner::new: called");
        Self {
            app: App::new(),
            terminal,
            event_handler: EventHandler::new(config.tick_rate()),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!("TUI started");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            match self.event_handler.next().await? {
                Event::Key(key) => {
                    if self.app.handle_key(key) {
                        debug!("TuiRunner::run: exit requested by key");
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    // Next draw picks up the new size
                    debug!(width, height, "TuiRunner::run: resize");
                }
                Event::Tick => {}
            }

            if self.app.state().should_quit {
                debug!("TuiRunner::run: should_quit is true, breaking");
                break;
            }
        }

        info!(
            activities = self.app.state().tracker.activities().len(),
            "TUI exiting, discarding session"
        );
        Ok(())
    }
}
