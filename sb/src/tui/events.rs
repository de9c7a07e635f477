//! TUI event handling
//!
//! Terminal input is polled on a dedicated thread and forwarded to the UI
//! task over a tokio channel.

use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};
use eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::config::MIN_TICK_RATE_MS;

/// Terminal events
#[derive(Debug)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// No input within the tick rate
    Tick,
}

/// Event handler for the TUI
pub struct EventHandler {
    /// Event receiver
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler with the given tick rate
    ///
    /// Rates below `MIN_TICK_RATE_MS` are raised to it. When the terminal
    /// cannot be polled the thread waits one tick before trying again.
    pub fn new(tick_rate: Duration) -> Self {
        debug!(?tick_rate, "EventHandler::new: called");
        let tick_rate = tick_rate.max(Duration::from_millis(MIN_TICK_RATE_MS));
        let (tx, rx) = mpsc::unbounded_channel();

        std::thread::spawn(move || {
            debug!("EventHandler: polling thread started");
            loop {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        // Windows reports both press and release
                        Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => Event::Key(key),
                        Ok(event::Event::Resize(w, h)) => Event::Resize(w, h),
                        Ok(_) => continue,
                        Err(e) => {
                            warn!(%e, "EventHandler: read failed");
                            std::thread::sleep(tick_rate);
                            continue;
                        }
                    },
                    Ok(false) => Event::Tick,
                    Err(e) => {
                        // poll returns immediately on error
                        warn!(%e, "EventHandler: poll failed");
                        std::thread::sleep(tick_rate);
                        Event::Tick
                    }
                };

                if tx.send(event).is_err() {
                    debug!("EventHandler: channel closed, exiting loop");
                    break;
                }
            }
        });

        Self { rx }
    }

    /// Get the next event (async)
    pub async fn next(&mut self) -> Result<Event> {
        self.rx.recv().await.ok_or_else(|| eyre::eyre!("Event channel closed"))
    }
}
