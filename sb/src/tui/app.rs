//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use super::state::{AppState, InteractionMode};
use crate::domain::View;

/// TUI application
#[derive(Debug, Default)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        debug!("App::new: called");
        Self { state: AppState::new() }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        trace!("App::state: called");
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        trace!("App::state_mut: called");
        &mut self.state
    }

    /// Handle a key event
    ///
    /// Returns true if the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_key: called");
        // Clear any transient error message on key press
        self.state.clear_error();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("App::handle_key: Ctrl+C force quit");
            return true;
        }

        if !self.state.is_logged_in() {
            debug!("App::handle_key: login screen");
            return self.handle_login_key(key);
        }

        match &self.state.interaction_mode {
            InteractionMode::Normal => {
                debug!("App::handle_key: Normal mode");
                self.handle_normal_key(key)
            }
            InteractionMode::DraftInput => {
                debug!("App::handle_key: DraftInput mode");
                self.handle_draft_key(key)
            }
            InteractionMode::Command(_) => {
                debug!("App::handle_key: Command mode");
                self.handle_command_key(key)
            }
            InteractionMode::Help => {
                debug!("App::handle_key: Help mode");
                self.handle_help_key(key)
            }
        }
    }

    /// Handle key on the login form
    fn handle_login_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_login_key: called");
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                let login = &mut self.state.login;
                login.focus = login.focus.toggle();
                debug!(focus = ?login.focus, "App::handle_login_key: focus moved");
            }
            KeyCode::Enter => {
                debug!("App::handle_login_key: Enter - submit");
                self.state.submit_login();
            }
            KeyCode::Backspace => {
                self.state.login.focused_mut().pop();
            }
            KeyCode::Char(c) => {
                self.state.login.focused_mut().push(c);
            }
            _ => {
                debug!("App::handle_login_key: unhandled key");
            }
        }

        false
    }

    /// Handle key in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_normal_key: called");
        let view = self.state.current_view();
        let len = self.state.tracker.activities().len();

        match key.code {
            // === Quit ===
            KeyCode::Char('q') => {
                debug!("App::handle_normal_key: quit requested");
                self.state.should_quit = true;
            }

            // === Modes ===
            KeyCode::Char('?') => {
                self.state.interaction_mode = InteractionMode::Help;
            }
            KeyCode::Char(':') => {
                self.state.interaction_mode = InteractionMode::Command(String::new());
            }

            // === Navigation bar ===
            KeyCode::Tab => self.state.navigate_to(view.next()),
            KeyCode::BackTab => self.state.navigate_to(view.prev()),
            KeyCode::Char(c @ '1'..='4') => {
                let position = c as usize - '1' as usize;
                if let Some(target) = View::from_position(position) {
                    self.state.navigate_to(target);
                }
            }
            KeyCode::F(n @ 1..=4) => {
                if let Some(target) = View::from_position(usize::from(n) - 1) {
                    self.state.navigate_to(target);
                }
            }

            // === Planner draft ===
            KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Enter if view == View::Planner => {
                debug!("App::handle_normal_key: focusing draft input");
                self.state.interaction_mode = InteractionMode::DraftInput;
            }

            // === List selection and per-row delete ===
            KeyCode::Char('j') | KeyCode::Down if view.is_list_view() => self.state.selection.select_next(len),
            KeyCode::Char('k') | KeyCode::Up if view.is_list_view() => self.state.selection.select_prev(),
            KeyCode::Char('g') | KeyCode::Home if view.is_list_view() => self.state.selection.select_first(),
            KeyCode::Char('G') | KeyCode::End if view.is_list_view() => self.state.selection.select_last(len),
            KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete if view.is_list_view() => {
                self.state.remove_selected();
            }

            _ => {
                debug!("App::handle_normal_key: unhandled key");
            }
        }

        false
    }

    /// Handle key while the planner draft has focus
    fn handle_draft_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_draft_key: called");
        match key.code {
            KeyCode::Esc => {
                debug!("App::handle_draft_key: Esc - unfocus draft");
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                debug!("App::handle_draft_key: Enter - add");
                self.state.submit_draft();
            }
            KeyCode::Backspace => {
                self.state.planner_draft.pop();
            }
            KeyCode::Char(c) => {
                self.state.planner_draft.push(c);
            }
            // Function keys are not text, so they still switch views
            KeyCode::F(n @ 1..=4) => {
                if let Some(target) = View::from_position(usize::from(n) - 1) {
                    debug!(?target, "App::handle_draft_key: function key navigation");
                    self.state.navigate_to(target);
                }
            }
            _ => {
                debug!("App::handle_draft_key: unhandled key");
            }
        }

        false
    }

    /// Handle key in command mode
    fn handle_command_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_command_key: called");
        match key.code {
            KeyCode::Esc => {
                self.state.interaction_mode = InteractionMode::Normal;
            }
            KeyCode::Enter => {
                let cmd = self.state.interaction_mode.input_buffer().unwrap_or_default().to_string();
                self.state.interaction_mode = InteractionMode::Normal;
                self.execute_command(cmd);
            }
            KeyCode::Backspace => {
                if let Some(buf) = self.state.interaction_mode.input_buffer_mut() {
                    buf.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(buf) = self.state.interaction_mode.input_buffer_mut() {
                    buf.push(c);
                }
            }
            _ => {
                debug!("App::handle_command_key: unhandled key");
            }
        }

        false
    }

    /// Handle key in help overlay
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        debug!(?key, "App::handle_help_key: called");
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            self.state.interaction_mode = InteractionMode::Normal;
        }
        false
    }

    /// Execute a `:` command
    fn execute_command(&mut self, cmd: String) {
        debug!(%cmd, "App::execute_command: called");
        let cmd = cmd.trim();
        if cmd.is_empty() {
            return;
        }
        if matches!(cmd, "q" | "quit") {
            self.state.should_quit = true;
            return;
        }
        match View::from_command(cmd) {
            Some(view) => self.state.navigate_to(view),
            None => self.state.set_error(format!("Unknown command: {}", cmd)),
        }
    }
}
