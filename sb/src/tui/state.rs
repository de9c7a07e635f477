//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//!
//! Session, navigation and the activity list live in [`Tracker`]; this module
//! only adds what belongs to the screen itself: form drafts, focus, list
//! selection and transient messages.

use tracing::{debug, info};

use crate::domain::{Tracker, TrackerError, View};

/// Interaction mode (modal)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Typing into the planner draft field
    DraftInput,
    /// Command mode (: key)
    Command(String),
    /// Help overlay
    Help,
}

impl InteractionMode {
    /// Check if in command mode
    pub fn is_command(&self) -> bool {
        matches!(self, Self::Command(_))
    }

    /// Get the input buffer if in command mode
    pub fn input_buffer(&self) -> Option<&str> {
        match self {
            Self::Command(s) => Some(s),
            _ => None,
        }
    }

    /// Get mutable input buffer
    pub fn input_buffer_mut(&mut self) -> Option<&mut String> {
        match self {
            Self::Command(s) => Some(s),
            _ => None,
        }
    }
}

/// Which login field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Login form contents
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    /// Validation error from the last submit; editing does not clear it
    pub error: Option<String>,
}

impl LoginForm {
    /// Buffer for the focused field
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// Selection state for list views
#[derive(Debug, Default, Clone)]
pub struct SelectionState {
    pub selected_index: usize,
}

impl SelectionState {
    pub fn select_next(&mut self, max_items: usize) {
        if max_items > 0 && self.selected_index < max_items - 1 {
            self.selected_index += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self, max_items: usize) {
        if max_items > 0 {
            self.selected_index = max_items - 1;
        }
    }

    /// Ensure selection is within bounds
    pub fn clamp(&mut self, max_items: usize) {
        if max_items == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= max_items {
            self.selected_index = max_items - 1;
        }
    }
}

/// Main TUI application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Session, current view and activities
    pub tracker: Tracker,
    /// Current interaction mode
    pub interaction_mode: InteractionMode,
    /// Login form (shown until the session opens)
    pub login: LoginForm,
    /// Planner draft; discarded when leaving the planner
    pub planner_draft: String,
    /// Selected row in the list views
    pub selection: SelectionState,
    /// Should the app quit
    pub should_quit: bool,
    /// Transient error, cleared on the next key press
    pub error_message: Option<String>,
}

impl AppState {
    /// Create new AppState
    pub fn new() -> Self {
        debug!("AppState::new: called");
        Self::default()
    }

    pub fn current_view(&self) -> View {
        self.tracker.current_view()
    }

    pub fn is_logged_in(&self) -> bool {
        self.tracker.is_logged_in()
    }

    /// Submit the login form
    pub fn submit_login(&mut self) {
        debug!(username = %self.login.username, "AppState::submit_login: called");
        match self.tracker.login(&self.login.username, &self.login.password) {
            Ok(()) => {
                self.login.error = None;
                self.interaction_mode = InteractionMode::Normal;
            }
            Err(e) => {
                debug!(%e, "AppState::submit_login: rejected");
                self.login.error = Some(e.to_string());
            }
        }
    }

    /// Switch views
    ///
    /// Leaving the planner discards its draft; re-selecting the current view
    /// changes nothing.
    pub fn navigate_to(&mut self, view: View) {
        debug!(?view, "AppState::navigate_to: called");
        let from = self.current_view();
        if let Err(e) = self.tracker.navigate(view) {
            self.set_error(e.to_string());
            return;
        }
        if from != view {
            self.on_view_changed(from);
        }
    }

    /// Run the planner's Add action on the current draft
    pub fn submit_draft(&mut self) {
        debug!(draft = %self.planner_draft, "AppState::submit_draft: called");
        let from = self.current_view();
        match self.tracker.add_activity(&self.planner_draft) {
            Ok(true) => {
                self.planner_draft.clear();
                self.on_view_changed(from);
            }
            Ok(false) => debug!("AppState::submit_draft: blank draft ignored"),
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Remove the selected row of the current list view
    pub fn remove_selected(&mut self) {
        let index = self.selection.selected_index;
        debug!(index, "AppState::remove_selected: called");
        if !self.current_view().is_list_view() || self.tracker.activities().is_empty() {
            debug!("AppState::remove_selected: nothing to remove");
            return;
        }
        match self.tracker.remove_activity(index) {
            Ok(removed) => {
                info!(%removed, index, "Removed activity from list view");
                self.selection.clamp(self.tracker.activities().len());
            }
            Err(TrackerError::IndexOutOfRange { .. }) => {
                self.selection.clamp(self.tracker.activities().len());
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn on_view_changed(&mut self, from: View) {
        debug!(?from, to = ?self.current_view(), "AppState::on_view_changed: called");
        if from == View::Planner {
            self.planner_draft.clear();
        }
        if self.interaction_mode == InteractionMode::DraftInput {
            self.interaction_mode = InteractionMode::Normal;
        }
        self.selection.clamp(self.tracker.activities().len());
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "AppState::set_error: called");
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
