//! Root controller for session, navigation and the activity list
//!
//! `Tracker` is the single owner and writer of application state. Front ends
//! hold it and request changes through its methods; they never mutate the
//! list or the current view directly.

use thiserror::Error;
use tracing::{debug, info};

use super::activity::ActivityList;
use super::analytics::progress_percent;
use super::session::{Credentials, LoginError, Session};
use super::text::is_blank;
use super::view::View;

/// Errors from tracker operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Activity index {index} out of range (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Overall state machine position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    LoggedOut,
    Planner,
    Repository,
    Collaboration,
    Analytics,
}

impl From<View> for Phase {
    fn from(view: View) -> Self {
        match view {
            View::Planner => Self::Planner,
            View::Repository => Self::Repository,
            View::Collaboration => Self::Collaboration,
            View::Analytics => Self::Analytics,
        }
    }
}

/// Session, current view and activity list for one run of the app
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    session: Session,
    current_view: View,
    activities: ActivityList,
}

impl Tracker {
    pub fn new() -> Self {
        debug!("Tracker::new: called");
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn activities(&self) -> &[String] {
        self.activities.as_slice()
    }

    pub fn phase(&self) -> Phase {
        if self.is_logged_in() {
            self.current_view.into()
        } else {
            Phase::LoggedOut
        }
    }

    /// Percentage shown by the analytics view
    pub fn progress(&self) -> u8 {
        progress_percent(self.activities.as_slice())
    }

    /// Attempt to log in; the session stays open once opened
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), LoginError> {
        debug!(%username, "Tracker::login: called");
        self.session.login(Credentials::new(username, password))
    }

    /// Switch to `view`; unrestricted once logged in
    pub fn navigate(&mut self, view: View) -> Result<(), TrackerError> {
        debug!(?view, from = ?self.current_view, "Tracker::navigate: called");
        self.ensure_logged_in()?;
        if self.current_view != view {
            info!(from = ?self.current_view, to = ?view, "Navigating");
            self.current_view = view;
        }
        Ok(())
    }

    /// Add a planner draft
    ///
    /// Blank drafts are ignored and return `Ok(false)`. Otherwise the untrimmed
    /// draft is appended, the view moves to Repository and `Ok(true)` is returned.
    pub fn add_activity(&mut self, draft: &str) -> Result<bool, TrackerError> {
        debug!(%draft, "Tracker::add_activity: called");
        self.ensure_logged_in()?;
        if is_blank(draft) {
            debug!("Tracker::add_activity: blank draft, ignoring");
            return Ok(false);
        }
        self.activities.push(draft);
        info!(activity = %draft, total = self.activities.len(), "Activity added");
        self.navigate(View::Repository)?;
        Ok(true)
    }

    /// Remove the activity at `index`
    pub fn remove_activity(&mut self, index: usize) -> Result<String, TrackerError> {
        debug!(index, "Tracker::remove_activity: called");
        self.ensure_logged_in()?;
        let len = self.activities.len();
        let removed = self
            .activities
            .remove(index)
            .ok_or(TrackerError::IndexOutOfRange { index, len })?;
        info!(activity = %removed, index, remaining = len - 1, "Activity removed");
        Ok(removed)
    }

    fn ensure_logged_in(&self) -> Result<(), TrackerError> {
        if self.is_logged_in() {
            Ok(())
        } else {
            debug!("Tracker::ensure_logged_in: rejected, logged out");
            Err(TrackerError::NotLoggedIn)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logged_in() -> Tracker {
        let mut tracker = Tracker::new();
        tracker.login("alice", "secret").unwrap();
        tracker
    }

    #[test]
    fn test_initial_state() {
        let tracker = Tracker::new();
        assert_eq!(tracker.phase(), Phase::LoggedOut);
        assert_eq!(tracker.current_view(), View::Planner);
        assert!(tracker.activities().is_empty());
    }

    #[test]
    fn test_login_enters_planner() {
        let tracker = logged_in();
        assert_eq!(tracker.phase(), Phase::Planner);
    }

    #[test]
    fn test_operations_require_login() {
        let mut tracker = Tracker::new();
        assert_eq!(tracker.navigate(View::Analytics), Err(TrackerError::NotLoggedIn));
        assert_eq!(tracker.add_activity("x"), Err(TrackerError::NotLoggedIn));
        assert_eq!(tracker.remove_activity(0), Err(TrackerError::NotLoggedIn));
        assert_eq!(tracker.phase(), Phase::LoggedOut);
    }

    #[test]
    fn test_add_navigates_to_repository() {
        let mut tracker = logged_in();
        assert_eq!(tracker.add_activity("Read chapter 1"), Ok(true));
        assert_eq!(tracker.activities(), ["Read chapter 1"]);
        assert_eq!(tracker.phase(), Phase::Repository);
    }

    #[test]
    fn test_blank_add_is_noop() {
        let mut tracker = logged_in();
        assert_eq!(tracker.add_activity("   "), Ok(false));
        assert!(tracker.activities().is_empty());
        assert_eq!(tracker.current_view(), View::Planner);
    }

    #[test]
    fn test_byte_order_mark_draft_is_blank() {
        let mut tracker = logged_in();
        assert_eq!(tracker.add_activity("\u{FEFF}"), Ok(false));
        assert!(tracker.activities().is_empty());
        assert_eq!(tracker.current_view(), View::Planner);

        // U+0085 is not ECMAScript whitespace, so it is kept
        assert_eq!(tracker.add_activity("\u{0085}"), Ok(true));
        assert_eq!(tracker.activities(), ["\u{0085}"]);
    }

    #[test]
    fn test_add_from_other_view_still_lands_on_repository() {
        let mut tracker = logged_in();
        tracker.navigate(View::Analytics).unwrap();
        tracker.add_activity("x").unwrap();
        assert_eq!(tracker.current_view(), View::Repository);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut tracker = logged_in();
        tracker.add_activity("a").unwrap();
        assert_eq!(
            tracker.remove_activity(3),
            Err(TrackerError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(tracker.activities().len(), 1);
    }

    #[test]
    fn test_progress() {
        let mut tracker = logged_in();
        assert_eq!(tracker.progress(), 0);
        for a in ["a", "b", "c"] {
            tracker.add_activity(a).unwrap();
        }
        assert_eq!(tracker.progress(), 100);
    }

    #[test]
    fn test_navigate_same_view_is_idempotent() {
        let mut tracker = logged_in();
        tracker.navigate(View::Collaboration).unwrap();
        tracker.navigate(View::Collaboration).unwrap();
        assert_eq!(tracker.phase(), Phase::Collaboration);
    }
}
