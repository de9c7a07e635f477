//! Login gate and session flag
//!
//! There is no credential store: any pair where both fields contain
//! something other than whitespace is accepted.

use thiserror::Error;
use tracing::{debug, info};

use super::text::is_blank;

/// Errors surfaced by the login form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Please enter both username and password.")]
    MissingCredentials,
}

/// Username/password pair as typed into the login form
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    pub fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }

    /// Both fields must contain something other than whitespace
    pub fn validate(&self) -> Result<(), LoginError> {
        if is_blank(self.username) || is_blank(self.password) {
            debug!("Credentials::validate: missing field");
            return Err(LoginError::MissingCredentials);
        }
        Ok(())
    }
}

/// Logged-in flag; moves from false to true once and never back
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Validate credentials and open the session
    pub fn login(&mut self, credentials: Credentials<'_>) -> Result<(), LoginError> {
        debug!(username = %credentials.username, "Session::login: called");
        credentials.validate()?;
        if !self.logged_in {
            info!(username = %credentials.username, "Session opened");
            self.logged_in = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_rejected() {
        for (user, pass) in [("", ""), ("alice", ""), ("", "pw"), ("   ", "pw"), ("alice", "\t ")] {
            assert_eq!(
                Credentials::new(user, pass).validate(),
                Err(LoginError::MissingCredentials),
                "{user:?}/{pass:?}"
            );
        }
    }

    #[test]
    fn test_byte_order_mark_is_rejected() {
        assert!(Credentials::new("\u{FEFF}", "pw").validate().is_err());
        assert!(Credentials::new("alice", "\u{0085}").validate().is_ok());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            LoginError::MissingCredentials.to_string(),
            "Please enter both username and password."
        );
    }

    #[test]
    fn test_failed_login_keeps_session_closed() {
        let mut session = Session::new();
        assert!(session.login(Credentials::new("alice", " ")).is_err());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_is_permanent() {
        let mut session = Session::new();
        session.login(Credentials::new("alice", "pw")).unwrap();
        assert!(session.is_logged_in());

        // A later bad attempt does not close the session
        assert!(session.login(Credentials::new("", "")).is_err());
        assert!(session.is_logged_in());
    }
}
