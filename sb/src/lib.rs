//! StudyBuddy - terminal study planner
//!
//! A user logs in with any non-empty credentials, then moves between four
//! views that all read and edit one in-memory list of activities. Nothing is
//! persisted; quitting discards everything.
//!
//! # Modules
//!
//! - [`domain`] - session, navigation and activity list state machine
//! - [`tui`] - ratatui front end
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod domain;
pub mod tui;

pub use config::{Config, TuiConfig};
pub use domain::{ActivityList, LoginError, Phase, Tracker, TrackerError, View, progress_percent};
