//! Application state machine, independent of any front end

pub mod activity;
pub mod analytics;
pub mod session;
pub mod text;
pub mod tracker;
pub mod view;

pub use activity::ActivityList;
pub use analytics::progress_percent;
pub use session::{Credentials, LoginError, Session};
pub use text::is_blank;
pub use tracker::{Phase, Tracker, TrackerError};
pub use view::View;
