//! The four logged-in screens

use tracing::debug;

/// Which screen is currently displayed once the user is logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    /// Draft and add activities (default after login)
    #[default]
    Planner,
    /// Resource repository list
    Repository,
    /// Collaborative learning list
    Collaboration,
    /// Progress readout
    Analytics,
}

impl View {
    /// All views in navigation-bar order
    pub const ALL: [View; 4] = [Self::Planner, Self::Repository, Self::Collaboration, Self::Analytics];

    /// Full screen title
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Planner => "Study Planner",
            Self::Repository => "Resource Repository",
            Self::Collaboration => "Collaborative Learning",
            Self::Analytics => "Progress Analytics",
        }
    }

    /// Compact label for the navigation bar
    pub fn tab_label(self) -> &'static str {
        match self {
            Self::Planner => "Planner",
            Self::Repository => "Repository",
            Self::Collaboration => "Collaboration",
            Self::Analytics => "Analytics",
        }
    }

    /// Position in the navigation bar (0-based)
    pub fn position(self) -> usize {
        match self {
            Self::Planner => 0,
            Self::Repository => 1,
            Self::Collaboration => 2,
            Self::Analytics => 3,
        }
    }

    /// View at a navigation-bar position
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Self {
        debug!(?self, "View::next: called");
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Self {
        debug!(?self, "View::prev: called");
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parse a `:command` name to a View
    ///
    /// Accepts the full name, the short alias, or the tab number.
    pub fn from_command(cmd: &str) -> Option<Self> {
        debug!(%cmd, "View::from_command: called");
        match cmd.trim().to_lowercase().as_str() {
            "planner" | "plan" | "p" | "1" => Some(Self::Planner),
            "repository" | "repo" | "r" | "2" => Some(Self::Repository),
            "collaboration" | "collab" | "c" | "3" => Some(Self::Collaboration),
            "analytics" | "progress" | "a" | "4" => Some(Self::Analytics),
            _ => None,
        }
    }

    /// Whether this view renders the activity list with per-row delete
    pub fn is_list_view(self) -> bool {
        !matches!(self, Self::Analytics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_planner() {
        assert_eq!(View::default(), View::Planner);
    }

    #[test]
    fn test_position_round_trip() {
        for view in View::ALL {
            assert_eq!(View::from_position(view.position()), Some(view));
        }
        assert_eq!(View::from_position(4), None);
    }

    #[test]
    fn test_cycling() {
        assert_eq!(View::Planner.next(), View::Repository);
        assert_eq!(View::Analytics.next(), View::Planner);
        assert_eq!(View::Planner.prev(), View::Analytics);
        assert_eq!(View::Collaboration.prev(), View::Repository);
    }

    #[test]
    fn test_from_command() {
        assert_eq!(View::from_command("planner"), Some(View::Planner));
        assert_eq!(View::from_command(" Repo "), Some(View::Repository));
        assert_eq!(View::from_command("collab"), Some(View::Collaboration));
        assert_eq!(View::from_command("4"), Some(View::Analytics));
        assert_eq!(View::from_command("settings"), None);
    }

    #[test]
    fn test_analytics_has_no_list() {
        assert!(View::Planner.is_list_view());
        assert!(View::Repository.is_list_view());
        assert!(View::Collaboration.is_list_view());
        assert!(!View::Analytics.is_list_view());
    }
}
