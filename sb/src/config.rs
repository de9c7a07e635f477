//! StudyBuddy configuration types and loading
//!
//! Configuration only tunes the terminal front end and logging. Activities
//! and the session are never written anywhere.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = ".studybuddy.yml";

/// Lowest accepted event poll interval
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Main StudyBuddy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Terminal UI settings
    pub tui: TuiConfig,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `./.studybuddy.yml`, then
    /// `~/.config/studybuddy/studybuddy.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(user_config) = Self::user_config_path()
            && user_config.exists()
        {
            match Self::load_from_file(&user_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read only the log level, before logging is initialized
    ///
    /// Errors are swallowed; the full `load` reports them once logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let candidates = match config_path {
            Some(path) => vec![path.clone()],
            None => [Some(PathBuf::from(LOCAL_CONFIG_FILE)), Self::user_config_path()]
                .into_iter()
                .flatten()
                .collect(),
        };

        candidates
            .iter()
            .filter(|p| p.exists())
            .find_map(|p| Self::load_from_file(p).ok())
            .and_then(|c| c.log_level)
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("studybuddy").join("studybuddy.yml"))
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let mut config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.tui.clamp_tick_rate();

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// How long the event pump waits for input before emitting a tick
    #[serde(rename = "tick-rate-ms")]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl TuiConfig {
    /// Poll interval, never below `MIN_TICK_RATE_MS`
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }

    /// Raise a too-small tick rate to the minimum
    fn clamp_tick_rate(&mut self) {
        if self.tick_rate_ms < MIN_TICK_RATE_MS {
            tracing::warn!(
                "tick-rate-ms {} is below the minimum, using {}",
                self.tick_rate_ms,
                MIN_TICK_RATE_MS
            );
            self.tick_rate_ms = MIN_TICK_RATE_MS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.log_level.is_none());
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config("log-level: debug\ntui:\n  tick-rate-ms: 100\n");
        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.tui.tick_rate_ms, 100);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let file = write_config("log-level: warn\n");
        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_explicit_missing_file_errors() {
        let path = PathBuf::from("/nonexistent/studybuddy.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let file = write_config("tui: [not, a, map]\n");
        assert!(Config::load(Some(&file.path().to_path_buf())).is_err());
    }

    #[test]
    fn test_load_log_level() {
        let file = write_config("log-level: trace\n");
        assert_eq!(
            Config::load_log_level(Some(&file.path().to_path_buf())).as_deref(),
            Some("trace")
        );

        let missing = PathBuf::from("/nonexistent/studybuddy.yml");
        assert!(Config::load_log_level(Some(&missing)).is_none());
    }

    #[test]
    fn test_zero_tick_rate_is_clamped() {
        let file = write_config("tui:\n  tick-rate-ms: 0\n");
        let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(config.tui.tick_rate_ms, MIN_TICK_RATE_MS);
        assert_eq!(config.tui.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));
    }

    #[test]
    fn test_tick_rate_accessor_clamps_unvalidated_values() {
        let tui = TuiConfig { tick_rate_ms: 0 };
        assert_eq!(tui.tick_rate(), Duration::from_millis(MIN_TICK_RATE_MS));

        let tui = TuiConfig { tick_rate_ms: 500 };
        assert_eq!(tui.tick_rate(), Duration::from_millis(500));
    }

    /// Runs with a temp dir as cwd and as the user config root, restoring both on drop
    struct IsolatedDirs {
        _cwd: TempDir,
        _home: TempDir,
        prev_cwd: PathBuf,
        prev_home: Option<std::ffi::OsString>,
        prev_xdg: Option<std::ffi::OsString>,
    }

    impl IsolatedDirs {
        fn new() -> Self {
            let cwd = TempDir::new().expect("Failed to create temp dir");
            let home = TempDir::new().expect("Failed to create temp dir");
            let prev_cwd = std::env::current_dir().expect("cwd");
            let prev_home = std::env::var_os("HOME");
            let prev_xdg = std::env::var_os("XDG_CONFIG_HOME");

            std::env::set_current_dir(cwd.path()).expect("chdir");
            // SAFETY: tests touching the environment run under #[serial]
            unsafe {
                std::env::set_var("HOME", home.path());
                std::env::set_var("XDG_CONFIG_HOME", home.path().join(".config"));
            }

            Self {
                _cwd: cwd,
                _home: home,
                prev_cwd,
                prev_home,
                prev_xdg,
            }
        }

        fn write_local(&self, yaml: &str) {
            fs::write(LOCAL_CONFIG_FILE, yaml).expect("write local config");
        }

        fn write_user(&self, yaml: &str) {
            let path = Config::user_config_path().expect("user config dir");
            fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
            fs::write(path, yaml).expect("write user config");
        }
    }

    impl Drop for IsolatedDirs {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.prev_cwd);
            // SAFETY: see IsolatedDirs::new
            unsafe {
                match &self.prev_home {
                    Some(v) => std::env::set_var("HOME", v),
                    None => std::env::remove_var("HOME"),
                }
                match &self.prev_xdg {
                    Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                    None => std::env::remove_var("XDG_CONFIG_HOME"),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_local_config_is_found() {
        let dirs = IsolatedDirs::new();
        dirs.write_local("log-level: debug\ntui:\n  tick-rate-ms: 40\n");
        dirs.write_user("log-level: error\n");

        let config = Config::load(None).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.tui.tick_rate_ms, 40);
        assert_eq!(Config::load_log_level(None).as_deref(), Some("debug"));
    }

    #[test]
    #[serial]
    fn test_user_config_used_without_local() {
        let dirs = IsolatedDirs::new();
        dirs.write_user("log-level: warn\n");

        let config = Config::load(None).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("warn"));
        assert_eq!(Config::load_log_level(None).as_deref(), Some("warn"));
    }

    #[test]
    #[serial]
    fn test_broken_local_config_falls_through() {
        let dirs = IsolatedDirs::new();
        dirs.write_local("tui: [not, a, map]\n");
        dirs.write_user("log-level: info\ntui:\n  tick-rate-ms: 75\n");

        let config = Config::load(None).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.tui.tick_rate_ms, 75);
        assert_eq!(Config::load_log_level(None).as_deref(), Some("info"));
    }

    #[test]
    #[serial]
    fn test_broken_local_config_without_user_uses_defaults() {
        let dirs = IsolatedDirs::new();
        dirs.write_local("log-level: [oops\n");

        let config = Config::load(None).unwrap();
        assert!(config.log_level.is_none());
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    #[serial]
    fn test_defaults_when_no_config_exists() {
        let _dirs = IsolatedDirs::new();

        let config = Config::load(None).unwrap();
        assert!(config.log_level.is_none());
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert!(Config::load_log_level(None).is_none());
    }
}
