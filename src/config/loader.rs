//! Settings for postdeck: TOML file, environment and command line.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default posts collection endpoint.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com/posts";

/// Default recipe catalogue endpoint.
pub const DEFAULT_RECIPES_URL: &str = "https://dummyjson.com/recipes";

/// Why the settings could not be resolved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// File that was being read.
        path: PathBuf,
        /// I/O error text.
        reason: String,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// File that was being parsed.
        path: PathBuf,
        /// Decoder message, with line and column.
        reason: String,
    },

    /// A setting parsed but its value is unusable.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Config key as written in the file.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Contents of `config.toml`. Every key is optional.
///
/// Corresponds to `~/.config/postdeck/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Posts collection endpoint.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Recipe catalogue endpoint.
    #[serde(default)]
    pub recipes_url: Option<String>,

    /// Rows per page on startup.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Author id sent with created posts.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Signed-in user's email.
    #[serde(default)]
    pub user_email: Option<String>,

    /// How long notices stay visible.
    #[serde(default)]
    pub notice_seconds: Option<u64>,

    /// Per-request HTTP timeout.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Effective settings once every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Base URL of the posts collection.
    pub api_url: String,
    /// Base URL of the recipe catalogue.
    pub recipes_url: String,
    /// Rows per page on startup.
    pub page_size: usize,
    /// Owner id sent with created posts.
    pub user_id: u64,
    /// `None` until some layer supplies one; startup refuses to continue
    /// without it.
    pub user_email: Option<String>,
    /// Seconds a notice stays in the status bar.
    pub notice_seconds: u64,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colored output. Only the CLI turns it off.
    pub color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            recipes_url: DEFAULT_RECIPES_URL.to_string(),
            page_size: 10,
            user_id: 1,
            user_email: None,
            notice_seconds: 6,
            request_timeout_secs: 30,
            log_file_path: default_log_path(),
            color: true,
        }
    }
}

impl ResolvedConfig {
    /// [`ResolvedConfig::notice_seconds`] as a duration.
    pub fn notice_ttl(&self) -> Duration {
        Duration::from_secs(self.notice_seconds)
    }

    /// [`ResolvedConfig::request_timeout_secs`] as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Reject values that parse but make no sense.
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("page_size", self.page_size as u64),
            ("notice_seconds", self.notice_seconds),
            ("request_timeout_secs", self.request_timeout_secs),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must be greater than 0".to_string(),
                });
            }
        }
        for (key, value) in [("api_url", &self.api_url), ("recipes_url", &self.recipes_url)] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Where logs go unless `log_file_path` says otherwise.
///
/// Returns `~/.local/state/postdeck/postdeck.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// Without a state directory the log lands in the working directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("postdeck").join("postdeck.log")
    } else {
        PathBuf::from("postdeck.log")
    }
}

/// Read and parse the file at `path`.
///
/// A missing file yields `Ok(None)`.
///
/// # Errors
///
/// [`ConfigError::ReadError`] or [`ConfigError::ParseError`] for a file that
/// exists but is unusable.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// `config.toml` under the platform config directory.
///
/// Returns `~/.config/postdeck/config.toml` on Unix, appropriate path on other platforms.
/// `None` when the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("postdeck").join("config.toml"))
}

/// Locate and read the config file.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `POSTDECK_CONFIG` environment variable
/// 3. Default path `~/.config/postdeck/config.toml`
///
/// The first location that is set wins, even if no file exists there.
///
/// # Errors
///
/// Same as [`load_config_file`].
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("POSTDECK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Layer environment variables over file values.
///
/// Checks for:
/// - `POSTDECK_API_URL`: Override the posts endpoint
/// - `POSTDECK_USER`: Override the user email
///
/// Empty values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

    if let Some(url) = non_empty("POSTDECK_API_URL") {
        config.api_url = url;
    }
    if let Some(email) = non_empty("POSTDECK_USER") {
        config.user_email = Some(email);
    }

    config
}

/// Fill every key the file leaves out with its default.
///
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        api_url: config.api_url.unwrap_or(defaults.api_url),
        recipes_url: config.recipes_url.unwrap_or(defaults.recipes_url),
        page_size: config.page_size.unwrap_or(defaults.page_size),
        user_id: config.user_id.unwrap_or(defaults.user_id),
        user_email: config.user_email.or(defaults.user_email),
        notice_seconds: config.notice_seconds.unwrap_or(defaults.notice_seconds),
        request_timeout_secs: config
            .request_timeout_secs
            .unwrap_or(defaults.request_timeout_secs),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        color: defaults.color,
    }
}

/// Values given on the command line. `None` means "not passed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--api-url`.
    pub api_url: Option<String>,
    /// `--page-size`.
    pub page_size: Option<usize>,
    /// `--user`.
    pub user_email: Option<String>,
    /// `--no-color`.
    pub no_color: bool,
}

/// Layer command-line values over everything else. Flags that were not
/// passed leave the config alone.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(size) = cli.page_size {
        config.page_size = size;
    }
    if let Some(email) = cli.user_email {
        config.user_email = Some(email);
    }
    if cli.no_color {
        config.color = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_postdeck_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("postdeck.log"),
            "Default log path should end with 'postdeck.log', got: {:?}",
            path
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }
}
