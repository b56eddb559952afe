//! Configuration management for the tasklink channel.
//!
//! Configuration is read from environment variables, optionally seeded from a
//! `.env` file in the local data directory. It is resolved once at startup into
//! a [`Config`] value which is then handed to every collaborator; nothing reads
//! the environment after that.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:4924";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `tasklink` directory if it doesn't exist and loads variables
/// from `tasklink/.env` inside it. Variables already present in the process
/// environment are not overridden. A missing `.env` file is not an error, so
/// the channel can run from a plain environment (containers, CI).
///
/// The file is looked up in:
/// - Linux: `~/.local/share/tasklink/.env`
/// - macOS: `~/Library/Application Support/tasklink/.env`
/// - Windows: `%LOCALAPPDATA%/tasklink/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tasklink/.env");
    path
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set", name),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Static channel configuration, built once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to, e.g. `0.0.0.0:4924`.
    pub server_addr: String,
    /// Base URL of the todo-list REST API.
    pub todolist_base_url: String,
    /// Public URL at which both upstream services reach this channel.
    pub fulfillment_base_url: String,
    /// Unguessable path segment for inbound todo-list webhooks.
    pub webhook_secret: String,
    /// Base URL of the platform REST API.
    pub platform_base_url: String,
    pub platform_channel_id: String,
    /// Static channel-level bearer token for the platform API.
    pub platform_token: String,
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// `SERVER_ADDRESS` falls back to [`DEFAULT_SERVER_ADDRESS`]; every other
    /// variable is required.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first unset variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server_addr: env::var("SERVER_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string()),
            todolist_base_url: required("TODOLIST_API_URL")?,
            fulfillment_base_url: required("FULFILLMENT_BASE_URL")?,
            webhook_secret: required("TODOLIST_WEBHOOK_SECRET")?,
            platform_base_url: required("PLATFORM_API_URL")?,
            platform_channel_id: required("PLATFORM_CHANNEL_ID")?,
            platform_token: required("PLATFORM_TOKEN")?,
        })
    }

    /// Path prefix the todo-list webhooks are mounted under.
    pub fn webhook_path(&self) -> String {
        format!("/webhooks/{}", self.webhook_secret)
    }

    /// Callback URL registered with the todo-list API for a channel account.
    pub fn webhook_url(&self, channel_account_id: &str) -> String {
        format!(
            "{base}{path}/{ca}",
            base = self.fulfillment_base_url.trim_end_matches('/'),
            path = self.webhook_path(),
            ca = channel_account_id
        )
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
