//! Todo-list channel library
//!
//! This library implements a webhook relay ("channel") between a todo-list
//! REST API and a home-automation platform. Todo-lists become platform units,
//! list and item changes become unit and state updates, and platform actions
//! become todo-list API calls.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints called by the platform and the todo-list API
//! - `channel` - route logic: account lifecycle, actions, event translation
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `platform` - Platform API client
//! - `server` - Router construction and HTTP listener
//! - `todolist` - Todo-list API client
//! - `types` - Data structures of both APIs and of inbound requests
//! - `utils` - Translators between todo-list entities and platform units
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tasklink::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> tasklink::Res<()> {
//!     config::load_env().await?;
//!     let config = Arc::new(config::Config::from_env()?);
//!     server::start_api_server(config).await
//! }
//! ```

pub mod api;
pub mod channel;
pub mod cli;
pub mod config;
pub mod platform;
pub mod server;
pub mod todolist;
pub mod types;
pub mod utils;

/// Result type used by handler-level flows.
///
/// The boxed error keeps `Send + Sync` so failures can cross the detached
/// tasks that run after a response has been sent.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Logs an informational line prefixed with a blue `o`.
///
/// ```
/// info!("registering webhook for {}", channel_account_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Logs a completed operation prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Logs a fatal error and exits the process with code 1.
///
/// Only for startup failures; request handling never terminates the process.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Logs a recoverable failure prefixed with a yellow `!`.
///
/// Downstream failures that happen after the caller was answered end up here.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
