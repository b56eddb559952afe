//! # API Module
//!
//! HTTP endpoints of the channel. Two parties call in:
//!
//! - **The platform** - account lifecycle, refresh and action requests, each
//!   carrying the end user's todo-list credentials in `Authorization`.
//! - **The todo-list API** - entity change notifications on the webhook URL
//!   registered while linking the account.
//!
//! ## Endpoints
//!
//! - [`account_linked`] - `POST /account-linked`
//! - [`account_unlinked`] - `POST /account-unlinked`
//! - [`refresh`] - `POST /refresh`
//! - [`action`] - `POST /action`
//! - [`todolist_webhook`] - `POST /webhooks/<secret>/{ca_id}`
//! - [`health`] - `GET /health`
//! - [`alive`] - `GET /`
//!
//! Every handler except [`action`] answers `200 OK` straight away and does its
//! downstream work afterwards; see [`crate::channel::spawn_after_response`].
//! They acknowledge undecodable bodies as well, logging them instead.

mod account;
mod action;
mod health;
mod webhook;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, header::AUTHORIZATION},
};

use crate::warning;

pub use account::{account_linked, account_unlinked, refresh};
pub use action::action;
pub use health::{alive, health};
pub use webhook::todolist_webhook;

/// The caller's `Authorization` header, passed through as-is.
fn authorization(headers: &HeaderMap) -> String {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Unwraps a decoded body, logging a rejection instead of answering with it.
fn accept<T>(label: &str, body: Result<Json<T>, JsonRejection>) -> Option<T> {
    match body {
        Ok(Json(body)) => Some(body),
        Err(rejection) => {
            warning!("{}: ignoring body: {}", label, rejection.body_text());
            None
        }
    }
}
