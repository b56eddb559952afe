//! # Channel
//!
//! Route logic of the relay, independent of HTTP extraction. Each operation
//! issues its downstream calls strictly in sequence and stops at the first
//! failure; nothing already done is rolled back.
//!
//! Operations triggered by webhooks run after the caller has been answered,
//! see [`spawn_after_response`]. Only [`action::dispatch`] reports an outcome
//! back to its caller.

pub mod account;
pub mod action;
pub mod webhook;

use std::{future::Future, sync::Arc};

use reqwest::Client;

use crate::{Res, config::Config, platform::PlatformClient, todolist::TodolistClient, warning};

/// Shared, read-only handler state: the configuration and both API clients.
#[derive(Debug, Clone)]
pub struct Channel {
    pub config: Arc<Config>,
    pub todolist: TodolistClient,
    pub platform: PlatformClient,
}

impl Channel {
    pub fn new(config: Arc<Config>) -> Self {
        let client = Client::new();
        let todolist = TodolistClient::new(client.clone(), config.todolist_base_url.clone());
        let platform = PlatformClient::new(
            client,
            config.platform_base_url.clone(),
            config.platform_channel_id.clone(),
            config.platform_token.clone(),
        );

        Self {
            config,
            todolist,
            platform,
        }
    }
}

/// Runs `work` detached from the request that triggered it.
///
/// The HTTP response is sent without waiting for `work`; a failure is only
/// logged, tagged with `label`.
pub fn spawn_after_response<F>(label: String, work: F)
where
    F: Future<Output = Res<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = work.await {
            warning!("{} failed: {}", label, e);
        }
    });
}
