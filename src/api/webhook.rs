use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    api::accept,
    channel::{Channel, spawn_after_response, webhook},
    info,
    types::TodoWebhook,
};

/// Acknowledges a todo-list event immediately and relays it afterwards.
/// Bodies that cannot be decoded are acknowledged too and only logged.
pub async fn todolist_webhook(
    State(channel): State<Arc<Channel>>,
    Path(channel_account_id): Path<String>,
    body: Result<Json<TodoWebhook>, JsonRejection>,
) -> StatusCode {
    let label = format!("webhook for {}", channel_account_id);
    let Some(body) = accept(&label, body) else {
        return StatusCode::OK;
    };
    info!("{}: {:?} {:?}", label, body.entity_type, body.event);

    spawn_after_response(label, async move {
        webhook::handle(&channel, &channel_account_id, body).await
    });
    StatusCode::OK
}
