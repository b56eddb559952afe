use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

use crate::{
    api::{accept, authorization},
    channel::{Channel, account, spawn_after_response},
    info,
    types::{AccountLinked, AccountUnlinked, RefreshRequest},
    utils,
};

pub async fn account_linked(
    State(channel): State<Arc<Channel>>,
    headers: HeaderMap,
    body: Result<Json<AccountLinked>, JsonRejection>,
) -> StatusCode {
    let Some(body) = accept("account-linked", body) else {
        return StatusCode::OK;
    };
    info!("account-linked {}", body.channel_account_id);
    let authorization = authorization(&headers);

    spawn_after_response(
        format!("account-linked {}", body.channel_account_id),
        async move { account::link(&channel, &body.channel_account_id, &authorization).await },
    );
    StatusCode::OK
}

pub async fn account_unlinked(
    State(channel): State<Arc<Channel>>,
    headers: HeaderMap,
    body: Result<Json<AccountUnlinked>, JsonRejection>,
) -> StatusCode {
    let Some(body) = accept("account-unlinked", body) else {
        return StatusCode::OK;
    };
    info!("account-unlinked {}", body.channel_account_id);
    let authorization = authorization(&headers);

    spawn_after_response(
        format!("account-unlinked {}", body.channel_account_id),
        async move { account::unlink(&channel, &body.channel_account_id, &authorization).await },
    );
    StatusCode::OK
}

/// The token comes from `authDetails.accessToken` when the platform sends
/// one, otherwise from the caller's `Authorization` header.
pub async fn refresh(
    State(channel): State<Arc<Channel>>,
    headers: HeaderMap,
    body: Result<Json<RefreshRequest>, JsonRejection>,
) -> StatusCode {
    let Some(body) = accept("refresh", body) else {
        return StatusCode::OK;
    };
    info!("refresh {}", body.channel_account_id);
    let authorization = match &body.auth_details {
        Some(details) => utils::bearer(&details.access_token),
        None => authorization(&headers),
    };

    spawn_after_response(
        format!("refresh {}", body.channel_account_id),
        async move { account::refresh(&channel, &body.channel_account_id, &authorization).await },
    );
    StatusCode::OK
}
