use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::{
    api::authorization,
    channel::{
        Channel,
        action::{ActionOutcome, dispatch},
    },
    info,
    types::ActionRequest,
};

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        (self.status(), self.code()).into_response()
    }
}

/// Runs a platform action and answers with its result code.
///
/// A body that cannot be decoded is an internal error, not a rejection, so
/// the platform always receives a result code.
pub async fn action(
    State(channel): State<Arc<Channel>>,
    headers: HeaderMap,
    body: Result<Json<ActionRequest>, JsonRejection>,
) -> ActionOutcome {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => return ActionOutcome::internal(rejection.body_text()),
    };

    info!(
        "action {} on {}",
        request.action_data.action,
        request
            .unit
            .as_ref()
            .map_or("<no unit>", |unit| unit.internal_id.as_str())
    );
    dispatch(&channel, &request, &authorization(&headers)).await
}
