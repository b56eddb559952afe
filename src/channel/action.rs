use std::fmt;

use reqwest::StatusCode;

use crate::{
    Res,
    channel::Channel,
    info,
    types::{ActionData, ActionRequest, UnitRef},
    utils, warning,
};

pub const RESULT_OK: &str = "triggi/ok";
pub const RESULT_UNKNOWN_ACTION: &str = "channel/unknown-action";
pub const RESULT_INTERNAL_ERROR: &str = "triggi/channel-internal-error";

pub const ACTION_ADD_ITEM: &str = "addItem";

/// Expected failures of an action, reported to the platform as result codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    UnknownAction(String),
}

impl ActionError {
    pub fn code(&self) -> &'static str {
        match self {
            ActionError::UnknownAction(_) => RESULT_UNKNOWN_ACTION,
        }
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::UnknownAction(name) => write!(f, "unknown action: {}", name),
        }
    }
}

impl std::error::Error for ActionError {}

/// Result of running an action, consumed by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Ok,
    Domain(ActionError),
    Internal(String),
}

impl ActionOutcome {
    pub fn code(&self) -> &'static str {
        match self {
            ActionOutcome::Ok => RESULT_OK,
            ActionOutcome::Domain(e) => e.code(),
            ActionOutcome::Internal(_) => RESULT_INTERNAL_ERROR,
        }
    }

    /// Domain errors are a normal answer of the action protocol; only
    /// internal errors change the HTTP status.
    pub fn status(&self) -> StatusCode {
        match self {
            ActionOutcome::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::OK,
        }
    }

    /// Wraps an unexpected failure, logging it.
    pub fn internal(err: impl fmt::Display) -> Self {
        warning!("action failed: {}", err);
        ActionOutcome::Internal(err.to_string())
    }
}

/// Executes the capability named in `request.action_data.action` against the
/// todo-list API on behalf of the caller.
pub async fn dispatch(
    channel: &Channel,
    request: &ActionRequest,
    authorization: &str,
) -> ActionOutcome {
    let data = &request.action_data;
    let result = match data.action.as_str() {
        ACTION_ADD_ITEM => add_item(channel, request.unit.as_ref(), data, authorization).await,
        other => {
            let err = ActionError::UnknownAction(other.to_string());
            info!("{}", err);
            return ActionOutcome::Domain(err);
        }
    };

    match result {
        Ok(()) => ActionOutcome::Ok,
        Err(e) => ActionOutcome::internal(e),
    }
}

async fn add_item(
    channel: &Channel,
    unit: Option<&UnitRef>,
    data: &ActionData,
    authorization: &str,
) -> Res<()> {
    let internal_id = &unit.ok_or("missing unit")?.internal_id;
    let list_id = utils::entity_id_from_internal_id(internal_id)
        .ok_or_else(|| format!("malformed internalId '{}'", internal_id))?;
    let item_name = data
        .params
        .get("itemName")
        .and_then(|v| v.as_str())
        .ok_or("missing actionData.itemName")?;

    channel
        .todolist
        .create_item(list_id, item_name, authorization)
        .await?;
    Ok(())
}
