use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Unit type registered with the platform for every todo-list.
pub const UNIT_TYPE_TODOLIST: &str = "todolist";

// Todo-list API

/// Accepts ids sent either as JSON strings or as JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s,
        Id::Num(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemState {
    Pending,
    Done,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Item events only need the parent list and the title, so `id` and
/// `state` may be absent (e.g. in `removed` payloads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub list_id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub state: ItemState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(deserialize_with = "string_or_number")]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterWebhookRequest {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    List,
    Item,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookEvent {
    Created,
    Updated,
    Removed,
    #[serde(other)]
    Unknown,
}

/// Body of a webhook call made by the todo-list API.
///
/// `entity` is a [`TodoList`] or a [`TodoItem`] depending on `entity_type`, so
/// it is kept raw until the type is known.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoWebhook {
    pub entity_type: EntityType,
    pub event: WebhookEvent,
    pub entity: Value,
}

// Platform API

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub name: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub internal_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStates {
    pub uncompleted_item_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateReport {
    pub internal_id: String,
    pub states: ListStates,
}

/// State update pushed for a single unit when one of its items changes.
///
/// `event` carries exactly one flag such as `itemCreated: 1`, flattened into
/// the top level of the body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStateUpdate {
    #[serde(flatten)]
    pub event: BTreeMap<String, u8>,
    pub list_name: String,
    pub item_name: String,
    pub uncompleted_item_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    pub access_token: String,
}

// Inbound platform webhooks

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountLinked {
    pub channel_account_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUnlinked {
    pub channel_account_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthDetails {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub channel_account_id: String,
    #[serde(default)]
    pub auth_details: Option<AuthDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionData {
    pub action: String,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRef {
    pub internal_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub action_data: ActionData,
    /// Only read by capabilities that act on a unit.
    #[serde(default)]
    pub unit: Option<UnitRef>,
}
