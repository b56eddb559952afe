use std::collections::BTreeMap;

use crate::types::{
    ItemState, ItemStateUpdate, ListStates, StateReport, TodoItem, TodoList, UNIT_TYPE_TODOLIST,
    Unit, WebhookEvent,
};

/// Composes the `owner_id.entity_id` identifier shared by both systems.
pub fn internal_id(owner_id: &str, entity_id: &str) -> String {
    format!("{}.{}", owner_id, entity_id)
}

pub fn internal_id_for_list(list: &TodoList) -> String {
    internal_id(&list.owner_id, &list.id)
}

/// Items have no unit of their own; they report against their parent list.
pub fn internal_id_for_item(item: &TodoItem) -> String {
    internal_id(&item.owner_id, &item.list_id)
}

/// Recovers the entity id (second segment) from an `owner_id.entity_id` value.
pub fn entity_id_from_internal_id(internal_id: &str) -> Option<&str> {
    internal_id.split('.').nth(1).filter(|id| !id.is_empty())
}

pub fn list_to_unit(list: &TodoList) -> Unit {
    Unit {
        name: list.title.clone(),
        unit_type: UNIT_TYPE_TODOLIST.to_string(),
        internal_id: internal_id_for_list(list),
    }
}

pub fn uncompleted_item_count(list: &TodoList) -> usize {
    list.items
        .iter()
        .filter(|item| item.state == ItemState::Pending)
        .count()
}

pub fn states_for_list(list: &TodoList) -> ListStates {
    ListStates {
        uncompleted_item_count: uncompleted_item_count(list),
    }
}

pub fn list_to_state_report(list: &TodoList) -> StateReport {
    StateReport {
        internal_id: internal_id_for_list(list),
        states: states_for_list(list),
    }
}

/// Maps a todo-list item event to the platform event name it triggers.
pub fn item_event_name(event: WebhookEvent) -> Option<&'static str> {
    match event {
        WebhookEvent::Created => Some("itemCreated"),
        WebhookEvent::Updated => Some("itemUpdated"),
        WebhookEvent::Removed => Some("itemRemoved"),
        WebhookEvent::Unknown => None,
    }
}

pub fn item_state_update(event_name: &str, list: &TodoList, item: &TodoItem) -> ItemStateUpdate {
    let mut event = BTreeMap::new();
    event.insert(event_name.to_string(), 1);

    ItemStateUpdate {
        event,
        list_name: list.title.clone(),
        item_name: item.title.clone(),
        uncompleted_item_count: uncompleted_item_count(list),
    }
}

/// Turns a raw access token into an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
