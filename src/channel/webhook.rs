use crate::{
    Res,
    channel::Channel,
    info,
    types::{EntityType, TodoItem, TodoList, TodoWebhook, WebhookEvent},
    utils,
};

/// Translates a todo-list event into platform unit or state calls.
///
/// Unsupported entity types and events are logged and dropped.
pub async fn handle(channel: &Channel, channel_account_id: &str, webhook: TodoWebhook) -> Res<()> {
    match webhook.entity_type {
        EntityType::Item => {
            let item: TodoItem = serde_json::from_value(webhook.entity)?;
            handle_item(channel, channel_account_id, webhook.event, &item).await
        }
        EntityType::List => {
            let list: TodoList = serde_json::from_value(webhook.entity)?;
            handle_list(channel, channel_account_id, webhook.event, &list).await
        }
        EntityType::Unknown => {
            info!("unhandled entity type for {}", channel_account_id);
            Ok(())
        }
    }
}

/// Pushes an item event together with the recomputed pending count of its
/// list. The access token is fetched fresh from the platform every time.
async fn handle_item(
    channel: &Channel,
    channel_account_id: &str,
    event: WebhookEvent,
    item: &TodoItem,
) -> Res<()> {
    let Some(event_name) = utils::item_event_name(event) else {
        info!("unhandled item event {:?}", event);
        return Ok(());
    };

    let account = channel.platform.get_channel_account(channel_account_id).await?;
    let authorization = utils::bearer(&account.access_token);

    let list = channel.todolist.get_list(&item.list_id, &authorization).await?;

    let update = utils::item_state_update(event_name, &list, item);
    channel
        .platform
        .push_unit_state(&utils::internal_id_for_item(item), &update)
        .await?;
    Ok(())
}

async fn handle_list(
    channel: &Channel,
    channel_account_id: &str,
    event: WebhookEvent,
    list: &TodoList,
) -> Res<()> {
    let unit = utils::list_to_unit(list);
    match event {
        WebhookEvent::Created => channel.platform.add_unit(channel_account_id, &unit).await?,
        WebhookEvent::Updated => {
            channel
                .platform
                .update_units(channel_account_id, std::slice::from_ref(&unit))
                .await?
        }
        WebhookEvent::Removed => {
            channel
                .platform
                .delete_units(channel_account_id, &unit.internal_id)
                .await?
        }
        WebhookEvent::Unknown => info!("unhandled list event {:?}", event),
    }
    Ok(())
}
