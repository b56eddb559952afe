use crate::{
    Res,
    channel::Channel,
    success,
    types::{StateReport, Unit},
    utils,
};

/// Links a new channel account.
///
/// Registers one unit per todo-list, reports the initial state of every unit,
/// then registers the webhook that routes future todo-list events for this
/// user back to `channel_account_id`.
pub async fn link(channel: &Channel, channel_account_id: &str, authorization: &str) -> Res<()> {
    let lists = channel.todolist.get_lists(authorization).await?;

    let units: Vec<Unit> = lists.iter().map(utils::list_to_unit).collect();
    channel.platform.put_units(channel_account_id, &units).await?;

    let reports: Vec<StateReport> = lists.iter().map(utils::list_to_state_report).collect();
    channel.platform.push_states(&reports).await?;

    let url = channel.config.webhook_url(channel_account_id);
    channel.todolist.register_webhook(&url, authorization).await?;

    success!(
        "linked channel account {} ({} units)",
        channel_account_id,
        units.len()
    );
    Ok(())
}

/// Deregisters the todo-list webhook. Platform units are left in place.
pub async fn unlink(channel: &Channel, channel_account_id: &str, authorization: &str) -> Res<()> {
    channel.todolist.deregister_webhook(authorization).await?;

    success!("unlinked channel account {}", channel_account_id);
    Ok(())
}

/// Re-registers the unit list of an account from the current todo-lists.
pub async fn refresh(channel: &Channel, channel_account_id: &str, authorization: &str) -> Res<()> {
    let lists = channel.todolist.get_lists(authorization).await?;

    let units: Vec<Unit> = lists.iter().map(utils::list_to_unit).collect();
    channel.platform.put_units(channel_account_id, &units).await?;

    success!(
        "refreshed channel account {} ({} units)",
        channel_account_id,
        units.len()
    );
    Ok(())
}
