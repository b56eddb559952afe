use std::sync::Arc;

use crate::{config::Config, error, info, server};

/// Runs the channel until the listener fails. `addr` overrides
/// `SERVER_ADDRESS`.
pub async fn serve(addr: Option<String>) {
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };
    if let Some(addr) = addr {
        config.server_addr = addr;
    }

    info!(
        "todo-list webhooks will be delivered to {}",
        config.webhook_url("<channel-account>")
    );

    if let Err(e) = server::start_api_server(Arc::new(config)).await {
        error!("Server stopped: {}", e);
    }
}
