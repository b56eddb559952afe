use std::{sync::Arc, time::Instant};

use axum::{
    Router,
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            STRICT_TRANSPORT_SECURITY, X_CONTENT_TYPE_OPTIONS, X_DNS_PREFETCH_CONTROL,
            X_FRAME_OPTIONS, X_XSS_PROTECTION,
        },
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{Res, api, channel::Channel, config::Config, info, success};

/// Builds the channel's router. The todo-list webhook route embeds the
/// configured secret, so calls with any other secret get a 404.
pub fn router(channel: Arc<Channel>) -> Router {
    let webhook_route = format!("{}/{{ca_id}}", channel.config.webhook_path());

    let mut router = Router::new()
        .route("/", get(api::alive))
        .route("/health", get(api::health))
        .route("/account-linked", post(api::account_linked))
        .route("/account-unlinked", post(api::account_unlinked))
        .route("/refresh", post(api::refresh))
        .route("/action", post(api::action))
        .route(&webhook_route, post(api::todolist_webhook))
        .layer(middleware::from_fn(log_request));

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::if_not_present(name, value));
    }

    router.with_state(channel)
}

/// Hardening headers added to every response.
fn security_headers() -> [(HeaderName, HeaderValue); 6] {
    [
        (X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")),
        (X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")),
        (X_DNS_PREFETCH_CONTROL, HeaderValue::from_static("off")),
        (X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")),
        (
            STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static("max-age=15552000; includeSubDomains"),
        ),
        (
            HeaderName::from_static("x-download-options"),
            HeaderValue::from_static("noopen"),
        ),
    ]
}

/// Access log line per inbound request.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

pub async fn start_api_server(config: Arc<Config>) -> Res<()> {
    let addr = config.server_addr.clone();
    let app = router(Arc::new(Channel::new(config)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("tasklink channel listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
