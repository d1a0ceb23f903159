use std::sync::Arc;

use anyhow::Context;

use stockyard_api::app::{build_app, services, AppServices};
use stockyard_reports::PlainTextRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockyard_observability::init();

    let lock_timeout =
        services::lock_timeout_from(std::env::var("LOCK_TIMEOUT_MS").ok().as_deref())?;

    let app = build_app(Arc::new(AppServices::new(
        Box::new(PlainTextRenderer),
        lock_timeout,
    )));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await?;
    Ok(())
}
