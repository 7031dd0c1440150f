use std::sync::Arc;

use spine_core::{ApiClient, ClientConfig, DashboardView, MemorySessionStore, ReqwestTransport, Session, SessionUser};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url, "spine dashboard starting");

    let email = std::env::var("SPINE_USER_EMAIL").unwrap_or_default();
    let sessions = MemorySessionStore::new();
    match std::env::var("SPINE_ACCESS_TOKEN") {
        Ok(token) if !token.is_empty() => sessions.sign_in(Session::new(token).with_user(SessionUser {
            id: String::new(),
            email: email.clone(),
        })),
        _ => tracing::warn!("SPINE_ACCESS_TOKEN not set, requests will fail with no session"),
    }

    let client = ApiClient::new(config, Arc::new(sessions), Arc::new(ReqwestTransport::new()));

    let mut view = DashboardView::new(email);
    view.load(&client).await;
    print!("{}", view.render());
    Ok(())
}
