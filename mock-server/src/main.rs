use spine_mock_api::{AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(config.allowed_origins());

    let (token, user) = match config.demo_token.clone() {
        Some(token) => {
            let user = state.register(token.clone(), &config.demo_email).await;
            (token, user)
        }
        None => state.issue_token(&config.demo_email).await,
    };
    tracing::info!(email = %user.email, user_id = %user.id, %token, "seeded demo user");

    let addr = format!("127.0.0.1:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "spine mock api listening");
    spine_mock_api::run(listener, state).await?;
    Ok(())
}
