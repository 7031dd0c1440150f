//! In-process stand-in for the Spine.AI backend.
//!
//! Serves the public root and health routes plus the bearer-protected
//! `/api/user/*` routes. Tokens live in an in-memory map; `issue_token`
//! plays the identity provider.

pub mod auth;
pub mod config;

use std::{collections::HashMap, sync::Arc};

use axum::{http::HeaderValue, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

pub use auth::{AuthError, CurrentUser};
pub use config::ServerConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub user_metadata: Value,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_scans: u64,
    pub total_books: u64,
    pub pending_review: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub message: String,
    pub user_id: Uuid,
    pub user_email: String,
    pub stats: DashboardStats,
}

pub type Tokens = Arc<RwLock<HashMap<String, User>>>;

#[derive(Clone, Debug)]
pub struct AppState {
    tokens: Tokens,
    allowed_origins: Vec<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(vec![config::LOCAL_FRONTEND_URL.to_string()])
    }
}

impl AppState {
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self {
            tokens: Arc::new(RwLock::new(HashMap::new())),
            allowed_origins,
        }
    }

    /// Create a user for `email` and return a fresh access token for it.
    pub async fn issue_token(&self, email: &str) -> (String, User) {
        let token = Uuid::new_v4().simple().to_string();
        let user = self.register(token.clone(), email).await;
        (token, user)
    }

    /// Create a user for `email` reachable through the given `token`.
    pub async fn register(&self, token: String, email: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: Utc::now(),
            user_metadata: json!({}),
        };
        self.tokens.write().await.insert(token, user.clone());
        user
    }

    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    pub async fn user_for_token(&self, token: &str) -> Option<User> {
        self.tokens.read().await.get(token).cloned()
    }

    fn cors(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }
}

pub fn app(state: AppState) -> Router {
    let cors = state.cors();
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/user/me", get(profile))
        .route("/api/user/dashboard", get(dashboard))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state)).await
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Spine.AI API is running" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn profile(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

async fn dashboard(CurrentUser(user): CurrentUser) -> Json<DashboardResponse> {
    Json(DashboardResponse {
        message: "Welcome to your dashboard!".to_string(),
        user_id: user.id,
        user_email: user.email,
        stats: DashboardStats::default(),
    })
}
