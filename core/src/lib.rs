//! Authenticated API client core for the Spine.AI backend.
//!
//! # Overview
//! `ApiClient` resolves the caller's access token through a
//! `SessionProvider`, sends one bearer-authenticated JSON request through a
//! `Transport`, and decodes the JSON reply. `DashboardView` is the single
//! consumer shipped with the crate.
//!
//! # Design
//! - No global client: the entry point builds a `ClientConfig` and passes
//!   the `ApiClient` around by reference.
//! - Request building and response parsing are pure; the `Transport` trait
//!   is the only place that touches the network.
//! - Errors are a tagged `ApiError` enum, never message strings.
//! - DTOs are defined independently from the mock backend crate; the live
//!   integration test catches schema drift.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

pub use client::{parse_response, ApiClient, JsonResult};
pub use config::ClientConfig;
pub use dashboard::{DashboardState, DashboardView, StatTile};
pub use error::{ApiError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use session::{MemorySessionStore, Session, SessionProvider, SessionUser};
pub use types::{DashboardData, DashboardStats, HealthStatus, UserProfile};
