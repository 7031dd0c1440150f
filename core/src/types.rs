//! Response DTOs for the Spine.AI backend.
//!
//! # Design
//! These mirror the mock backend's schema but are defined independently so
//! the client never links against server code. The live integration test
//! catches schema drift between the two crates.

use serde::{Deserialize, Serialize};

pub const DASHBOARD_ENDPOINT: &str = "/api/user/dashboard";
pub const PROFILE_ENDPOINT: &str = "/api/user/me";
pub const HEALTH_ENDPOINT: &str = "/health";

/// Usage counters shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_scans: u64,
    pub total_books: u64,
    pub pending_review: u64,
}

/// Body of `GET /api/user/dashboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub message: String,
    pub user_id: String,
    pub user_email: String,
    pub stats: DashboardStats,
}

/// Body of `GET /api/user/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub user_metadata: serde_json::Value,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_payload_deserializes() {
        let raw = r#"{"message":"ok","user_id":"u1","user_email":"a@b.com","stats":{"total_scans":3,"total_books":1,"pending_review":0}}"#;
        let data: DashboardData = serde_json::from_str(raw).unwrap();
        assert_eq!(data.user_email, "a@b.com");
        assert_eq!(
            data.stats,
            DashboardStats {
                total_scans: 3,
                total_books: 1,
                pending_review: 0
            }
        );
    }

    #[test]
    fn dashboard_payload_rejects_missing_stats() {
        let raw = r#"{"message":"ok","user_id":"u1","user_email":"a@b.com"}"#;
        assert!(serde_json::from_str::<DashboardData>(raw).is_err());
    }

    #[test]
    fn profile_metadata_defaults_to_null() {
        let raw = r#"{"id":"u1","email":null,"created_at":"2024-01-01T00:00:00Z"}"#;
        let profile: UserProfile = serde_json::from_str(raw).unwrap();
        assert!(profile.email.is_none());
        assert!(profile.user_metadata.is_null());
    }
}
