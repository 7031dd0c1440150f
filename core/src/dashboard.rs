//! Dashboard view model.
//!
//! Holds the one piece of state the dashboard page has (the outcome of its
//! single data fetch) and renders the page as plain text.

use std::fmt::Write as _;

use crate::client::ApiClient;
use crate::session::SessionProvider;
use crate::types::DashboardData;

pub const TITLE: &str = "Spine.AI Dashboard";
pub const SIGN_OUT_LABEL: &str = "Sign out";
const BACKEND_HINT: &str = "Make sure the backend server is running.";

/// Render state of the dashboard data panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardState {
    Loading,
    Failed(String),
    Loaded(DashboardData),
}

/// One labelled counter on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct DashboardView {
    user_email: String,
    state: DashboardState,
}

impl DashboardView {
    pub fn new(user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            state: DashboardState::Loading,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    /// Fetch dashboard data once and record the outcome.
    ///
    /// Every failure kind ends up as its display message.
    pub async fn load(&mut self, client: &ApiClient) {
        self.state = DashboardState::Loading;
        self.state = match client.dashboard().await {
            Ok(data) => DashboardState::Loaded(data),
            Err(e) => {
                tracing::warn!(error = %e, "dashboard data unavailable");
                DashboardState::Failed(e.to_string())
            }
        };
    }

    /// Sign the user out through the client's session provider.
    pub async fn sign_out(&self, client: &ApiClient) {
        client.sessions().sign_out().await;
    }

    pub fn stat_tiles(&self) -> Vec<StatTile> {
        let DashboardState::Loaded(data) = &self.state else {
            return Vec::new();
        };
        vec![
            StatTile {
                label: "Total Scans",
                value: data.stats.total_scans.to_string(),
            },
            StatTile {
                label: "Total Books",
                value: data.stats.total_books.to_string(),
            },
            StatTile {
                label: "Pending Review",
                value: data.stats.pending_review.to_string(),
            },
        ]
    }

    /// Inline error notice, present only after a failed load.
    pub fn error_notice(&self) -> Option<String> {
        match &self.state {
            DashboardState::Failed(message) => Some(format!("Error loading dashboard: {message}. {BACKEND_HINT}")),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}    {}    [{SIGN_OUT_LABEL}]", self.user_email);
        let _ = writeln!(out);
        let _ = writeln!(out, "Welcome to Spine.AI!");
        let _ = writeln!(out, "You're logged in as: {}", self.user_email);
        let _ = writeln!(out);

        match &self.state {
            DashboardState::Loading => {
                let _ = writeln!(out, "Loading dashboard data...");
            }
            DashboardState::Failed(_) => {
                if let Some(notice) = self.error_notice() {
                    let _ = writeln!(out, "! {notice}");
                }
            }
            DashboardState::Loaded(data) => {
                let _ = writeln!(out, "{}", data.message);
                for tile in self.stat_tiles() {
                    let _ = writeln!(out, "  {:<16}{}", tile.label, tile.value);
                }
            }
        }
        out
    }
}
