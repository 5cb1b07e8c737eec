//! Response DTOs for API endpoints
//!
//! Identifiers are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use like_core::Mood;
use serde::Serialize;

// ============================================================================
// Like Responses
// ============================================================================

/// A like as the caller sees it after the request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeActionResponse {
    pub user_id: String,
    pub target_id: String,
    pub mood: Mood,
    pub deleted: bool,
}

/// Public profile of a user who liked a target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub avatar_url: String,
}

/// One page of reactors
///
/// `total` counts every matching like, including any whose profile could not
/// be resolved, so `users` may be shorter than expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReactorPage {
    pub users: Vec<UserProfileResponse>,
    pub total: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
