//! Request DTOs for API endpoints
//!
//! Parameters arrive as strings from a form body or a query string. They are
//! validated for shape here and parsed into typed values on demand.

use serde::Deserialize;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

/// Parameters accepted by the like endpoints
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LikeParams {
    #[validate(length(min = 1, max = 20, message = "user_id must be 1-20 characters"))]
    pub user_id: Option<String>,

    #[validate(length(max = 32, message = "mood must be at most 32 characters"))]
    pub mood: Option<String>,

    #[validate(length(max = 10, message = "count must be at most 10 characters"))]
    pub count: Option<String>,
}

impl LikeParams {
    /// Fill fields missing here from `fallback`
    pub fn or(self, fallback: Self) -> Self {
        Self {
            user_id: self.user_id.or(fallback.user_id),
            mood: self.mood.or(fallback.mood),
            count: self.count.or(fallback.count),
        }
    }

    /// Raw user identifier; required
    pub fn user_id(&self) -> ServiceResult<i64> {
        let raw = self
            .user_id
            .as_deref()
            .ok_or_else(|| ServiceError::invalid_input("user_id is required"))?;
        parse_raw_id(raw, "user_id")
    }

    /// Requested mood token, if any
    pub fn mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    /// Requested page size; absent or empty means the default
    pub fn count(&self) -> ServiceResult<u32> {
        match self.count.as_deref().map(str::trim) {
            None | Some("") => Ok(0),
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| ServiceError::invalid_input(format!("count is not a valid number: {raw}"))),
        }
    }
}

/// Parse a decimal identifier
pub fn parse_raw_id(raw: &str, field: &str) -> ServiceResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ServiceError::invalid_input(format!("{field} is not a valid identifier: {raw}")))
}
