//! Request/response types shared between the HTTP client and its callers
//!
//! The backend answers every mutating call, and every error, with a bare
//! `{ "message": ... }` body.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::MealTime;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Signup request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub name: String,
}

/// Login request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

// =============================================================================
// Generic responses
// =============================================================================

/// `{ "message": ... }` body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// =============================================================================
// Table query
// =============================================================================

/// Query string for `GET /tables`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery {
    pub date: NaiveDate,
    pub time: MealTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_tolerates_missing_message() {
        let resp: MessageResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.message, "");
    }

    #[test]
    fn test_table_query_wire_format() {
        let query = TableQuery {
            date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            time: MealTime::Dinner,
        };
        let json = serde_json::to_value(query).unwrap();
        assert_eq!(json["date"], "2026-11-03");
        assert_eq!(json["time"], "dinner");
    }
}
