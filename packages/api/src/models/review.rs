use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A guest review of a hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub hotel_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

/// Body for `POST /review`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub hotel_id: i64,
    pub user_id: i64,
    pub rating: u8,
    pub comment: String,
}
