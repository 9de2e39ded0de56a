use serde::{Deserialize, Serialize};

use super::{Extra, Timestamp};

/// A hotel listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rating: f64,
    /// Nightly rate; older records call this `price`.
    #[serde(default, alias = "price")]
    pub price_per_night: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

fn default_active() -> bool {
    true
}

impl Hotel {
    /// Id as used by the favourites set.
    pub fn favorite_id(&self) -> String {
        self.id.to_string()
    }
}

/// Aggregate rating from `/hotels/{id}/rating`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRating {
    #[serde(default)]
    pub hotel_id: Option<i64>,
    #[serde(default, alias = "rating")]
    pub average_rating: f64,
    #[serde(default, alias = "count")]
    pub review_count: u64,
    #[serde(flatten)]
    pub extra: Extra,
}
