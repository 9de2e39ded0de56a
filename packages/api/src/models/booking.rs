use serde::{Deserialize, Serialize};

use super::{Extra, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    #[serde(other)]
    Other,
}

/// A reservation as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub check_in_date: String,
    #[serde(default)]
    pub check_out_date: String,
    #[serde(default)]
    pub number_of_guests: u32,
    #[serde(default)]
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub hotel_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Body for `POST /booking`.
///
/// The backend assigns the id and returns the stored [`Booking`]; a failed
/// create is an error for the caller, never a locally invented reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub check_in_date: String,
    pub check_out_date: String,
    pub number_of_guests: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub user_id: i64,
    pub hotel_id: i64,
    pub room_type_id: i64,
}

/// Body for `POST /bookings/{id}/modify`. Only the set fields change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingModification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Audit record of a change made to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingModificationHistory {
    pub id: i64,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Extra,
}
