//! Data models for the backend resources.
//!
//! Every record the hosted backend hands out is modelled leniently: fields it
//! may omit are `Option` or `#[serde(default)]`, and records whose shape varies
//! between backend versions keep unknown fields in a flattened `extra` map so
//! an update round-trips them untouched.

mod booking;
mod catalog;
mod customer;
mod favorites;
mod hotel;
mod review;
mod user;
mod whatsapp;

use serde::{Deserialize, Serialize};

pub use booking::{Booking, BookingModification, BookingModificationHistory, BookingStatus, NewBooking};
pub use catalog::{Amenity, AvailabilityCalendar, RoomImage, RoomType, RoomTypeAmenity, SpecialOffer};
pub use customer::{ChatSession, CustomerProfile, UserActivityLog};
pub use favorites::FavoritesPayload;
pub use hotel::{Hotel, HotelRating};
pub use review::{NewReview, Review};
pub use user::{AuthToken, Identity};
pub(crate) use user::{LoginRequest, SignupRequest};
pub use whatsapp::{
    SendWhatsAppMessage, WhatsAppIncomingMessage, WhatsAppMessage, WhatsAppStatistics,
    WhatsAppStatusUpdate,
};

/// A backend timestamp: either epoch milliseconds or an ISO-8601 string,
/// depending on which table the record comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

/// Unknown fields preserved across a read-modify-write.
pub type Extra = serde_json::Map<String, serde_json::Value>;
