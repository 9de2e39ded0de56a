//! # Backend resources
//!
//! The hosted backend exposes one table per resource under a singular path
//! (`/hotel`, `/booking`, ...) with the same five verbs. [`Resource`] ties a
//! model to its path so the CRUD calls are written once:
//!
//! | Call | Request |
//! |------|---------|
//! | [`ApiClient::list`] | `GET /{path}` |
//! | [`ApiClient::get`] | `GET /{path}/{id}` |
//! | [`ApiClient::create`] | `POST /{path}` |
//! | [`ApiClient::update`] | `PATCH /{path}/{id}` |
//! | [`ApiClient::delete`] | `DELETE /{path}/{id}` |
//!
//! Action endpoints that do not fit the table shape (booking confirm/cancel/
//! modify, searches, ratings, WhatsApp) are plain methods below.
//!
//! ```ignore
//! let hotels = client.list::<Hotel>().await?;
//! let booking: Booking = client.create::<Booking, _>(&new_booking).await?;
//! ```

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{ApiClient, Bearer, Endpoint};
use crate::error::ApiError;
use crate::models::{
    Amenity, AvailabilityCalendar, Booking, BookingModification, BookingModificationHistory,
    ChatSession, CustomerProfile, Hotel, HotelRating, Review, RoomImage, RoomType,
    RoomTypeAmenity, SendWhatsAppMessage, SpecialOffer, UserActivityLog, WhatsAppIncomingMessage,
    WhatsAppMessage, WhatsAppStatistics, WhatsAppStatusUpdate,
};

/// A backend table reachable at `/{PATH}`.
pub trait Resource: DeserializeOwned {
    const PATH: &'static str;
}

macro_rules! resource {
    ($($ty:ty => $path:literal),* $(,)?) => {
        $(impl Resource for $ty {
            const PATH: &'static str = $path;
        })*
    };
}

resource! {
    Hotel => "hotel",
    Booking => "booking",
    Review => "review",
    RoomType => "room_type",
    Amenity => "amenity",
    SpecialOffer => "special_offer",
    AvailabilityCalendar => "availability_calendar",
    CustomerProfile => "customer_profile",
    BookingModificationHistory => "booking_modification_history",
    ChatSession => "chat_session",
    RoomImage => "room_image",
    RoomTypeAmenity => "room_type_amenity",
    UserActivityLog => "user_activity_log",
}

fn item_path<R: Resource>(id: i64) -> String {
    format!("{}/{id}", R::PATH)
}

impl ApiClient {
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let builder = self.request(Method::GET, Endpoint::Data, R::PATH, Bearer::Session);
        self.execute(builder).await
    }

    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, ApiError> {
        let builder = self.request(Method::GET, Endpoint::Data, &item_path::<R>(id), Bearer::Session);
        self.execute(builder).await
    }

    pub async fn create<R, B>(&self, body: &B) -> Result<R, ApiError>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let builder = self
            .request(Method::POST, Endpoint::Data, R::PATH, Bearer::Session)
            .json(body);
        self.execute(builder).await
    }

    pub async fn update<R, B>(&self, id: i64, body: &B) -> Result<R, ApiError>
    where
        R: Resource,
        B: Serialize + ?Sized,
    {
        let builder = self
            .request(Method::PATCH, Endpoint::Data, &item_path::<R>(id), Bearer::Session)
            .json(body);
        self.execute(builder).await
    }

    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), ApiError> {
        let builder = self.request(Method::DELETE, Endpoint::Data, &item_path::<R>(id), Bearer::Session);
        self.execute_unit(builder).await
    }

    // Bookings

    pub async fn search_bookings(&self, query: &str) -> Result<Vec<Booking>, ApiError> {
        let builder = self
            .request(Method::GET, Endpoint::Data, "bookings/search", Bearer::Session)
            .query(&[("q", query)]);
        self.execute(builder).await
    }

    pub async fn confirm_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        self.booking_action(booking_id, "confirm").await
    }

    pub async fn cancel_booking(&self, booking_id: i64) -> Result<Booking, ApiError> {
        self.booking_action(booking_id, "cancel").await
    }

    pub async fn modify_booking(
        &self,
        booking_id: i64,
        change: &BookingModification,
    ) -> Result<Booking, ApiError> {
        let path = format!("bookings/{booking_id}/modify");
        let builder = self
            .request(Method::POST, Endpoint::Data, &path, Bearer::Session)
            .json(change);
        self.execute(builder).await
    }

    async fn booking_action(&self, booking_id: i64, action: &str) -> Result<Booking, ApiError> {
        let path = format!("bookings/{booking_id}/{action}");
        let builder = self.request(Method::POST, Endpoint::Data, &path, Bearer::Session);
        self.execute(builder).await
    }

    // Catalogue

    pub async fn search_room_types(&self, query: &str) -> Result<Vec<RoomType>, ApiError> {
        let builder = self
            .request(Method::GET, Endpoint::Data, "room_types/search", Bearer::Session)
            .query(&[("q", query)]);
        self.execute(builder).await
    }

    pub async fn hotel_rating(&self, hotel_id: i64) -> Result<HotelRating, ApiError> {
        let path = format!("hotels/{hotel_id}/rating");
        let builder = self.request(Method::GET, Endpoint::Data, &path, Bearer::Session);
        self.execute(builder).await
    }

    // WhatsApp

    pub async fn send_whatsapp(
        &self,
        message: &SendWhatsAppMessage,
    ) -> Result<WhatsAppMessage, ApiError> {
        let builder = self
            .request(Method::POST, Endpoint::Data, "whatsapp/send", Bearer::Session)
            .json(message);
        self.execute(builder).await
    }

    pub async fn whatsapp_message_status(
        &self,
        message_id: &str,
    ) -> Result<WhatsAppMessage, ApiError> {
        self.execute(self.message_status_request(message_id)).await
    }

    fn message_status_request(&self, message_id: &str) -> reqwest::RequestBuilder {
        self.request_segments(
            Method::GET,
            Endpoint::Data,
            &["whatsapp", "messages", message_id, "status"],
            Bearer::Session,
        )
    }

    pub async fn booking_messages(&self, booking_id: i64) -> Result<Vec<WhatsAppMessage>, ApiError> {
        let path = format!("whatsapp/bookings/{booking_id}/messages");
        let builder = self.request(Method::GET, Endpoint::Data, &path, Bearer::Session);
        self.execute(builder).await
    }

    pub async fn whatsapp_statistics(&self) -> Result<WhatsAppStatistics, ApiError> {
        let builder = self.request(Method::GET, Endpoint::Data, "whatsapp/statistics", Bearer::Session);
        self.execute(builder).await
    }

    /// Monitoring views have no fixed schema; they are returned as raw JSON.
    pub async fn whatsapp_monitoring(
        &self,
        view: MonitoringView,
    ) -> Result<serde_json::Value, ApiError> {
        let path = format!("whatsapp/monitoring/{}", view.as_str());
        let builder = self.request(Method::GET, Endpoint::Data, &path, Bearer::Session);
        self.execute(builder).await
    }

    pub async fn whatsapp_status_webhook(
        &self,
        update: &WhatsAppStatusUpdate,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, Endpoint::Data, "webhooks/whatsapp/status", Bearer::Session)
            .json(update);
        self.execute_unit(builder).await
    }

    pub async fn whatsapp_incoming_webhook(
        &self,
        message: &WhatsAppIncomingMessage,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::POST, Endpoint::Data, "webhooks/whatsapp/incoming", Bearer::Session)
            .json(message);
        self.execute_unit(builder).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitoringView {
    Dashboard,
    Alerts,
    Stream,
    Analytics,
}

impl MonitoringView {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Alerts => "alerts",
            Self::Stream => "stream",
            Self::Analytics => "analytics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::new("https://hotels.example.com/api"))
    }

    #[test]
    fn test_item_paths() {
        assert_eq!(item_path::<Hotel>(3), "hotel/3");
        assert_eq!(item_path::<RoomTypeAmenity>(11), "room_type_amenity/11");
        assert_eq!(
            item_path::<BookingModificationHistory>(2),
            "booking_modification_history/2"
        );
    }

    #[test]
    fn test_search_query_is_encoded() {
        let request = client()
            .request(Method::GET, Endpoint::Data, "bookings/search", Bearer::Session)
            .query(&[("q", "Addis Ababa & co")])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "https://hotels.example.com/api/bookings/search?q=Addis+Ababa+%26+co"
        );
    }

    #[test]
    fn test_update_is_patch_with_json_body() {
        let request = client()
            .request(Method::PATCH, Endpoint::Data, &item_path::<Amenity>(5), Bearer::Session)
            .json(&serde_json::json!({ "name": "Pool" }))
            .build()
            .unwrap();
        assert_eq!(request.method(), &Method::PATCH);
        assert_eq!(request.url().path(), "/api/amenity/5");
        assert_eq!(
            request.headers()[reqwest::header::CONTENT_TYPE],
            "application/json"
        );
    }

    #[test]
    fn test_message_id_cannot_rewrite_path() {
        let request = client()
            .message_status_request("wamid/../../hotel?x=1")
            .build()
            .unwrap();
        assert_eq!(
            request.url().path(),
            "/api/whatsapp/messages/wamid%2F..%2F..%2Fhotel%3Fx=1/status"
        );
        assert!(request.url().query().is_none());
    }

    #[test]
    fn test_monitoring_paths() {
        assert_eq!(MonitoringView::Dashboard.as_str(), "dashboard");
        assert_eq!(MonitoringView::Analytics.as_str(), "analytics");
    }
}
