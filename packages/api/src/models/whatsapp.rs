//! WhatsApp messaging.

use serde::{Deserialize, Serialize};

use super::{Extra, Timestamp};

/// Body for `POST /whatsapp/send`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendWhatsAppMessage {
    pub to: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppMessage {
    pub id: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppStatistics {
    pub total_messages: u64,
    pub delivered_messages: u64,
    pub failed_messages: u64,
    pub pending_messages: u64,
    pub response_rate: f64,
}

/// Delivery status callback forwarded to `/webhooks/whatsapp/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppStatusUpdate {
    pub message_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Inbound message forwarded to `/webhooks/whatsapp/incoming`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatsAppIncomingMessage {
    pub from: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_omits_missing_booking() {
        let msg = SendWhatsAppMessage {
            to: "+251911000000".to_string(),
            message: "Your room is ready".to_string(),
            booking_id: None,
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            serde_json::json!({ "to": "+251911000000", "message": "Your room is ready" })
        );
    }

    #[test]
    fn test_statistics_tolerate_missing_counters() {
        let stats: WhatsAppStatistics =
            serde_json::from_str(r#"{"total_messages":10,"response_rate":0.4}"#).unwrap();
        assert_eq!(stats.total_messages, 10);
        assert_eq!(stats.failed_messages, 0);
    }
}
