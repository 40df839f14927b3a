use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RelayResult;

/// One inbound push payload as delivered by the messaging transport.
///
/// The payload is transient: created by the transport per push event,
/// consumed synchronously by the relay handler, then dropped. The wire
/// format nests the displayable fields under `notification`; producers are
/// not required to send it, so its absence (and the absence of either field
/// inside it) is an expected case handled by the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushPayload {
    /// Display sub-record with the notification title and body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<NotificationContent>,

    /// Opaque producer-defined key/value extras, carried but never interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

/// The displayable part of a push payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationContent {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl PushPayload {
    /// Decode a payload from its JSON wire form
    pub fn from_json(json: &str) -> RelayResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a payload carrying the given title and body
    pub fn with_notification(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            notification: Some(NotificationContent {
                title: Some(title.into()),
                body: Some(body.into()),
            }),
            data: None,
        }
    }

    /// Notification title, or the empty string when the payload carries none
    pub fn title(&self) -> &str {
        self.notification
            .as_ref()
            .and_then(|n| n.title.as_deref())
            .unwrap_or("")
    }

    /// Notification body, or the empty string when the payload carries none
    pub fn body(&self) -> &str {
        self.notification
            .as_ref()
            .and_then(|n| n.body.as_deref())
            .unwrap_or("")
    }

    /// Whether the payload carries a notification sub-record at all
    pub fn has_notification(&self) -> bool {
        self.notification.is_some()
    }
}
