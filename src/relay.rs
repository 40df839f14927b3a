use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::display::{NotificationDisplay, NOTIFICATION_ICON};
use crate::error::RelayResult;
use crate::messaging::MessagingClient;
use crate::payload::PushPayload;

/// Translates inbound background push payloads into platform notification
/// displays.
///
/// Stateless between invocations: each payload produces exactly one display
/// call reflecting only its own fields, and nothing is remembered across
/// payloads. There is no queueing, no deduplication, and no acknowledgment
/// back to the message source.
pub struct NotificationRelay {
    receiver: broadcast::Receiver<PushPayload>,
    display: Arc<dyn NotificationDisplay>,
}

impl NotificationRelay {
    /// Register the relay on an initialized messaging handle
    pub fn new(client: &MessagingClient, display: Arc<dyn NotificationDisplay>) -> Self {
        Self {
            receiver: client.subscribe(),
            display,
        }
    }

    /// Handle one background push: one display call with the payload's
    /// title/body (empty string where absent) and the fixed icon.
    pub async fn handle_push(&self, payload: &PushPayload) -> RelayResult<()> {
        debug!(
            has_notification = payload.has_notification(),
            "received background push"
        );

        self.display
            .show(payload.title(), payload.body(), NOTIFICATION_ICON)
            .await
    }

    /// Receive loop. Runs until the transport side closes the subscription;
    /// per-payload display errors are logged and do not stop the loop, and
    /// lagged wakeups are skipped without producing a display call.
    pub async fn run(mut self) {
        info!("notification relay started");

        loop {
            match self.receiver.recv().await {
                Ok(payload) => {
                    if let Err(e) = self.handle_push(&payload).await {
                        error!("failed to display push notification: {}", e);
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("relay lagged behind the transport, skipped {} payloads", skipped);
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }

        info!("notification relay stopped");
    }

    /// Run the relay on the host executor
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct RecordingDisplay {
        calls: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl NotificationDisplay for RecordingDisplay {
        async fn show(&self, title: &str, body: &str, icon: &str) -> RelayResult<()> {
            self.calls
                .lock()
                .await
                .push((title.to_string(), body.to_string(), icon.to_string()));
            Ok(())
        }
    }

    fn test_client() -> MessagingClient {
        MessagingClient::initialize(ProjectConfig {
            api_key: "key".to_string(),
            auth_domain: String::new(),
            project_id: "project".to_string(),
            storage_bucket: String::new(),
            messaging_sender_id: "12345".to_string(),
            app_id: "1:12345:web:abcdef".to_string(),
            measurement_id: String::new(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_handle_push_displays_payload_fields() {
        let client = test_client();
        let display = Arc::new(RecordingDisplay::default());
        let relay = NotificationRelay::new(&client, display.clone());

        relay
            .handle_push(&PushPayload::with_notification("T", "B"))
            .await
            .unwrap();

        let calls = display.calls.lock().await;
        assert_eq!(
            *calls,
            vec![(
                "T".to_string(),
                "B".to_string(),
                NOTIFICATION_ICON.to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_handle_push_applies_empty_string_fallback() {
        let client = test_client();
        let display = Arc::new(RecordingDisplay::default());
        let relay = NotificationRelay::new(&client, display.clone());

        relay.handle_push(&PushPayload::default()).await.unwrap();

        let calls = display.calls.lock().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "");
        assert_eq!(calls[0].1, "");
    }
}
