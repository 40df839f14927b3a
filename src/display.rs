use async_trait::async_trait;
use notify_rust::{Notification, Timeout};
use tracing::{debug, info, warn};

use crate::error::RelayResult;

/// Icon passed on every display call, regardless of payload content
pub const NOTIFICATION_ICON: &str = "dialog-information";

/// Display timeout in milliseconds
const NOTIFICATION_TIMEOUT_MS: u32 = 5000;

/// Seam to the platform notification renderer.
///
/// The relay only ever asks for one thing: show a notification with this
/// title, body, and icon. Permission handling and rendering belong to the
/// platform behind this trait.
#[async_trait]
pub trait NotificationDisplay: Send + Sync {
    async fn show(&self, title: &str, body: &str, icon: &str) -> RelayResult<()>;
}

/// Native desktop notification display using notify-rust
pub struct DesktopNotifier {
    appname: String,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self {
            appname: "Pushrelay".to_string(),
        }
    }

    /// Check if desktop notifications are supported on this system
    pub fn is_supported() -> bool {
        // notify-rust handles platform detection internally
        true
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationDisplay for DesktopNotifier {
    async fn show(&self, title: &str, body: &str, icon: &str) -> RelayResult<()> {
        let mut notification = Notification::new();
        notification
            .appname(&self.appname)
            .summary(title)
            .body(body)
            .icon(icon)
            .timeout(Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS));

        // Display failure (no daemon, permission denied) degrades to a log
        // line; the host loop must keep running either way.
        match notification.show() {
            Ok(_) => {
                debug!("desktop notification sent: {}", title);
            }
            Err(e) => {
                warn!("failed to send desktop notification '{}': {}", title, e);
                info!("notification (fallback): {} - {}", title, body);
            }
        }

        Ok(())
    }
}
