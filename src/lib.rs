pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod messaging;
pub mod payload;
pub mod relay;

pub use config::ProjectConfig;
pub use display::{DesktopNotifier, NotificationDisplay, NOTIFICATION_ICON};
pub use error::{RelayError, RelayResult};
pub use messaging::MessagingClient;
pub use payload::{NotificationContent, PushPayload};
pub use relay::NotificationRelay;
