use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use pushrelay::cli::{Cli, Commands};
use pushrelay::config::ProjectConfig;
use pushrelay::display::DesktopNotifier;
use pushrelay::messaging::MessagingClient;
use pushrelay::payload::PushPayload;
use pushrelay::relay::NotificationRelay;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing for logging
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let config = match &cli.config {
        Some(path) => ProjectConfig::load_from(path)?,
        None => ProjectConfig::load()?,
    };

    let client = MessagingClient::initialize(config)?;
    let display = Arc::new(DesktopNotifier::new());
    let relay = NotificationRelay::new(&client, display);
    let relay_handle = relay.spawn();

    match cli.command {
        Some(Commands::TestNotification { title, body }) => {
            client
                .payload_sender()
                .send(PushPayload::with_notification(title, body))
                .map_err(|_| pushrelay::RelayError::SubscriptionClosed)?;

            // Dropping the handle closes the subscription once the test
            // payload has been drained, so the relay exits on its own.
            drop(client);
            relay_handle.await?;
        }
        None => {
            // Park on the host runtime; the transport side owns delivery
            // scheduling until shutdown.
            tokio::signal::ctrl_c().await?;
            drop(client);
            relay_handle.await?;
        }
    }

    Ok(())
}
