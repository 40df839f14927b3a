use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::config::ProjectConfig;
use crate::error::RelayResult;
use crate::payload::PushPayload;

/// Capacity of the payload fan-out channel. Push delivery is sparse; a
/// receiver that falls this far behind is lagging, not backlogged.
const PAYLOAD_CHANNEL_CAPACITY: usize = 64;

/// Handle to the hosted messaging service, scoped to one project
/// configuration.
///
/// The handle is an explicitly constructed, single-owner value: it is
/// initialized exactly once per process lifetime and threaded to whoever
/// needs the subscription, never stored in a global. The push transport
/// itself (token management, retry, encryption) lives behind the sender
/// half of the channel; this side only validates the configuration and
/// hands out subscriptions. Unreachable-service failures stay on the
/// transport side and are not observed here.
pub struct MessagingClient {
    config: ProjectConfig,
    payload_sender: broadcast::Sender<PushPayload>,
}

impl MessagingClient {
    /// Initialize the messaging handle for the given project configuration.
    ///
    /// Rejects configurations missing required identifiers synchronously;
    /// everything else is accepted and any mismatch with the producer side
    /// surfaces only as silent non-delivery upstream.
    pub fn initialize(config: ProjectConfig) -> RelayResult<Self> {
        config.validate()?;

        let (payload_sender, _) = broadcast::channel(PAYLOAD_CHANNEL_CAPACITY);

        info!(
            project_id = %config.project_id,
            sender_id = %config.messaging_sender_id,
            "messaging client initialized"
        );

        Ok(Self {
            config,
            payload_sender,
        })
    }

    /// Subscribe to inbound background push payloads.
    ///
    /// Does not re-initialize anything; every call hands out an independent
    /// receiver on the already-established handle.
    pub fn subscribe(&self) -> broadcast::Receiver<PushPayload> {
        debug!("new push subscription registered");
        self.payload_sender.subscribe()
    }

    /// Sender half of the payload channel, for the transport side that
    /// delivers pushes (or a test standing in for it).
    pub fn payload_sender(&self) -> broadcast::Sender<PushPayload> {
        self.payload_sender.clone()
    }

    /// The configuration this handle was initialized with
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}
