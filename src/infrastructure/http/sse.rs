use std::convert::Infallible;
use std::sync::Arc;

use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::Stream;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{BroadcastStream, WatchStream};
use tokio_stream::StreamExt;

use crate::domain::studio::{Notification, Notifier, StudioEvent, StudioStore};

/// Fans notifications and state changes out to connected event-stream clients.
///
/// Slow clients may miss notifications if the buffer overflows; state
/// snapshots always converge on the latest value.
#[derive(Debug, Clone)]
pub struct SseBroadcaster {
    sender: broadcast::Sender<StudioEvent>,
}

impl SseBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn with_defaults() -> Self {
        Self::new(256)
    }

    /// Create an SSE stream for a new client: the current state first, then
    /// every notification and state change.
    pub fn subscribe(
        &self,
        store: &StudioStore,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
        let notifications = BroadcastStream::new(self.sender.subscribe()).filter_map(|result| {
            match result {
                Ok(event) => Some(event),
                Err(e) => {
                    tracing::debug!("SSE stream error: {}", e);
                    None
                }
            }
        });
        let states = WatchStream::new(store.subscribe()).map(StudioEvent::State);

        let stream = states.merge(notifications).filter_map(|event| {
            match serde_json::to_string(&event) {
                Ok(json) => Some(Ok(Event::default().data(json))),
                Err(e) => {
                    tracing::warn!("Failed to serialize event: {}", e);
                    None
                }
            }
        });

        Sse::new(stream).keep_alive(
            KeepAlive::new()
                .interval(std::time::Duration::from_secs(30))
                .text("ping"),
        )
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Notifier for SseBroadcaster {
    fn notify(&self, notification: Notification) {
        tracing::debug!(title = %notification.title, "Notification emitted");
        // No subscribers is fine
        let _ = self.sender.send(StudioEvent::Notification(notification));
    }
}

pub fn create_broadcaster() -> Arc<SseBroadcaster> {
    Arc::new(SseBroadcaster::with_defaults())
}
