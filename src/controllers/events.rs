use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::response::sse::{Event, Sse};
use futures_util::stream::Stream;

use crate::domain::studio::StudioStore;
use crate::infrastructure::http::sse::SseBroadcaster;

pub struct EventsController {
    broadcaster: Arc<SseBroadcaster>,
    store: Arc<StudioStore>,
}

impl EventsController {
    pub fn new(broadcaster: Arc<SseBroadcaster>, store: Arc<StudioStore>) -> Self {
        Self { broadcaster, store }
    }

    /// GET /api/events - Live notifications and state snapshots
    pub async fn stream(
        State(controller): State<Arc<EventsController>>,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
        controller.broadcaster.subscribe(&controller.store)
    }
}
