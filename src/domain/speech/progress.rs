use crate::domain::studio::StudioStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(200);

/// Fake progress indicator for a pending synthesis.
///
/// The synthesis capability reports nothing while it works, so this only
/// nudges the stored progress forward on a timer. It is not a measure of
/// real work.
pub struct ProgressTicker {
    task: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn start(store: Arc<StudioStore>) -> Self {
        let task = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + PROGRESS_INTERVAL, PROGRESS_INTERVAL);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                store.advance_progress();
            }
        });

        Self { task }
    }

    /// Cancel the ticker and wait until it can no longer touch the store
    pub async fn stop(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
