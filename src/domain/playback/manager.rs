use super::error::PlaybackError;
use crate::domain::studio::StudioStore;
use crate::infrastructure::media::{EndNotifier, HandleId, MediaBackend, PlaybackHandle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

struct ActivePlayback {
    id: HandleId,
    handle: Box<dyn PlaybackHandle>,
}

/// Owns the single playback handle and keeps `is_playing` in the studio state in sync with it.
pub struct PlaybackManager {
    backend: Arc<dyn MediaBackend>,
    store: Arc<StudioStore>,
    active: Mutex<Option<ActivePlayback>>,
    current: Arc<AtomicU64>,
    next_id: AtomicU64,
    ended_tx: mpsc::UnboundedSender<HandleId>,
    listener: JoinHandle<()>,
}

impl PlaybackManager {
    pub fn new(backend: Arc<dyn MediaBackend>, store: Arc<StudioStore>) -> Self {
        let (ended_tx, mut ended_rx) = mpsc::unbounded_channel::<HandleId>();
        let current = Arc::new(AtomicU64::new(0));

        let listener = {
            let current = current.clone();
            let store = store.clone();
            tokio::spawn(async move {
                while let Some(id) = ended_rx.recv().await {
                    // Ends from replaced handles are stale
                    if current.load(Ordering::SeqCst) == id {
                        tracing::debug!(handle = id, "Playback reached end of stream");
                        store.set_playing(false);
                    }
                }
            })
        };

        Self {
            backend,
            store,
            active: Mutex::new(None),
            current,
            next_id: AtomicU64::new(1),
            ended_tx,
            listener,
        }
    }

    /// Pause and drop whatever is playing, then start `url`
    pub fn play(&self, url: &str) -> Result<(), PlaybackError> {
        let mut active = self.lock();

        if let Some(mut previous) = active.take() {
            previous.handle.pause();
            self.store.set_playing(false);
            tracing::debug!(handle = previous.id, url = %previous.handle.url(), "Previous playback discarded");
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.current.store(id, Ordering::SeqCst);

        let handle = self
            .backend
            .start(url, EndNotifier::new(id, self.ended_tx.clone()))?;
        *active = Some(ActivePlayback { id, handle });
        self.store.set_playing(true);

        tracing::info!(handle = id, url = %url, "Playback started");
        Ok(())
    }

    /// Pause the active handle; no-op when nothing was ever played
    pub fn pause(&self) {
        let mut active = self.lock();
        if let Some(playback) = active.as_mut() {
            playback.handle.pause();
            self.store.set_playing(false);
            tracing::info!(handle = playback.id, "Playback paused");
        }
    }

    /// Single play/pause control for the current audio
    pub fn toggle_current(&self) -> Result<bool, PlaybackError> {
        let state = self.store.snapshot();
        if state.is_playing {
            self.pause();
            return Ok(false);
        }

        let url = state.current_audio.ok_or(PlaybackError::NoAudio)?;
        self.play(&url)?;
        Ok(true)
    }

    /// URL targeted by the live handle, if any
    pub fn active_url(&self) -> Option<String> {
        self.lock()
            .as_ref()
            .map(|playback| playback.handle.url().to_string())
    }

    fn lock(&self) -> MutexGuard<'_, Option<ActivePlayback>> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for PlaybackManager {
    fn drop(&mut self) {
        self.listener.abort();
        if let Some(mut playback) = self.lock().take() {
            playback.handle.pause();
        }
    }
}
