use super::notification::Notification;
use crate::domain::history::{Generation, History};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// Progress ceiling while a synthesis is still pending
pub const PROGRESS_CEILING: u8 = 90;
pub const PROGRESS_STEP: u8 = 10;
pub const PROGRESS_DONE: u8 = 100;

/// The single mutable record behind the studio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudioState {
    pub is_generating: bool,
    pub progress: u8,
    pub current_audio: Option<String>,
    pub is_playing: bool,
    pub generations: History,
}

/// Event pushed to live subscribers
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum StudioEvent {
    Notification(Notification),
    State(StudioState),
}

/// Owns the [`StudioState`] and exposes the only transitions allowed on it.
/// Every transition notifies watchers.
#[derive(Debug)]
pub struct StudioStore {
    state: watch::Sender<StudioState>,
}

impl Default for StudioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudioStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(StudioState::default());
        Self { state }
    }

    pub fn snapshot(&self) -> StudioState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StudioState> {
        self.state.subscribe()
    }

    /// Enter the generating state. Returns false if a generation was already running.
    pub fn begin_generation(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_generating {
                return false;
            }
            state.is_generating = true;
            state.progress = 0;
            true
        })
    }

    /// Cosmetic progress step, never past [`PROGRESS_CEILING`]
    pub fn advance_progress(&self) {
        self.state.send_if_modified(|state| {
            if !state.is_generating {
                return false;
            }
            let next = state
                .progress
                .saturating_add(PROGRESS_STEP)
                .min(PROGRESS_CEILING);
            let changed = next != state.progress;
            state.progress = next;
            changed
        });
    }

    pub fn complete_generation(&self, generation: Generation) {
        self.state.send_modify(|state| {
            state.progress = PROGRESS_DONE;
            state.current_audio = Some(generation.audio_url.clone());
            state.generations.push(generation);
        });
    }

    pub fn finish_generation(&self) {
        self.state.send_modify(|state| {
            state.is_generating = false;
            state.progress = 0;
        });
    }

    pub fn set_playing(&self, playing: bool) {
        self.state.send_if_modified(|state| {
            let changed = state.is_playing != playing;
            state.is_playing = playing;
            changed
        });
    }
}
