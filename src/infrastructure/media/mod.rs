pub mod command_player;

pub use command_player::CommandPlayer;

use crate::domain::playback::PlaybackError;
use tokio::sync::mpsc;

pub type HandleId = u64;

/// Lets a playback handle report that its stream ended on its own
#[derive(Debug)]
pub struct EndNotifier {
    id: HandleId,
    tx: mpsc::UnboundedSender<HandleId>,
}

impl EndNotifier {
    pub fn new(id: HandleId, tx: mpsc::UnboundedSender<HandleId>) -> Self {
        Self { id, tx }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn ended(self) {
        let _ = self.tx.send(self.id);
    }
}

/// One playing clip
pub trait PlaybackHandle: Send {
    fn url(&self) -> &str;

    /// Stop producing sound. Idempotent.
    fn pause(&mut self);
}

/// Media subsystem able to play any URL the synthesizer returns
pub trait MediaBackend: Send + Sync {
    /// Start playing `url` right away
    fn start(&self, url: &str, on_end: EndNotifier) -> Result<Box<dyn PlaybackHandle>, PlaybackError>;
}
