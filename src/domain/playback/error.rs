use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("nothing to play")]
    NoAudio,
    #[error("failed to start playback: {0}")]
    Start(String),
}

impl From<PlaybackError> for AppError {
    fn from(err: PlaybackError) -> Self {
        match err {
            PlaybackError::NoAudio => AppError::BadRequest(err.to_string()),
            PlaybackError::Start(_) => AppError::Internal(err.to_string()),
        }
    }
}
