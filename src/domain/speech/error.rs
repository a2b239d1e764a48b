use crate::domain::studio::Notification;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpeechError {
    #[error("text cannot be empty")]
    EmptyInput,
    #[error("text has {0} characters, limit is 100000")]
    InputTooLong(usize),
    #[error("speed {0} is outside 0.25..=4")]
    SpeedOutOfRange(f32),
    #[error("a synthesis request is already in progress")]
    Busy,
    #[error("synthesis failed: {0}")]
    SynthesisFailure(String),
}

impl SpeechError {
    /// User-facing notification for this error
    pub fn notification(&self) -> Notification {
        match self {
            SpeechError::EmptyInput => Notification::destructive(
                "Please enter some text",
                "You need to provide text to convert to speech.",
            ),
            SpeechError::InputTooLong(_) => Notification::destructive(
                "Text too long",
                "Please keep your text under 100,000 characters.",
            ),
            SpeechError::SpeedOutOfRange(_) => Notification::destructive(
                "Invalid speed",
                "Please choose a speed between 0.25x and 4x.",
            ),
            SpeechError::Busy => Notification::destructive(
                "Already generating",
                "Please wait for the current speech to finish.",
            ),
            SpeechError::SynthesisFailure(_) => Notification::destructive(
                "Generation failed",
                "There was an error generating your speech. Please try again.",
            ),
        }
    }
}

impl From<SpeechError> for AppError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::EmptyInput | SpeechError::SpeedOutOfRange(_) => {
                AppError::BadRequest(err.to_string())
            }
            SpeechError::InputTooLong(_) => AppError::PayloadTooLarge(err.to_string()),
            SpeechError::Busy => AppError::Conflict(err.to_string()),
            SpeechError::SynthesisFailure(msg) => AppError::ExternalService(msg),
        }
    }
}
