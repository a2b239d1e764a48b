pub mod dto;
pub mod error;
pub mod progress;
pub mod service;
pub mod voice;

pub use dto::{SpeechRequest, SynthesisResult};
pub use error::SpeechError;
pub use service::{SpeechService, SpeechServiceApi};
pub use voice::{voice_catalogue, Voice, VoiceOption};

/// Longest text accepted for a single synthesis, in characters
pub const MAX_TEXT_CHARS: usize = 100_000;
pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 4.0;
