pub mod audio_store;
pub mod openai_speech_repository;
pub mod speech_repository;

pub use audio_store::{AudioStore, AUDIO_ROUTE};
pub use openai_speech_repository::OpenAiSpeechRepository;
pub use speech_repository::SpeechSynthesizer;
