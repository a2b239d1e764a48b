use super::error::SpeechError;
use super::progress::ProgressTicker;
use super::{SpeechRequest, Voice, MAX_SPEED, MAX_TEXT_CHARS, MIN_SPEED};
use crate::domain::history::{Generation, GenerationIds};
use crate::domain::studio::{Notification, Notifier, StudioStore};
use crate::infrastructure::repositories::SpeechSynthesizer;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};

pub struct SpeechService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<StudioStore>,
    notifier: Arc<dyn Notifier>,
    ids: Mutex<GenerationIds>,
}

impl SpeechService {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        store: Arc<StudioStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            synthesizer,
            store,
            notifier,
            ids: Mutex::new(GenerationIds::default()),
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Turn text into a playable clip
    ///
    /// This operation:
    /// - Rejects empty or over-long text and out-of-range speeds before any call
    /// - Runs the cosmetic progress ticker while the synthesizer works
    /// - On success stores the clip as current audio and prepends it to history
    /// - Emits exactly one notification and always ends idle
    async fn generate_speech(
        &self,
        text: &str,
        voice: Voice,
        speed: f32,
    ) -> Result<Generation, SpeechError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn generate_speech(
        &self,
        text: &str,
        voice: Voice,
        speed: f32,
    ) -> Result<Generation, SpeechError> {
        let result = self.run(text, voice, speed).await;

        match &result {
            Ok(_) => self.notifier.notify(Notification::success(
                "Speech generated successfully!",
                "Your audio is ready to play.",
            )),
            Err(e) => self.notifier.notify(e.notification()),
        }

        result
    }
}

impl SpeechService {
    async fn run(&self, text: &str, voice: Voice, speed: f32) -> Result<Generation, SpeechError> {
        let request = validate(text, voice, speed)?;

        if !self.store.begin_generation() {
            return Err(SpeechError::Busy);
        }

        tracing::info!(
            voice = %request.voice,
            speed = request.speed,
            text_length = request.text.chars().count(),
            "Speech generation started"
        );

        // Ends the generation even if this future is dropped mid-call
        let _idle = IdleOnDrop(&self.store);

        let ticker = ProgressTicker::start(self.store.clone());
        let outcome = self.synthesizer.generate_speech(&request).await;
        ticker.stop().await;

        let result = match outcome {
            Ok(synthesis) => {
                let generation = Generation {
                    id: self.next_id(),
                    text: request.text,
                    voice: request.voice,
                    speed: request.speed,
                    audio_url: synthesis.url,
                    created_at: Utc::now(),
                };
                self.store.complete_generation(generation.clone());
                tracing::info!(
                    generation_id = %generation.id,
                    audio_url = %generation.audio_url,
                    "Speech generation succeeded"
                );
                Ok(generation)
            }
            Err(e) => {
                tracing::error!(error = %e, "Speech generation failed");
                Err(SpeechError::SynthesisFailure(e))
            }
        };

        result
    }

    fn next_id(&self) -> String {
        let mut ids = self.ids.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        ids.next(Utc::now())
    }
}

/// Returns the studio to idle when a started generation goes out of scope
struct IdleOnDrop<'a>(&'a StudioStore);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.finish_generation();
    }
}

/// Pre-flight checks, in order: empty text, text length, speed range.
/// Returns the request to send, with trimmed text.
pub fn validate(text: &str, voice: Voice, speed: f32) -> Result<SpeechRequest, SpeechError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(SpeechError::EmptyInput);
    }

    let length = text.chars().count();
    if length > MAX_TEXT_CHARS {
        return Err(SpeechError::InputTooLong(length));
    }

    if !speed.is_finite() || !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(SpeechError::SpeedOutOfRange(speed));
    }

    Ok(SpeechRequest {
        text: trimmed.to_string(),
        voice,
        speed,
    })
}
