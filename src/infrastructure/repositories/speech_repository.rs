use crate::domain::speech::{SpeechRequest, SynthesisResult};
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the hosted provider that turns text into a playable resource.
///
/// Implementations are responsible for:
/// - Calling the provider with the requested voice and speed
/// - Storing the audio somewhere a media player and a file-save action can reach
/// - Returning the URL of that resource
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize the (already validated and trimmed) request.
    ///
    /// # Errors
    /// Returns error if the provider rejects the call or the audio cannot be stored
    async fn generate_speech(&self, request: &SpeechRequest) -> Result<SynthesisResult, String>;
}
