use super::audio_store::AudioStore;
use super::speech_repository::SpeechSynthesizer;
use crate::domain::speech::{SpeechRequest, SynthesisResult, Voice};
use async_openai::{
    config::OpenAIConfig,
    types::{CreateSpeechRequest, SpeechModel, SpeechResponseFormat},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI has a limit of 4096 characters per request
const MAX_BATCH_CHARS: usize = 4096;

/// OpenAI TTS implementation of the speech synthesizer
pub struct OpenAiSpeechRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    store: AudioStore,
}

impl OpenAiSpeechRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String, store: AudioStore) -> Self {
        Self {
            client,
            model,
            store,
        }
    }

    fn speech_model(&self) -> SpeechModel {
        match self.model.as_str() {
            "tts-1" => SpeechModel::Tts1,
            "tts-1-hd" => SpeechModel::Tts1Hd,
            other => SpeechModel::Other(other.to_string()),
        }
    }

    /// Call OpenAI TTS API to synthesize a single text batch
    async fn call_openai(&self, text: &str, voice: Voice, speed: f32) -> Result<Vec<u8>, String> {
        tracing::debug!(
            model = %self.model,
            voice = %voice,
            speed = speed,
            text_length = text.chars().count(),
            "Calling OpenAI TTS API"
        );

        let request = CreateSpeechRequest {
            model: self.speech_model(),
            input: text.to_string(),
            voice: openai_voice(voice),
            response_format: Some(SpeechResponseFormat::Mp3),
            speed: Some(speed),
        };

        let response = self.client.audio().speech(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                voice = %voice,
                "OpenAI TTS API call failed"
            );
            format!("OpenAI TTS error: {}", e)
        })?;

        Ok(response.bytes.to_vec())
    }
}

fn openai_voice(voice: Voice) -> async_openai::types::Voice {
    use async_openai::types::Voice as OpenAiVoice;
    match voice {
        Voice::Nova => OpenAiVoice::Nova,
        Voice::Alloy => OpenAiVoice::Alloy,
        Voice::Echo => OpenAiVoice::Echo,
        Voice::Fable => OpenAiVoice::Fable,
        Voice::Onyx => OpenAiVoice::Onyx,
        Voice::Shimmer => OpenAiVoice::Shimmer,
    }
}

/// Split text into batches of at most [`MAX_BATCH_CHARS`] characters,
/// cutting after sentence-ending punctuation where possible.
fn split_into_batches(text: &str) -> Vec<String> {
    if text.chars().count() <= MAX_BATCH_CHARS {
        return vec![text.to_string()];
    }

    let sentence_end = regex::Regex::new(r"[.!?]+\s+").expect("valid sentence pattern");

    let mut sentences = Vec::new();
    let mut last_end = 0;
    for mat in sentence_end.find_iter(text) {
        sentences.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        sentences.push(&text[last_end..]);
    }

    let mut batches = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for sentence in sentences {
        let sentence_chars = sentence.chars().count();

        if current_chars + sentence_chars > MAX_BATCH_CHARS && !current.is_empty() {
            batches.push(current.trim().to_string());
            current.clear();
            current_chars = 0;
        }

        if sentence_chars > MAX_BATCH_CHARS {
            // No usable boundary: hard cut on characters
            let chars: Vec<char> = sentence.chars().collect();
            for chunk in chars.chunks(MAX_BATCH_CHARS) {
                batches.push(chunk.iter().collect());
            }
            continue;
        }

        current.push_str(sentence);
        current_chars += sentence_chars;
    }

    if !current.trim().is_empty() {
        batches.push(current.trim().to_string());
    }

    batches
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechRepository {
    async fn generate_speech(&self, request: &SpeechRequest) -> Result<SynthesisResult, String> {
        let start_time = std::time::Instant::now();

        let batches = split_into_batches(&request.text);
        tracing::info!(
            voice = %request.voice,
            speed = request.speed,
            model = %self.model,
            batch_count = batches.len(),
            "Starting OpenAI TTS synthesis"
        );

        let mut audio = Vec::new();
        for (index, batch) in batches.iter().enumerate() {
            let chunk = self.call_openai(batch, request.voice, request.speed).await?;
            tracing::debug!(
                batch_index = index,
                chunk_size = chunk.len(),
                "Batch synthesized"
            );
            audio.extend(chunk);
        }

        let url = self
            .store
            .save_mp3(&audio)
            .await
            .map_err(|e| format!("Failed to store audio: {}", e))?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            voice = %request.voice,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = request.text.chars().count(),
            audio_size_bytes = audio.len(),
            url = %url,
            "TTS synthesis completed"
        );

        Ok(SynthesisResult { url })
    }
}
