use async_trait::async_trait;
use speech_studio::domain::playback::PlaybackError;
use speech_studio::domain::speech::{SpeechRequest, SynthesisResult};
use speech_studio::infrastructure::media::{EndNotifier, MediaBackend, PlaybackHandle};
use speech_studio::infrastructure::repositories::{AudioStore, SpeechSynthesizer};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const FAKE_CLIP: &[u8] = b"ID3-fake-mp3-clip";

/// Synthesizer that stores a fixed clip, or fails on demand
pub struct FakeSynthesizer {
    store: AudioStore,
    calls: AtomicUsize,
    fail: AtomicBool,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FakeSynthesizer {
    pub fn new(store: AudioStore) -> Self {
        Self {
            store,
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn last_request(&self) -> Option<SpeechRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SpeechSynthesizer for FakeSynthesizer {
    async fn generate_speech(&self, request: &SpeechRequest) -> Result<SynthesisResult, String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        if self.fail.load(Ordering::SeqCst) {
            return Err("synthesis backend unavailable".to_string());
        }

        let url = self
            .store
            .save_mp3(FAKE_CLIP)
            .await
            .map_err(|e| e.to_string())?;
        Ok(SynthesisResult { url })
    }
}

/// Media backend that remembers what it played and what it paused
#[derive(Default)]
pub struct RecordingPlayer {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingPlayer {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

struct RecordingHandle {
    url: String,
    events: Arc<Mutex<Vec<String>>>,
}

impl PlaybackHandle for RecordingHandle {
    fn url(&self) -> &str {
        &self.url
    }

    fn pause(&mut self) {
        self.events.lock().unwrap().push(format!("pause {}", self.url));
    }
}

impl MediaBackend for RecordingPlayer {
    fn start(
        &self,
        url: &str,
        _on_end: EndNotifier,
    ) -> Result<Box<dyn PlaybackHandle>, PlaybackError> {
        self.events.lock().unwrap().push(format!("play {}", url));
        Ok(Box::new(RecordingHandle {
            url: url.to_string(),
            events: self.events.clone(),
        }))
    }
}
