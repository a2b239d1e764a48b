use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Audio files served under `/audio`
pub const AUDIO_ROUTE: &str = "/audio";

/// Local directory holding synthesized clips, addressed by public URL
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
    public_base_url: String,
}

impl AudioStore {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: &str) -> Self {
        Self {
            dir: dir.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write an MP3 clip and return the URL it is reachable at
    pub async fn save_mp3(&self, audio: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!("{}.mp3", Uuid::new_v4());
        tokio::fs::write(self.dir.join(&file_name), audio).await?;

        tracing::debug!(
            file = %file_name,
            audio_size = audio.len(),
            "Audio clip stored"
        );

        Ok(self.url_for(&file_name))
    }

    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}{}/{}", self.public_base_url, AUDIO_ROUTE, file_name)
    }
}
