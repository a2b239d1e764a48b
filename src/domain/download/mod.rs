use chrono::Utc;
use std::path::{Path, PathBuf};

/// Saves audio resources into the downloads directory
pub struct DownloadService {
    client: reqwest::Client,
    dir: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum DownloadError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadService {
    pub fn new(client: reqwest::Client, dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            dir: dir.into(),
        }
    }

    /// Save `url` as `filename` (or `speech-<millis>.mp3`).
    ///
    /// Failures are not reported to the caller beyond a `None`; there is no
    /// check that the resource exists before trying.
    pub async fn download(&self, url: &str, filename: Option<&str>) -> Option<PathBuf> {
        let name = filename
            .and_then(sanitize_filename)
            .unwrap_or_else(default_filename);
        let target = self.dir.join(&name);

        match self.save(url, &target).await {
            Ok(bytes) => {
                tracing::info!(url = %url, path = %target.display(), bytes = bytes, "Audio downloaded");
                Some(target)
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Audio download failed");
                None
            }
        }
    }

    async fn save(&self, url: &str, target: &Path) -> Result<usize, DownloadError> {
        let bytes = if url.starts_with("http://") || url.starts_with("https://") {
            self.client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec()
        } else {
            let path = url.strip_prefix("file://").unwrap_or(url);
            tokio::fs::read(path).await?
        };

        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(target, &bytes).await?;
        Ok(bytes.len())
    }
}

pub fn default_filename() -> String {
    format!("speech-{}.mp3", Utc::now().timestamp_millis())
}

/// Keep only the final path component so a name cannot escape the downloads directory
fn sanitize_filename(name: &str) -> Option<String> {
    Path::new(name.trim())
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}
