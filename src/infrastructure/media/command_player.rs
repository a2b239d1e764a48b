use super::{EndNotifier, MediaBackend, PlaybackHandle};
use crate::domain::playback::PlaybackError;
use std::process::Stdio;
use tokio::process::Command;
use tokio::sync::oneshot;

/// Plays clips by running an external player, e.g. `ffplay -nodisp -autoexit <url>`.
/// The URL is appended as the last argument.
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(command: &[String]) -> Result<Self, PlaybackError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| PlaybackError::Start("empty player command".to_string()))?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl MediaBackend for CommandPlayer {
    fn start(&self, url: &str, on_end: EndNotifier) -> Result<Box<dyn PlaybackHandle>, PlaybackError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PlaybackError::Start(format!("{}: {}", self.program, e)))?;

        tracing::debug!(
            program = %self.program,
            pid = child.id(),
            handle = on_end.id(),
            url = %url,
            "Player process started"
        );

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::select! {
                status = child.wait() => {
                    tracing::debug!(status = ?status, handle = on_end.id(), "Player process exited");
                    on_end.ended();
                }
                _ = &mut stop_rx => {
                    if let Err(e) = child.kill().await {
                        tracing::debug!(error = %e, "Player process already gone");
                    }
                }
            }
        });

        Ok(Box::new(CommandHandle {
            url: url.to_string(),
            stop: Some(stop_tx),
        }))
    }
}

struct CommandHandle {
    url: String,
    stop: Option<oneshot::Sender<()>>,
}

impl PlaybackHandle for CommandHandle {
    fn url(&self) -> &str {
        &self.url
    }

    fn pause(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }
}
