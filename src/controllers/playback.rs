use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::playback::{PlaybackError, PlaybackManager},
    error::AppResult,
};

/// Request for POST /api/playback/play
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayRequest {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaybackResponse {
    pub is_playing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

pub struct PlaybackController {
    manager: Arc<PlaybackManager>,
}

impl PlaybackController {
    pub fn new(manager: Arc<PlaybackManager>) -> Self {
        Self { manager }
    }

    /// POST /api/playback/play - Play a clip, replacing whatever is playing
    pub async fn play(
        State(controller): State<Arc<PlaybackController>>,
        Json(request): Json<PlayRequest>,
    ) -> AppResult<Json<PlaybackResponse>> {
        if request.url.trim().is_empty() {
            return Err(PlaybackError::NoAudio.into());
        }

        controller.manager.play(&request.url)?;
        Ok(Json(controller.response(true)))
    }

    /// POST /api/playback/pause
    pub async fn pause(State(controller): State<Arc<PlaybackController>>) -> Json<PlaybackResponse> {
        controller.manager.pause();
        Json(controller.response(false))
    }

    /// POST /api/playback/toggle - Play/pause the current audio
    pub async fn toggle(
        State(controller): State<Arc<PlaybackController>>,
    ) -> AppResult<Json<PlaybackResponse>> {
        let is_playing = controller.manager.toggle_current()?;
        Ok(Json(controller.response(is_playing)))
    }

    fn response(&self, is_playing: bool) -> PlaybackResponse {
        PlaybackResponse {
            is_playing,
            url: self.manager.active_url(),
        }
    }
}
