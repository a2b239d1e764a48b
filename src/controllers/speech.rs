use axum::{extract::State, Extension, Json};
use std::sync::Arc;
use tracing::Instrument;

use crate::{
    domain::{
        history::Generation,
        session::Session,
        speech::{voice_catalogue, SpeechRequest, SpeechService, SpeechServiceApi, VoiceOption},
        studio::{StudioState, StudioStore},
    },
    error::{AppError, AppResult},
    infrastructure::auth::RequestId,
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
    store: Arc<StudioStore>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>, store: Arc<StudioStore>) -> Self {
        Self {
            speech_service,
            store,
        }
    }

    /// POST /api/speech - Convert text to speech
    ///
    /// The synthesis runs on its own task so a client that disconnects
    /// early does not cut it short.
    pub async fn generate(
        State(controller): State<Arc<SpeechController>>,
        Extension(session): Extension<Session>,
        Extension(request_id): Extension<RequestId>,
        Json(request): Json<SpeechRequest>,
    ) -> AppResult<Json<Generation>> {
        let span = tracing::info_span!(
            "generate_speech",
            user_id = %session.user_id,
            request_id = %request_id.0
        );
        let service = controller.speech_service.clone();

        let generation = tokio::spawn(
            async move {
                service
                    .generate_speech(&request.text, request.voice, request.speed)
                    .await
            }
            .instrument(span),
        )
        .await
        .map_err(|e| AppError::Internal(format!("speech task failed: {}", e)))??;

        Ok(Json(generation))
    }

    /// GET /api/studio - Snapshot of the studio state
    pub async fn get_studio(State(controller): State<Arc<SpeechController>>) -> Json<StudioState> {
        Json(controller.store.snapshot())
    }

    /// GET /api/voices - Voice catalogue
    pub async fn list_voices() -> Json<Vec<VoiceOption>> {
        Json(voice_catalogue())
    }
}
