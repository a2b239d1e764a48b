pub mod sse;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::AUDIO_ROUTE;
use crate::{
    controllers::{
        download::DownloadController, events::EventsController, health,
        playback::PlaybackController, session::SessionController, speech::SpeechController,
    },
    domain::session::SessionGate,
    infrastructure::auth::{request_id_middleware, session_gate_middleware},
};

/// Everything the router needs, already wired
pub struct HttpDeps {
    pub gate: Arc<SessionGate>,
    pub audio_dir: PathBuf,
    pub session_controller: Arc<SessionController>,
    pub speech_controller: Arc<SpeechController>,
    pub playback_controller: Arc<PlaybackController>,
    pub download_controller: Arc<DownloadController>,
    pub events_controller: Arc<EventsController>,
}

/// Build the application router
pub fn build_router(deps: HttpDeps, permissive_cors: bool) -> Router {
    let gate_layer = middleware::from_fn_with_state(deps.gate.clone(), session_gate_middleware);

    // Session routes (public - they drive the sign-in view)
    let session_routes = Router::new()
        .route("/api/session", get(SessionController::get_session))
        .route("/api/session/login", post(SessionController::login))
        .route("/api/session/logout", post(SessionController::logout))
        .with_state(deps.session_controller);

    // Studio routes (application view only)
    let speech_routes = Router::new()
        .route("/api/speech", post(SpeechController::generate))
        .route("/api/studio", get(SpeechController::get_studio))
        .route("/api/voices", get(SpeechController::list_voices))
        .with_state(deps.speech_controller)
        .layer(gate_layer.clone());

    let playback_routes = Router::new()
        .route("/api/playback/play", post(PlaybackController::play))
        .route("/api/playback/pause", post(PlaybackController::pause))
        .route("/api/playback/toggle", post(PlaybackController::toggle))
        .with_state(deps.playback_controller)
        .layer(gate_layer.clone());

    let download_routes = Router::new()
        .route("/api/download", post(DownloadController::download))
        .with_state(deps.download_controller)
        .layer(gate_layer.clone());

    let event_routes = Router::new()
        .route("/api/events", get(EventsController::stream))
        .with_state(deps.events_controller)
        .layer(gate_layer);

    let mut app = Router::new()
        .route("/health", get(health::health))
        .nest_service(AUDIO_ROUTE, ServeDir::new(deps.audio_dir))
        .merge(session_routes)
        .merge(speech_routes)
        .merge(playback_routes)
        .merge(download_routes)
        .merge(event_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        );

    if permissive_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Start the HTTP server and serve until Ctrl-C
pub async fn start_http_server(
    config: Arc<Config>,
    deps: HttpDeps,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(deps, config.is_development());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
