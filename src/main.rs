use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use speech_studio::infrastructure::config::{Config, LogFormat};
use speech_studio::infrastructure::http::{start_http_server, HttpDeps};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Speech Studio on {}:{}",
        config.host,
        config.port
    );

    tokio::fs::create_dir_all(&config.audio_dir).await?;
    tokio::fs::create_dir_all(&config.download_dir).await?;
    tracing::info!(
        audio_dir = %config.audio_dir.display(),
        download_dir = %config.download_dir.display(),
        "Storage directories ready"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Collaborators
    tracing::info!("Instantiating collaborators...");
    let openai_client = Arc::new(async_openai::Client::with_config(
        async_openai::config::OpenAIConfig::new().with_api_key(config.openai_api_key.clone()),
    ));
    let audio_store = speech_studio::infrastructure::repositories::AudioStore::new(
        config.audio_dir.clone(),
        &config.public_base_url,
    );
    let synthesizer = Arc::new(speech_studio::infrastructure::repositories::OpenAiSpeechRepository::new(
        openai_client,
        config.openai_tts_model.clone(),
        audio_store,
    ));
    let player = Arc::new(speech_studio::infrastructure::media::CommandPlayer::new(&config.player_command)?);
    let auth_provider = Arc::new(speech_studio::infrastructure::auth::JwtAuthProvider::new(
        speech_studio::infrastructure::auth::JwtManager::new(
            config.jwt_secret.clone(),
            config.jwt_expiration_hours,
        ),
        config.session_email.clone(),
    ));

    // 2. Session gate subscribes before the session is resolved, so it starts in the loading view
    let gate = Arc::new(speech_studio::domain::session::SessionGate::start(auth_provider.as_ref()));
    auth_provider.restore(config.session_token.as_deref());

    // 3. Services
    tracing::info!("Instantiating services...");
    let store = Arc::new(speech_studio::domain::studio::StudioStore::new());
    let broadcaster = speech_studio::infrastructure::http::sse::create_broadcaster();
    let speech_service = Arc::new(speech_studio::domain::speech::SpeechService::new(
        synthesizer,
        store.clone(),
        broadcaster.clone(),
    ));
    let playback_manager = Arc::new(speech_studio::domain::playback::PlaybackManager::new(
        player,
        store.clone(),
    ));
    let download_service = Arc::new(speech_studio::domain::download::DownloadService::new(
        reqwest::Client::new(),
        config.download_dir.clone(),
    ));

    // 4. Controllers
    tracing::info!("Instantiating controllers...");
    let deps = HttpDeps {
        gate: gate.clone(),
        audio_dir: config.audio_dir.clone(),
        session_controller: Arc::new(speech_studio::controllers::session::SessionController::new(
            gate,
            auth_provider,
        )),
        speech_controller: Arc::new(speech_studio::controllers::speech::SpeechController::new(
            speech_service,
            store.clone(),
        )),
        playback_controller: Arc::new(speech_studio::controllers::playback::PlaybackController::new(
            playback_manager,
        )),
        download_controller: Arc::new(speech_studio::controllers::download::DownloadController::new(
            download_service,
        )),
        events_controller: Arc::new(speech_studio::controllers::events::EventsController::new(
            broadcaster,
            store,
        )),
    };

    // Start HTTP server with all routes
    start_http_server(config, deps).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speech_studio=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "speech_studio=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
