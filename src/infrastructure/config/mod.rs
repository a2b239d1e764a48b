use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Base URL under which stored audio is reachable, e.g. `http://127.0.0.1:8080`
    pub public_base_url: String,
    pub environment: Environment,
    pub log_format: LogFormat,
    // OpenAI
    pub openai_api_key: String,
    pub openai_tts_model: String,
    // Storage
    pub audio_dir: PathBuf,
    pub download_dir: PathBuf,
    // Playback
    pub player_command: Vec<String>,
    // Session
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub session_email: String,
    pub session_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

pub const DEFAULT_PLAYER_COMMAND: &str = "ffplay -nodisp -autoexit -loglevel quiet";

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let config = Config {
            public_base_url: env::var("PUBLIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| format!("http://{}:{}", host, port)),
            host,
            port,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            openai_api_key: env::var("OPENAI_API_KEY")?,
            openai_tts_model: env::var("OPENAI_TTS_MODEL").unwrap_or_else(|_| "tts-1".to_string()),
            audio_dir: env::var("AUDIO_DIR")
                .unwrap_or_else(|_| "./data/audio".to_string())
                .into(),
            download_dir: env::var("DOWNLOAD_DIR")
                .unwrap_or_else(|_| "./data/downloads".to_string())
                .into(),
            player_command: parse_command(
                &env::var("PLAYER_COMMAND").unwrap_or_else(|_| DEFAULT_PLAYER_COMMAND.to_string()),
            ),
            jwt_secret: env::var("JWT_SECRET")?,
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()?,
            session_email: env::var("SESSION_EMAIL")
                .unwrap_or_else(|_| "studio@localhost".to_string()),
            session_token: env::var("SESSION_TOKEN").ok().filter(|t| !t.trim().is_empty()),
        };

        if config.player_command.is_empty() {
            return Err("PLAYER_COMMAND must not be empty".into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Split a player command line on whitespace. Quoting is not supported.
pub fn parse_command(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
