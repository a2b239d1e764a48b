pub mod error;
pub mod manager;

pub use error::PlaybackError;
pub use manager::PlaybackManager;
