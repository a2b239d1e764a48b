pub mod download;
pub mod events;
pub mod health;
pub mod playback;
pub mod session;
pub mod speech;
