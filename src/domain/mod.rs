pub mod download;
pub mod history;
pub mod playback;
pub mod session;
pub mod speech;
pub mod studio;
