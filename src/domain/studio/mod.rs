pub mod notification;
pub mod state;

pub use notification::{Notification, NotificationVariant, Notifier};
pub use state::{StudioEvent, StudioState, StudioStore, PROGRESS_CEILING};
