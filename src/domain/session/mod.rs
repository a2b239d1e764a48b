pub mod error;
pub mod gate;
pub mod model;
pub mod provider;

pub use error::SessionError;
pub use gate::SessionGate;
pub use model::{AuthState, Session, SessionToken, View};
pub use provider::AuthProvider;
