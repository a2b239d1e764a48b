use super::error::SessionError;
use super::model::{AuthState, SessionToken};
use async_trait::async_trait;
use tokio::sync::watch;

/// External authentication stream
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Subscribe to session changes. The receiver always holds the latest state.
    fn on_auth_state_changed(&self) -> watch::Receiver<AuthState>;

    /// Trigger the sign-in flow
    async fn login(&self) -> Result<SessionToken, SessionError>;

    async fn logout(&self);
}
