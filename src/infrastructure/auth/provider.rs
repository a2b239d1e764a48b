use super::jwt::JwtManager;
use crate::domain::session::{AuthProvider, AuthState, Session, SessionError, SessionToken};
use async_trait::async_trait;
use tokio::sync::watch;
use uuid::Uuid;

/// Local authentication stream backed by signed session tokens.
///
/// Starts in the loading state until [`JwtAuthProvider::restore`] resolves
/// the persisted token (if any).
///
/// There is a single local account: `login` takes no credentials, and the
/// issued token is only read back by `restore` at startup. Gated routes check
/// the shared auth state, not a bearer token on each request.
pub struct JwtAuthProvider {
    jwt: JwtManager,
    email: String,
    state: watch::Sender<AuthState>,
}

impl JwtAuthProvider {
    pub fn new(jwt: JwtManager, email: String) -> Self {
        let (state, _) = watch::channel(AuthState::loading());
        Self { jwt, email, state }
    }

    /// Finish loading: sign in from a previously issued token, or fall back to signed out
    pub fn restore(&self, token: Option<&str>) {
        let next = match token.map(|t| self.jwt.validate_token(t)) {
            Some(Ok(session)) => {
                tracing::info!(email = %session.email, "Session restored from token");
                AuthState::signed_in(session)
            }
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Stored session token rejected");
                AuthState::signed_out()
            }
            None => AuthState::signed_out(),
        };
        self.state.send_replace(next);
    }

    fn current_session(&self) -> Option<Session> {
        self.state.borrow().user.clone()
    }
}

#[async_trait]
impl AuthProvider for JwtAuthProvider {
    fn on_auth_state_changed(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    async fn login(&self) -> Result<SessionToken, SessionError> {
        let session = self.current_session().unwrap_or_else(|| Session {
            user_id: Uuid::new_v4(),
            email: self.email.clone(),
        });

        let token = self.jwt.generate_token(&session)?;
        tracing::info!(user_id = %session.user_id, email = %session.email, "Signed in");
        self.state.send_replace(AuthState::signed_in(session));

        Ok(SessionToken {
            token,
            expires_in: self.jwt.expires_in_secs(),
        })
    }

    async fn logout(&self) {
        if let Some(session) = self.current_session() {
            tracing::info!(user_id = %session.user_id, "Signed out");
        }
        self.state.send_replace(AuthState::signed_out());
    }
}
