use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signed-in identity. The gate only cares whether one is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
}

/// What the authentication stream yields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<Session>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn signed_in(session: Session) -> Self {
        Self {
            user: Some(session),
            is_loading: false,
        }
    }
}

/// The three mutually exclusive views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", content = "user", rename_all = "snake_case")]
pub enum View {
    Loading,
    SignIn,
    Application(Session),
}

impl From<&AuthState> for View {
    fn from(state: &AuthState) -> Self {
        match (&state.user, state.is_loading) {
            (_, true) => View::Loading,
            (None, false) => View::SignIn,
            (Some(session), false) => View::Application(session.clone()),
        }
    }
}

/// Token returned by a sign-in, usable to restore the session later
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: String,
    pub expires_in: i64,
}
