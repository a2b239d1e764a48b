use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("sign-in failed: {0}")]
    SignIn(String),
    #[error("invalid session token: {0}")]
    InvalidToken(String),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::SignIn(msg) => AppError::Internal(msg),
            SessionError::InvalidToken(msg) => AppError::Unauthorized(msg),
        }
    }
}
