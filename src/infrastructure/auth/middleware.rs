use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{
    domain::session::{SessionGate, View},
    error::AppError,
};

/// Only let requests through while the gate shows the application view.
/// The signed-in session is injected into request extensions.
pub async fn session_gate_middleware(
    State(gate): State<Arc<SessionGate>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match gate.view() {
        View::Loading => Err(AppError::SessionLoading),
        View::SignIn => Err(AppError::Unauthorized(
            "Please sign in to start converting text to speech".to_string(),
        )),
        View::Application(session) => {
            request.extensions_mut().insert(session);
            Ok(next.run(request).await)
        }
    }
}
