use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::session::{AuthProvider, SessionGate, SessionToken, View},
    error::AppResult,
};

pub struct SessionController {
    gate: Arc<SessionGate>,
    provider: Arc<dyn AuthProvider>,
}

impl SessionController {
    pub fn new(gate: Arc<SessionGate>, provider: Arc<dyn AuthProvider>) -> Self {
        Self { gate, provider }
    }

    /// GET /api/session - Which view the client should render
    pub async fn get_session(State(controller): State<Arc<SessionController>>) -> Json<View> {
        Json(controller.gate.view())
    }

    /// POST /api/session/login - Trigger sign-in
    pub async fn login(
        State(controller): State<Arc<SessionController>>,
    ) -> AppResult<Json<SessionToken>> {
        let token = controller.provider.login().await?;
        Ok(Json(token))
    }

    /// POST /api/session/logout
    pub async fn logout(State(controller): State<Arc<SessionController>>) -> Json<View> {
        controller.provider.logout().await;
        Json(View::SignIn)
    }
}
