use super::model::{AuthState, View};
use super::provider::AuthProvider;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Decides which view is shown from the latest authentication state.
///
/// Holds the only subscription to the auth stream. The subscription lives as
/// long as the gate: dropping the gate unsubscribes.
pub struct SessionGate {
    auth: watch::Receiver<AuthState>,
    watcher: JoinHandle<()>,
}

impl SessionGate {
    /// Subscribe once to the provider. Must be called from within a tokio runtime.
    pub fn start(provider: &dyn AuthProvider) -> Self {
        let auth = provider.on_auth_state_changed();

        let mut changes = auth.clone();
        let watcher = tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let view = View::from(&*changes.borrow_and_update());
                tracing::info!(view = view_name(&view), "Session view changed");
            }
            tracing::debug!("Authentication stream closed");
        });

        Self { auth, watcher }
    }

    /// View for the latest observed state
    pub fn view(&self) -> View {
        View::from(&*self.auth.borrow())
    }

    /// Tear down the subscription
    pub fn stop(self) {}
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        self.watcher.abort();
    }
}

fn view_name(view: &View) -> &'static str {
    match view {
        View::Loading => "loading",
        View::SignIn => "sign_in",
        View::Application(_) => "application",
    }
}
