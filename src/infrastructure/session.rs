use tokio::sync::watch;
use tracing::info;

use crate::domain::repositories::sessions::SessionGateway;

/// In-process authentication state. The embedding surface drives sign-in and
/// sign-out; every change is broadcast to subscribers, mirroring the auth
/// provider's state-change subscription.
pub struct AuthState {
    tx: watch::Sender<Option<String>>,
}

impl AuthState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn sign_in(&self, identity: String) {
        info!(identity = %identity, "session: signed in");
        self.tx.send_replace(Some(identity));
    }

    pub fn sign_out(&self) {
        info!("session: signed out");
        self.tx.send_replace(None);
    }

    /// Delivers the current identity immediately and every change after it.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGateway for AuthState {
    fn current_identity(&self) -> Option<String> {
        self.tx.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identity_follows_sign_in_and_sign_out() {
        let auth = AuthState::new();
        assert_eq!(auth.current_identity(), None);

        auth.sign_in("ana@example.com".to_string());
        assert_eq!(auth.current_identity(), Some("ana@example.com".to_string()));

        auth.sign_out();
        assert_eq!(auth.current_identity(), None);
    }

    #[tokio::test]
    async fn subscribers_observe_every_state_change() {
        let auth = AuthState::new();
        let mut rx = auth.subscribe();

        auth.sign_in("ana@example.com".to_string());
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some("ana@example.com".to_string()));

        auth.sign_out();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), None);
    }
}
