use crate::domain::Identity;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The signed-in identity, shared by the clients that act on behalf of the user.
#[derive(Clone, Default, Debug)]
pub struct Session {
    identity: Arc<RwLock<Option<Identity>>>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub async fn current(&self) -> Option<Identity> {
        self.identity.read().await.clone()
    }

    pub async fn id_token(&self) -> Option<String> {
        self.identity.read().await.as_ref().map(|identity| identity.id_token.clone())
    }

    pub async fn set(&self, identity: Identity) {
        *self.identity.write().await = Some(identity);
    }

    pub async fn refresh_token(&self, id_token: String) {
        if let Some(identity) = self.identity.write().await.as_mut() {
            identity.id_token = id_token;
        }
    }

    pub async fn clear(&self) -> Option<Identity> {
        self.identity.write().await.take()
    }
}
