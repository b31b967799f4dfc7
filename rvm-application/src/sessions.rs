use std::collections::HashSet;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Live admin login sessions, keyed by opaque bearer token.
#[derive(Debug, Default)]
pub struct SessionStore {
    tokens: RwLock<HashSet<String>>,
}

impl SessionStore {
    pub async fn issue(&self) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.write().await.insert(token.clone());
        token
    }

    pub async fn contains(&self, token: &str) -> bool {
        self.tokens.read().await.contains(token)
    }

    /// Returns whether the token was live.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token)
    }
}
