//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum, incluido el almacén de sesiones en memoria.

use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::SessionUser;

/// Una sesión autenticada con expiración deslizante.
#[derive(Clone, Debug)]
pub struct Session {
    pub user: SessionUser,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(user: SessionUser, lifetime_minutes: i64) -> Self {
        Self {
            user,
            expires_at: chrono::Utc::now() + chrono::Duration::minutes(lifetime_minutes),
        }
    }

    pub fn is_expired(&self) -> bool {
        chrono::Utc::now() > self.expires_at
    }
}

/// Almacén de sesiones en memoria, indexado por el token opaco que viaja
/// en la cookie. Sin compartición entre procesos: las sesiones mueren con
/// el proceso.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    lifetime_minutes: i64,
}

impl SessionStore {
    pub fn new(lifetime_minutes: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            lifetime_minutes,
        }
    }

    /// Crea una sesión nueva y devuelve su token opaco.
    pub async fn insert(&self, user: SessionUser) -> String {
        let token = Uuid::new_v4().to_string();
        let session = Session::new(user, self.lifetime_minutes);

        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Resuelve un token a su identidad. Un token desconocido o expirado
    /// devuelve `None`; un acierto desliza la expiración hacia adelante.
    pub async fn get(&self, token: &str) -> Option<SessionUser> {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(token) {
            Some(session) if !session.is_expired() => {
                session.expires_at =
                    chrono::Utc::now() + chrono::Duration::minutes(self.lifetime_minutes);
                Some(session.user.clone())
            }
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// Elimina una sesión incondicionalmente.
    pub async fn remove(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Limpiar sesiones expiradas
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| !session.is_expired());
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let sessions = SessionStore::new(config.session_lifetime_minutes);
        Self {
            pool,
            config,
            sessions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::auth::UserRole;

    fn alice() -> SessionUser {
        SessionUser {
            username: "alice".to_string(),
            user_type: UserRole::Customer,
            id: 1,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let store = SessionStore::new(30);
        let token = store.insert(alice()).await;

        let user = store.get(&token).await.expect("session should resolve");
        assert_eq!(user.username, "alice");
        assert_eq!(user.user_type, UserRole::Customer);
        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_unknown_token_is_none() {
        let store = SessionStore::new(30);
        assert!(store.get("no-such-token").await.is_none());
    }

    #[tokio::test]
    async fn test_remove_clears_session() {
        let store = SessionStore::new(30);
        let token = store.insert(alice()).await;

        store.remove(&token).await;
        assert!(store.get(&token).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_session_is_dropped() {
        // Vida negativa: la sesión nace ya expirada
        let store = SessionStore::new(-1);
        let token = store.insert(alice()).await;

        assert!(store.get(&token).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_get_slides_expiry_forward(){
        let store = SessionStore::new(30);
        let token = store.insert(alice()).await;

        let before = {
            let sessions = store.sessions.read().await;
            sessions.get(&token).unwrap().expires_at
        };

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        store.get(&token).await.unwrap();

        let after = {
            let sessions = store.sessions.read().await;
            sessions.get(&token).unwrap().expires_at
        };
        assert!(after > before);
    }

    #[tokio::test]
    async fn test_cleanup_expired_retains_live_sessions() {
        let live = SessionStore::new(30);
        let token = live.insert(alice()).await;
        live.cleanup_expired().await;
        assert!(live.get(&token).await.is_some());
    }
}
