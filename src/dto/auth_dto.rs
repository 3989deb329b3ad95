//! DTOs de autenticación

use serde::{Deserialize, Serialize};

use crate::models::auth::SessionUser;

/// Request de login. Los campos son opcionales para poder responder
/// "Missing required fields" en vez de un error de deserialización.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

/// Response de login exitoso
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}

/// Response de `current_user`; `user` es null sin sesión activa
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: Option<SessionUser>,
}

/// Response genérica con solo un mensaje
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
