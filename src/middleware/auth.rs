//! Middleware de autenticación por sesión
//!
//! La identidad viaja en la cookie `session_id` como token opaco. Cada
//! operación protegida pasa primero por uno de los gates de rol: si no
//! hay sesión o el rol no está permitido, la request se corta con 401
//! antes de tocar almacenamiento.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::models::auth::{SessionUser, UserRole};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Nombre de la cookie de sesión
pub const SESSION_COOKIE: &str = "session_id";

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: SessionUser,
}

impl AuthenticatedUser {
    pub fn id(&self) -> i32 {
        self.user.id
    }

    pub fn role(&self) -> UserRole {
        self.user.user_type
    }
}

/// Extrae el token de sesión del header Cookie.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Resuelve la sesión de la request, si la hay. Un acierto desliza la
/// expiración de la sesión.
pub async fn resolve_session(state: &AppState, headers: &HeaderMap) -> Option<SessionUser> {
    let token = session_token(headers)?;
    state.sessions.get(&token).await
}

/// Gate de rol genérico: sin sesión o con rol fuera del conjunto
/// permitido, la operación termina en 401 sin efectuar trabajo.
async fn require_role(
    state: AppState,
    allowed: &[UserRole],
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = resolve_session(&state, request.headers())
        .await
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    if !allowed.contains(&user.user_type) {
        return Err(AppError::Unauthorized("Unauthorized".to_string()));
    }

    request.extensions_mut().insert(AuthenticatedUser { user });
    Ok(next.run(request).await)
}

/// Gate para rutas exclusivas de clientes
pub async fn require_customer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, &[UserRole::Customer], request, next).await
}

/// Gate para rutas de staff (empleados y managers)
pub async fn require_staff(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, &[UserRole::Employee, UserRole::Manager], request, next).await
}

/// Gate exclusivo de managers
pub async fn require_manager(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(state, &[UserRole::Manager], request, next).await
}

/// Gate para rutas visibles a cualquier principal autenticado
pub async fn require_authenticated(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    require_role(
        state,
        &[UserRole::Customer, UserRole::Employee, UserRole::Manager],
        request,
        next,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_session_token_single_cookie() {
        let headers = headers_with_cookie("session_id=abc123");
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; session_id=tok-9; lang=es");
        assert_eq!(session_token(&headers).as_deref(), Some("tok-9"));
    }

    #[test]
    fn test_session_token_absent() {
        let headers = headers_with_cookie("theme=dark");
        assert!(session_token(&headers).is_none());

        let empty = HeaderMap::new();
        assert!(session_token(&empty).is_none());
    }
}
