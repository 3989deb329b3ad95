//! Rutas de autenticación
//!
//! Login, logout y consulta de sesión. Ninguna lleva gate de rol:
//! `current_user` sin sesión responde 200 con user null, no 401.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{AppendHeaders, IntoResponse},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{CurrentUserResponse, LoginRequest, LoginResponse, MessageResponse};
use crate::middleware::auth::{resolve_session, session_token, SESSION_COOKIE};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/current_user", get(current_user))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let controller = AuthController::new(state.pool.clone(), state.sessions.clone());
    let (token, user) = controller.login(request).await?;

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token
    );

    Ok((
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user,
        }),
    ))
}

async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let controller = AuthController::new(state.pool.clone(), state.sessions.clone());
    controller.logout(session_token(&headers)).await;

    // Expirar la cookie en el cliente además de borrar la sesión
    let cookie = format!("{}=; Path=/; HttpOnly; Max-Age=0", SESSION_COOKIE);

    (
        AppendHeaders([(header::SET_COOKIE, cookie)]),
        Json(MessageResponse::new("Logged out successfully")),
    )
}

async fn current_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<CurrentUserResponse> {
    let user = resolve_session(&state, &headers).await;
    Json(CurrentUserResponse { user })
}
