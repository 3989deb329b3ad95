//! Controller de autenticación
//!
//! Login para los tres roles, logout y consulta de sesión. Las
//! credenciales de employee y manager viven en la misma tabla; un login
//! de manager exige además que el empleado resuelto tenga `mgr_id` NULL.

use sqlx::PgPool;
use tracing::info;

use crate::dto::auth_dto::LoginRequest;
use crate::models::auth::{SessionUser, UserRole};
use crate::repositories::auth_repository::AuthRepository;
use crate::state::SessionStore;
use crate::utils::errors::AppError;

pub struct AuthController {
    repository: AuthRepository,
    sessions: SessionStore,
}

impl AuthController {
    pub fn new(pool: PgPool, sessions: SessionStore) -> Self {
        Self {
            repository: AuthRepository::new(pool),
            sessions,
        }
    }

    /// Valida credenciales y crea la sesión. Devuelve el token opaco para
    /// la cookie junto con la identidad almacenada.
    pub async fn login(&self, request: LoginRequest) -> Result<(String, SessionUser), AppError> {
        let (username, password, user_type) =
            match (request.username, request.password, request.user_type) {
                (Some(u), Some(p), Some(t)) if !u.is_empty() && !p.is_empty() && !t.is_empty() => {
                    (u, p, t)
                }
                _ => return Err(AppError::BadRequest("Missing required fields".to_string())),
            };

        let role = UserRole::parse(&user_type)
            .ok_or_else(|| AppError::BadRequest("Invalid user type".to_string()))?;

        // La respuesta ante username inexistente y ante password incorrecto
        // es la misma: nunca se revela si la cuenta existe.
        let (principal_id, password_hash) = match role {
            UserRole::Customer => {
                let credentials = self
                    .repository
                    .find_customer_credentials(&username)
                    .await?
                    .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;
                (credentials.customer_id, credentials.password_hash)
            }
            UserRole::Employee | UserRole::Manager => {
                let credentials = self
                    .repository
                    .find_employee_credentials(&username)
                    .await?
                    .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;
                (credentials.employee_id, credentials.password_hash)
            }
        };

        let password_valid = bcrypt::verify(&password, &password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !password_valid {
            info!("Login failed: {} ({})", username, role.as_str());
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        // mgr_id NULL marca al empleado como manager
        if role == UserRole::Manager {
            let employee = self
                .repository
                .find_employee(principal_id)
                .await?
                .ok_or_else(|| {
                    AppError::Unauthorized("Manager record not found".to_string())
                })?;

            if !employee.is_manager() {
                return Err(AppError::Unauthorized(
                    "Not authorized as manager".to_string(),
                ));
            }
        }

        let user = SessionUser {
            username: username.clone(),
            user_type: role,
            id: principal_id,
        };
        let token = self.sessions.insert(user.clone()).await;

        info!("Login successful: {} ({})", username, role.as_str());
        Ok((token, user))
    }

    /// Cierra la sesión incondicionalmente; nunca falla.
    pub async fn logout(&self, token: Option<String>) {
        if let Some(token) = token {
            self.sessions.remove(&token).await;
        }
    }
}
