//! Modelos de autenticación
//!
//! Roles, identidad de sesión y filas de credenciales.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Rol de un principal autenticado.
///
/// Un manager es un empleado cuyo `mgr_id` es NULL (raíz de la jerarquía);
/// sus credenciales viven en `employee_auth` igual que las de un empleado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Employee,
    Manager,
}

impl UserRole {
    /// Parsea el `user_type` del payload de login.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "customer" => Some(UserRole::Customer),
            "employee" => Some(UserRole::Employee),
            "manager" => Some(UserRole::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Employee => "employee",
            UserRole::Manager => "manager",
        }
    }
}

/// Identidad almacenada en la sesión y expuesta en `current_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub user_type: UserRole,
    pub id: i32,
}

/// Fila de credenciales de `customer_auth`
#[derive(Debug, Clone, FromRow)]
pub struct CustomerCredentials {
    pub username: String,
    pub password_hash: String,
    pub customer_id: i32,
}

/// Fila de credenciales de `employee_auth`
#[derive(Debug, Clone, FromRow)]
pub struct EmployeeCredentials {
    pub username: String,
    pub password_hash: String,
    pub employee_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_roles() {
        assert_eq!(UserRole::parse("customer"), Some(UserRole::Customer));
        assert_eq!(UserRole::parse("employee"), Some(UserRole::Employee));
        assert_eq!(UserRole::parse("manager"), Some(UserRole::Manager));
    }

    #[test]
    fn test_parse_invalid_role() {
        assert_eq!(UserRole::parse("admin"), None);
        assert_eq!(UserRole::parse(""), None);
        assert_eq!(UserRole::parse("Customer"), None);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&UserRole::Manager).unwrap(),
            "\"manager\""
        );
    }
}
