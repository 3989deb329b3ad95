//! Repositorio de credenciales
//!
//! Busca credenciales por username en `customer_auth` / `employee_auth`
//! y resuelve la verificación de manager (`mgr_id` NULL).

use sqlx::PgPool;

use crate::models::auth::{CustomerCredentials, EmployeeCredentials};
use crate::models::employee::Employee;
use crate::utils::errors::AppError;

pub struct AuthRepository {
    pool: PgPool,
}

impl AuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_customer_credentials(
        &self,
        username: &str,
    ) -> Result<Option<CustomerCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, CustomerCredentials>(
            "SELECT username, password_hash, customer_id FROM customer_auth WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    pub async fn find_employee_credentials(
        &self,
        username: &str,
    ) -> Result<Option<EmployeeCredentials>, AppError> {
        let credentials = sqlx::query_as::<_, EmployeeCredentials>(
            "SELECT username, password_hash, employee_id FROM employee_auth WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credentials)
    }

    /// Carga la fila completa del empleado para la verificación de manager.
    pub async fn find_employee(&self, employee_id: i32) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, name, email, phone, gender, hire_date, end_date, address, mgr_id
            FROM employees
            WHERE id = $1
            "#,
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }
}
