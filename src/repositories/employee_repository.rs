//! Repositorio de empleados

use sqlx::PgPool;

use crate::models::employee::{EmployeeContact, EmployeeListing};
use crate::utils::errors::AppError;

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<EmployeeListing>, AppError> {
        let employees = sqlx::query_as::<_, EmployeeListing>(
            r#"
            SELECT id, name, email, phone, gender, hire_date, end_date, address
            FROM employees
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Campos públicos de contacto; visible también para clientes.
    pub async fn find_contact(
        &self,
        employee_id: i32,
    ) -> Result<Option<EmployeeContact>, AppError> {
        let contact = sqlx::query_as::<_, EmployeeContact>(
            "SELECT id, name, email, phone FROM employees WHERE id = $1",
        )
        .bind(employee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(contact)
    }
}
