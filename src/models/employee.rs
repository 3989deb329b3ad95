//! Modelo de Employee
//!
//! Mapea a la tabla `employees`. Un `mgr_id` NULL marca al empleado como
//! manager; el resto cuelga de la jerarquía.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
    pub mgr_id: Option<i32>,
}

impl Employee {
    pub fn is_manager(&self) -> bool {
        self.mgr_id.is_none()
    }
}

/// Campos públicos de contacto que puede ver un cliente
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeContact {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Fila del listado de empleados (sin `mgr_id`, como el detalle de staff)
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeListing {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(mgr_id: Option<i32>) -> Employee {
        Employee {
            id: 1,
            name: "Dana".to_string(),
            email: None,
            phone: None,
            gender: None,
            hire_date: None,
            end_date: None,
            address: None,
            mgr_id,
        }
    }

    #[test]
    fn test_null_mgr_id_is_manager() {
        assert!(employee(None).is_manager());
    }

    #[test]
    fn test_non_null_mgr_id_is_not_manager() {
        assert!(!employee(Some(7)).is_manager());
    }
}
