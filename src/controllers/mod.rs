//! Controllers del sistema
//!
//! Orquestan la lógica de cada operación sobre los repositorios y mapean
//! resultados a DTOs. Los handlers HTTP quedan finos en `routes`.

pub mod auth_controller;
pub mod customer_controller;
pub mod employee_controller;
pub mod manager_controller;
pub mod vehicle_controller;
