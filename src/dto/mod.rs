//! DTOs de la API
//!
//! Requests y responses JSON por área. Las filas de consultas con joins
//! viven aquí, no en `models`, porque son formas de salida y no entidades.

pub mod auth_dto;
pub mod customer_dto;
pub mod employee_dto;
pub mod manager_dto;
pub mod vehicle_dto;
