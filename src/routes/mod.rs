//! Routers de la API
//!
//! Un router por área; cada uno aplica su gate de rol como capa antes
//! de los handlers.

pub mod auth_routes;
pub mod customer_routes;
pub mod employee_routes;
pub mod manager_routes;
pub mod vehicle_routes;
