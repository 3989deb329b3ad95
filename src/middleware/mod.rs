//! Middleware del sistema
//!
//! Este módulo contiene el middleware de autenticación por sesión y la
//! configuración de CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
