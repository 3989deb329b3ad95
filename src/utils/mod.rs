//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! de entrada y heurísticas de fechas.

pub mod dates;
pub mod errors;
pub mod validation;
