//! Modelos del sistema
//!
//! Este módulo contiene los registros tipados que mapean exactamente
//! al schema PostgreSQL (ver `schema.sql`). Las filas dinámicas quedan
//! prohibidas: toda consulta se mapea a uno de estos structs en la
//! frontera de los repositorios.

pub mod auth;
pub mod customer;
pub mod employee;
pub mod part;
pub mod vehicle;
