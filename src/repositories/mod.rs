//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla (o grupo de tablas afines). Toda consulta es
//! parametrizada y devuelve `Result`: "sin filas" es `None`/vector vacío
//! en la rama `Ok`, nunca se confunde con una falla de almacenamiento.

pub mod auth_repository;
pub mod customer_repository;
pub mod employee_repository;
pub mod part_repository;
pub mod report_repository;
pub mod sales_repository;
pub mod service_repository;
pub mod vehicle_repository;
