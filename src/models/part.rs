//! Modelo de Part
//!
//! Mapea a la tabla `parts`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Part {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
}
