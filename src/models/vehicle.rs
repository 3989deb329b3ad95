//! Modelo de Vehicle
//!
//! Mapea a la tabla `vehicles`. Un vehículo está "disponible" si ninguna
//! orden de venta referencia su VIN.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub year: i32,
    pub mileage: i32,
    pub price: Decimal,
}
