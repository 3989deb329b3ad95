//! Modelo de Customer
//!
//! Mapea exactamente a la tabla `customers`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub closure_date: Option<NaiveDate>,
}
