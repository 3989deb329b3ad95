//! DTOs del área pública de vehículos

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::vehicle::Vehicle;

#[derive(Debug, Serialize)]
pub struct AvailableVehiclesResponse {
    pub vehicles: Vec<Vehicle>,
}

/// Request de compra; `price` opcional para responder 400 si falta
#[derive(Debug, Deserialize)]
pub struct BuyVehicleRequest {
    pub price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_buy_request_parses_numeric_price() {
        let request: BuyVehicleRequest =
            serde_json::from_str(r#"{"price": 18500.50}"#).unwrap();
        assert_eq!(request.price, Some(dec!(18500.50)));
    }

    #[test]
    fn test_buy_request_without_price() {
        let request: BuyVehicleRequest = serde_json::from_str("{}").unwrap();
        assert!(request.price.is_none());
    }
}
