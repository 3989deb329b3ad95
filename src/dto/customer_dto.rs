//! DTOs del área de clientes

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::customer::Customer;
use crate::models::employee::EmployeeContact;
use crate::models::vehicle::Vehicle;

#[derive(Debug, Serialize)]
pub struct CustomerVehiclesResponse {
    pub vehicles: Vec<Vehicle>,
}

#[derive(Debug, Serialize)]
pub struct VehicleDetailResponse {
    pub vehicle: Vehicle,
}

#[derive(Debug, Serialize)]
pub struct CustomerInfoResponse {
    pub customer: Customer,
}

#[derive(Debug, Serialize)]
pub struct EmployeeContactResponse {
    pub employee: EmployeeContact,
}

/// Request de actualización parcial del perfil.
///
/// Solo las columnas de la lista blanca {name, phone, email, address,
/// gender} son actualizables; cualquier otro campo del payload se ignora.
/// Se aceptan los alias PascalCase que envía el frontend.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Phone")]
    pub phone: Option<String>,
    #[serde(alias = "Email")]
    pub email: Option<String>,
    #[serde(alias = "Address")]
    pub address: Option<String>,
    #[serde(alias = "Gender")]
    pub gender: Option<String>,
}

impl UpdateCustomerRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.gender.is_none()
    }
}

/// Orden de venta del cliente con empleado y vehículo joineados
#[derive(Debug, Serialize, FromRow)]
pub struct CustomerSalesOrderRow {
    pub id: i32,
    pub sales_date: NaiveDate,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub sales_employee_name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CustomerSalesOrdersResponse {
    pub sales_orders: Vec<CustomerSalesOrderRow>,
}

/// Registro de servicio del cliente con vehículo y asesor joineados
#[derive(Debug, Serialize, FromRow)]
pub struct CustomerServiceRecordRow {
    pub id: i32,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    pub service_status: String,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub service_advisor_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CustomerServiceRecordsResponse {
    pub service_orders: Vec<CustomerServiceRecordRow>,
}

/// Vehículo del cliente con la fecha de su último servicio (texto para
/// tolerar el formato que entregue el driver; ver `utils::dates`).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleLastService {
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub last_service_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DueVehiclesResponse {
    pub due_vehicles: Vec<VehicleLastService>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_pascal_case_aliases() {
        let request: UpdateCustomerRequest =
            serde_json::from_str(r#"{"Name": "Alice", "Phone": "555-0100"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Alice"));
        assert_eq!(request.phone.as_deref(), Some("555-0100"));
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_request_unknown_fields_ignored() {
        let request: UpdateCustomerRequest =
            serde_json::from_str(r#"{"registration_date": "2020-01-01", "id": 99}"#).unwrap();
        assert!(request.is_empty());
    }
}
