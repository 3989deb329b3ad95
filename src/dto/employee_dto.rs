//! DTOs del área de staff (empleados y managers)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::employee::EmployeeListing;
use crate::models::part::Part;

#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    pub employees: Vec<EmployeeListing>,
}

/// Orden de venta del listado general, con cliente/empleado/vehículo
#[derive(Debug, Serialize, FromRow)]
pub struct SalesOrderOverviewRow {
    pub id: i32,
    pub sales_date: NaiveDate,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub sales_employee_id: Option<i32>,
    pub customer_name: String,
    pub sales_employee_name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct SalesOrdersOverviewResponse {
    pub sales_orders: Vec<SalesOrderOverviewRow>,
}

/// Orden de venta asignada al empleado que consulta
#[derive(Debug, Serialize, FromRow)]
pub struct AssignedSalesOrderRow {
    pub id: i32,
    pub sales_date: NaiveDate,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub customer_name: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct AssignedSalesOrdersResponse {
    pub sales_orders: Vec<AssignedSalesOrderRow>,
}

/// Historial de ventas filtrado por VIN
#[derive(Debug, Serialize, FromRow)]
pub struct VehicleSalesHistoryRow {
    pub id: i32,
    pub sales_date: NaiveDate,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub customer_name: Option<String>,
    pub sales_employee_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VehicleSalesHistoryResponse {
    pub sales_orders: Vec<VehicleSalesHistoryRow>,
}

/// Historial de ventas filtrado por cliente
#[derive(Debug, Serialize, FromRow)]
pub struct CustomerSalesHistoryRow {
    pub id: i32,
    pub sales_date: NaiveDate,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub sales_employee_name: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CustomerSalesHistoryResponse {
    pub sales_orders: Vec<CustomerSalesHistoryRow>,
}

/// Historial de servicio por VIN, con detalle de líneas y repuestos.
/// Los joins son LEFT: una orden sin líneas produce una fila con los
/// campos de línea/repuesto en NULL.
#[derive(Debug, Serialize, FromRow)]
pub struct VehicleServiceHistoryRow {
    pub id: i32,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    pub service_status: String,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub assigned_employee: Option<String>,
    pub service_type: Option<String>,
    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub part_name: Option<String>,
    pub part_price: Option<Decimal>,
    pub part_quantity: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct VehicleServiceHistoryResponse {
    pub service_orders: Vec<VehicleServiceHistoryRow>,
}

/// Historial de servicio por cliente; igual que por VIN pero con el
/// nombre del cliente incluido
#[derive(Debug, Serialize, FromRow)]
pub struct CustomerServiceHistoryRow {
    pub id: i32,
    pub date_from: NaiveDate,
    pub date_to: Option<NaiveDate>,
    pub service_status: String,
    pub price: Decimal,
    pub vehicle_vin: String,
    pub customer_name: Option<String>,
    pub assigned_employee: Option<String>,
    pub service_type: Option<String>,
    pub labor_hours: Option<Decimal>,
    pub labor_rate: Option<Decimal>,
    pub part_name: Option<String>,
    pub part_price: Option<Decimal>,
    pub part_quantity: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CustomerServiceHistoryResponse {
    pub service_orders: Vec<CustomerServiceHistoryRow>,
}

/// Reporte de faltante de stock
#[derive(Debug, Serialize)]
pub struct ShortageResponse {
    pub shortages: Vec<Part>,
    pub threshold: i32,
}
