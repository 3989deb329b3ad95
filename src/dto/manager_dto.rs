//! DTOs de agregados y reportes de manager

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Envoltura de los agregados con selector `by=date|employee`
#[derive(Debug, Serialize)]
pub struct AggregateResponse<T: Serialize> {
    pub by: &'static str,
    pub data: Vec<T>,
}

/// Envoltura de reportes fijos
#[derive(Debug, Serialize)]
pub struct ReportResponse<T: Serialize> {
    pub data: Vec<T>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct SalesByDateRow {
    pub date: NaiveDate,
    pub total_sales: Decimal,
    pub order_count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct SalesByEmployeeRow {
    pub employee_id: i32,
    pub employee_name: String,
    pub total_sales: Decimal,
    pub order_count: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ServiceSummaryByDateRow {
    pub date: NaiveDate,
    pub service_revenue: Decimal,
    pub labor_hours: Decimal,
    pub parts_cost: Decimal,
}

#[derive(Debug, Serialize, FromRow)]
pub struct ServiceSummaryByEmployeeRow {
    pub employee_id: i32,
    pub employee_name: String,
    pub service_revenue: Decimal,
    pub labor_hours: Decimal,
    pub parts_cost: Decimal,
}

/// Uso acumulado de un repuesto en todas las líneas de servicio
#[derive(Debug, Serialize, FromRow)]
pub struct PartUsageRow {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub stock: i32,
    pub times_used: i64,
}

/// Reporte fijo 1: vehículos y servicios por cliente
#[derive(Debug, Serialize, FromRow)]
pub struct CustomerVehiclesReportRow {
    pub customer_id: i32,
    pub customer_name: String,
    pub vehicle_amount: i64,
    pub service_times: i64,
}

/// Reporte fijo 2: vehículos en estado WAITING con sus repuestos
#[derive(Debug, Serialize, FromRow)]
pub struct WaitingVehiclesReportRow {
    pub customer_id: i32,
    pub customer_name: String,
    pub vehicle_vin: String,
    pub service_status: String,
    pub part_id: i32,
    pub part_name: String,
    pub quantity: i32,
    pub stock: i32,
}

/// Reporte fijo 3: ventas 2024 por empleado más el conteo correlacionado
/// de ventas a clientes de Seattle
#[derive(Debug, Serialize, FromRow)]
pub struct EmployeePerformanceReportRow {
    pub employee_id: i32,
    pub employee_name: String,
    pub vehicles_sold: i64,
    pub seattle_customers: i64,
}
