//! Controller del área de staff

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;

use crate::dto::auth_dto::MessageResponse;
use crate::dto::customer_dto::{CustomerInfoResponse, VehicleDetailResponse};
use crate::dto::employee_dto::{
    AssignedSalesOrdersResponse, CustomerSalesHistoryResponse, CustomerServiceHistoryResponse,
    EmployeesResponse, SalesOrdersOverviewResponse, ShortageResponse,
    VehicleSalesHistoryResponse, VehicleServiceHistoryResponse,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::employee_repository::EmployeeRepository;
use crate::repositories::part_repository::PartRepository;
use crate::repositories::sales_repository::SalesRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::coerce_threshold;

/// Umbral por defecto del reporte de faltantes
const DEFAULT_SHORTAGE_THRESHOLD: i32 = 5;

pub struct EmployeeController {
    customers: CustomerRepository,
    employees: EmployeeRepository,
    parts: PartRepository,
    sales: SalesRepository,
    service: ServiceRepository,
    vehicles: VehicleRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool.clone()),
            parts: PartRepository::new(pool.clone()),
            sales: SalesRepository::new(pool.clone()),
            service: ServiceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn employees(&self) -> Result<EmployeesResponse, AppError> {
        let employees = self.employees.list_all().await?;
        if employees.is_empty() {
            return Err(AppError::NotFound("Employees not found".to_string()));
        }
        Ok(EmployeesResponse { employees })
    }

    pub async fn sales_orders(&self) -> Result<SalesOrdersOverviewResponse, AppError> {
        let sales_orders = self.sales.find_all().await?;
        if sales_orders.is_empty() {
            return Err(AppError::NotFound("Sales orders not found".to_string()));
        }
        Ok(SalesOrdersOverviewResponse { sales_orders })
    }

    pub async fn my_sales_orders(
        &self,
        employee_id: i32,
    ) -> Result<AssignedSalesOrdersResponse, AppError> {
        let sales_orders = self.sales.find_by_employee(employee_id).await?;
        Ok(AssignedSalesOrdersResponse { sales_orders })
    }

    /// Reasignación por identificadores de path; sin chequeo de
    /// existencia, la operación responde éxito aunque afecte cero filas.
    pub async fn assign_employee(
        &self,
        employee_id: i32,
        sales_order_id: i32,
    ) -> Result<MessageResponse, AppError> {
        self.sales.assign_employee(employee_id, sales_order_id).await?;
        Ok(MessageResponse::new("Employee assigned successfully"))
    }

    /// Detalle completo de cliente, sin filtro de propiedad.
    pub async fn customer_details(
        &self,
        customer_id: i32,
    ) -> Result<CustomerInfoResponse, AppError> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(CustomerInfoResponse { customer })
    }

    pub async fn vehicle_details(&self, vin: &str) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_vin(vin)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        Ok(VehicleDetailResponse { vehicle })
    }

    pub async fn sales_by_vehicle(
        &self,
        vin: &str,
    ) -> Result<VehicleSalesHistoryResponse, AppError> {
        let sales_orders = self.sales.find_by_vehicle(vin).await?;
        Ok(VehicleSalesHistoryResponse { sales_orders })
    }

    pub async fn sales_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<CustomerSalesHistoryResponse, AppError> {
        let sales_orders = self.sales.find_by_customer(customer_id).await?;
        Ok(CustomerSalesHistoryResponse { sales_orders })
    }

    pub async fn service_by_vehicle(
        &self,
        vin: &str,
    ) -> Result<VehicleServiceHistoryResponse, AppError> {
        let service_orders = self.service.find_by_vehicle(vin).await?;
        Ok(VehicleServiceHistoryResponse { service_orders })
    }

    pub async fn service_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<CustomerServiceHistoryResponse, AppError> {
        let service_orders = self.service.find_by_customer(customer_id).await?;
        Ok(CustomerServiceHistoryResponse { service_orders })
    }

    /// Reporte de faltantes: repuestos con stock en o bajo el umbral.
    /// El umbral llega como JSON arbitrario y debe coercionar a entero.
    pub async fn report_shortage(
        &self,
        username: &str,
        body: Option<Value>,
    ) -> Result<ShortageResponse, AppError> {
        let threshold = coerce_threshold(
            body.as_ref().and_then(|b| b.get("threshold")),
            DEFAULT_SHORTAGE_THRESHOLD,
        )?;

        let shortages = self.parts.find_below_threshold(threshold).await?;

        info!(
            "Part shortage report by user {} (threshold={}): {} items",
            username,
            threshold,
            shortages.len()
        );
        Ok(ShortageResponse {
            shortages,
            threshold,
        })
    }
}
