//! Controller del área de clientes
//!
//! Todas las lecturas de vehículos van filtradas por propiedad: para un
//! cliente, un vehículo ajeno responde 404, no 401.

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;

use crate::dto::customer_dto::{
    CustomerInfoResponse, CustomerSalesOrdersResponse, CustomerServiceRecordsResponse,
    CustomerVehiclesResponse, DueVehiclesResponse, EmployeeContactResponse,
    UpdateCustomerRequest, VehicleDetailResponse,
};
use crate::repositories::customer_repository::CustomerRepository;
use crate::repositories::employee_repository::EmployeeRepository;
use crate::repositories::sales_repository::SalesRepository;
use crate::repositories::service_repository::ServiceRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::dates::is_due_for_service;
use crate::utils::errors::AppError;

pub struct CustomerController {
    customers: CustomerRepository,
    employees: EmployeeRepository,
    sales: SalesRepository,
    service: ServiceRepository,
    vehicles: VehicleRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            customers: CustomerRepository::new(pool.clone()),
            employees: EmployeeRepository::new(pool.clone()),
            sales: SalesRepository::new(pool.clone()),
            service: ServiceRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn vehicles(&self, customer_id: i32) -> Result<CustomerVehiclesResponse, AppError> {
        let vehicles = self.vehicles.find_owned_by_customer(customer_id).await?;
        info!("Fetched {} vehicles for customer {}", vehicles.len(), customer_id);
        Ok(CustomerVehiclesResponse { vehicles })
    }

    pub async fn vehicle_detail(
        &self,
        customer_id: i32,
        vin: &str,
    ) -> Result<VehicleDetailResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_owned_detail(customer_id, vin)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Vehicle not found or not owned by customer".to_string())
            })?;

        Ok(VehicleDetailResponse { vehicle })
    }

    pub async fn info(&self, customer_id: i32) -> Result<CustomerInfoResponse, AppError> {
        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        Ok(CustomerInfoResponse { customer })
    }

    /// Actualización parcial del perfil; re-lee y devuelve la fila
    /// completa tras el UPDATE.
    pub async fn update_info(
        &self,
        customer_id: i32,
        request: UpdateCustomerRequest,
    ) -> Result<CustomerInfoResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::BadRequest("No valid fields to update".to_string()));
        }

        self.customers.update_partial(customer_id, &request).await?;

        let customer = self
            .customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        info!("Updated customer info for customer {}", customer_id);
        Ok(CustomerInfoResponse { customer })
    }

    pub async fn my_sales_orders(
        &self,
        customer_id: i32,
    ) -> Result<CustomerSalesOrdersResponse, AppError> {
        let sales_orders = self.sales.find_by_customer_session(customer_id).await?;
        Ok(CustomerSalesOrdersResponse { sales_orders })
    }

    pub async fn my_service_records(
        &self,
        customer_id: i32,
    ) -> Result<CustomerServiceRecordsResponse, AppError> {
        let service_orders = self.service.find_by_customer_session(customer_id).await?;
        Ok(CustomerServiceRecordsResponse { service_orders })
    }

    /// Vehículos vencidos de servicio: nunca atendidos o con último
    /// servicio a más de 365 días.
    pub async fn vehicles_due_service(
        &self,
        customer_id: i32,
    ) -> Result<DueVehiclesResponse, AppError> {
        let vehicles = self
            .service
            .find_last_service_per_vehicle(customer_id)
            .await?;

        let today = Utc::now().date_naive();
        let due_vehicles: Vec<_> = vehicles
            .into_iter()
            .filter(|v| is_due_for_service(v.last_service_date.as_deref(), today))
            .collect();

        info!(
            "Found {} vehicles due for service for customer {}",
            due_vehicles.len(),
            customer_id
        );
        Ok(DueVehiclesResponse { due_vehicles })
    }

    /// Contacto público de un empleado; no está acotado por propiedad.
    pub async fn employee_details(
        &self,
        employee_id: i32,
    ) -> Result<EmployeeContactResponse, AppError> {
        let employee = self
            .employees
            .find_contact(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;

        Ok(EmployeeContactResponse { employee })
    }
}
