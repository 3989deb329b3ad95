//! Controller del área pública de vehículos
//!
//! Listado de inventario sin vender y flujo de compra.

use sqlx::PgPool;
use tracing::info;

use crate::dto::auth_dto::MessageResponse;
use crate::dto::vehicle_dto::{AvailableVehiclesResponse, BuyVehicleRequest};
use crate::repositories::sales_repository::{PurchaseOutcome, SalesRepository};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    sales: SalesRepository,
    vehicles: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            sales: SalesRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn available_vehicles(&self) -> Result<AvailableVehiclesResponse, AppError> {
        let vehicles = self.vehicles.find_available().await?;
        info!("Fetched {} available vehicles", vehicles.len());
        Ok(AvailableVehiclesResponse { vehicles })
    }

    /// Compra de un vehículo disponible al precio indicado. La secuencia
    /// completa (chequeo + orden de venta + propiedad) es atómica.
    pub async fn buy_vehicle(
        &self,
        customer_id: i32,
        vin: &str,
        request: BuyVehicleRequest,
    ) -> Result<MessageResponse, AppError> {
        let price = request
            .price
            .ok_or_else(|| AppError::BadRequest("Price is required".to_string()))?;

        match self.sales.purchase_vehicle(customer_id, vin, price).await? {
            PurchaseOutcome::Purchased => {
                info!("Customer {} purchased vehicle {}", customer_id, vin);
                Ok(MessageResponse::new("Vehicle purchased successfully!"))
            }
            PurchaseOutcome::NotAvailable => Err(AppError::NotFound(
                "Vehicle not available for purchase".to_string(),
            )),
        }
    }
}
