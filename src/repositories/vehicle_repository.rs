//! Repositorio de vehículos
//!
//! Cubre el inventario (`vehicles`) y la propiedad (`customer_vehicles`).
//! Las lecturas de cliente van siempre por el join de propiedad: para un
//! cliente, un vehículo que no posee no existe.

use sqlx::PgPool;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Vehículos del cliente, más nuevos primero.
    pub async fn find_owned_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.vin, v.make, v.model, v.color, v.year, v.mileage, v.price
            FROM vehicles v
            JOIN customer_vehicles cov ON cov.vehicle_vin = v.vin
            WHERE cov.customer_id = $1
            ORDER BY v.year DESC, v.make, v.model
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Detalle de un vehículo solo si el cliente lo posee.
    pub async fn find_owned_detail(
        &self,
        customer_id: i32,
        vin: &str,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.vin, v.make, v.model, v.color, v.year, v.mileage, v.price
            FROM vehicles v
            JOIN customer_vehicles cov ON cov.vehicle_vin = v.vin
            WHERE v.vin = $1 AND cov.customer_id = $2
            "#,
        )
        .bind(vin)
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Detalle sin filtro de propiedad (vista de staff).
    pub async fn find_by_vin(&self, vin: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            "SELECT vin, make, model, color, year, mileage, price FROM vehicles WHERE vin = $1",
        )
        .bind(vin)
        .fetch_optional(&self.pool)
        .await?;

        Ok(vehicle)
    }

    /// Vehículos sin vender (ninguna orden de venta referencia su VIN).
    pub async fn find_available(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT v.vin, v.make, v.model, v.color, v.year, v.mileage, v.price
            FROM vehicles v
            WHERE NOT EXISTS (SELECT 1 FROM sales_orders so WHERE so.vehicle_vin = v.vin)
            ORDER BY v.make, v.model, v.year
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }
}
