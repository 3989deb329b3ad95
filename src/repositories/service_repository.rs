//! Repositorio de órdenes de servicio

use sqlx::PgPool;

use crate::dto::customer_dto::{CustomerServiceRecordRow, VehicleLastService};
use crate::dto::employee_dto::{CustomerServiceHistoryRow, VehicleServiceHistoryRow};
use crate::utils::errors::AppError;

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registros de servicio del cliente, más recientes primero.
    pub async fn find_by_customer_session(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CustomerServiceRecordRow>, AppError> {
        let records = sqlx::query_as::<_, CustomerServiceRecordRow>(
            r#"
            SELECT
                so.id,
                so.date_from,
                so.date_to,
                so.service_status,
                so.price,
                so.vehicle_vin,
                v.make,
                v.model,
                v.year,
                e.name AS service_advisor_name
            FROM service_orders so
            JOIN vehicles v ON so.vehicle_vin = v.vin
            LEFT JOIN employees e ON so.service_advisor_id = e.id
            WHERE so.customer_id = $1
            ORDER BY so.date_from DESC, so.id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Vehículos del cliente con la fecha máxima de servicio por vehículo.
    /// La fecha sale como texto; la heurística de vencimiento la parsea
    /// (ver `utils::dates`).
    pub async fn find_last_service_per_vehicle(
        &self,
        customer_id: i32,
    ) -> Result<Vec<VehicleLastService>, AppError> {
        let rows = sqlx::query_as::<_, VehicleLastService>(
            r#"
            SELECT
                v.vin,
                v.make,
                v.model,
                v.year,
                MAX(so.date_from)::text AS last_service_date
            FROM vehicles v
            JOIN customer_vehicles cov ON cov.vehicle_vin = v.vin
            LEFT JOIN service_orders so
                ON so.vehicle_vin = v.vin AND so.customer_id = $1
            WHERE cov.customer_id = $1
            GROUP BY v.vin, v.make, v.model, v.year
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Historial de servicio por VIN con detalle de líneas y repuestos.
    pub async fn find_by_vehicle(
        &self,
        vin: &str,
    ) -> Result<Vec<VehicleServiceHistoryRow>, AppError> {
        let records = sqlx::query_as::<_, VehicleServiceHistoryRow>(
            r#"
            SELECT
                so.id,
                so.date_from,
                so.date_to,
                so.service_status,
                so.price,
                so.vehicle_vin,
                e.name AS assigned_employee,
                sl.service_type,
                sl.labor_hours,
                sl.labor_rate,
                p.name AS part_name,
                p.price AS part_price,
                slup.quantity AS part_quantity
            FROM service_orders so
            LEFT JOIN employees e ON so.service_advisor_id = e.id
            LEFT JOIN service_lines sl ON so.id = sl.service_order_id
            LEFT JOIN service_line_parts slup ON sl.id = slup.service_line_id
            LEFT JOIN parts p ON slup.part_id = p.id
            WHERE so.vehicle_vin = $1
            ORDER BY so.date_from DESC, so.id DESC
            "#,
        )
        .bind(vin)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Historial de servicio por cliente con detalle de líneas y repuestos.
    pub async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CustomerServiceHistoryRow>, AppError> {
        let records = sqlx::query_as::<_, CustomerServiceHistoryRow>(
            r#"
            SELECT
                so.id,
                so.date_from,
                so.date_to,
                so.service_status,
                so.price,
                so.vehicle_vin,
                c.name AS customer_name,
                e.name AS assigned_employee,
                sl.service_type,
                sl.labor_hours,
                sl.labor_rate,
                p.name AS part_name,
                p.price AS part_price,
                slup.quantity AS part_quantity
            FROM service_orders so
            LEFT JOIN customers c ON so.customer_id = c.id
            LEFT JOIN employees e ON so.service_advisor_id = e.id
            LEFT JOIN service_lines sl ON so.id = sl.service_order_id
            LEFT JOIN service_line_parts slup ON sl.id = slup.service_line_id
            LEFT JOIN parts p ON slup.part_id = p.id
            WHERE so.customer_id = $1
            ORDER BY so.date_from DESC, so.id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
