//! Repositorio de órdenes de venta
//!
//! Incluye el flujo de compra, que es la única secuencia multi-sentencia
//! del sistema y corre dentro de una transacción: chequeo de
//! disponibilidad con lock de fila, INSERT de la orden e INSERT de la
//! propiedad se confirman o deshacen juntos.

use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::customer_dto::CustomerSalesOrderRow;
use crate::dto::employee_dto::{
    AssignedSalesOrderRow, CustomerSalesHistoryRow, SalesOrderOverviewRow, VehicleSalesHistoryRow,
};
use crate::utils::errors::AppError;

/// Resultado del intento de compra.
#[derive(Debug, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased,
    NotAvailable,
}

pub struct SalesRepository {
    pool: PgPool,
}

impl SalesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Órdenes de venta del cliente, más recientes primero.
    pub async fn find_by_customer_session(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CustomerSalesOrderRow>, AppError> {
        let orders = sqlx::query_as::<_, CustomerSalesOrderRow>(
            r#"
            SELECT
                so.id,
                so.sales_date,
                so.price,
                so.vehicle_vin,
                e.name AS sales_employee_name,
                v.make,
                v.model,
                v.year,
                v.color
            FROM sales_orders so
            LEFT JOIN employees e ON so.sales_employee_id = e.id
            LEFT JOIN vehicles v ON so.vehicle_vin = v.vin
            WHERE so.customer_id = $1
            ORDER BY so.sales_date DESC, so.id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Listado completo para staff.
    pub async fn find_all(&self) -> Result<Vec<SalesOrderOverviewRow>, AppError> {
        let orders = sqlx::query_as::<_, SalesOrderOverviewRow>(
            r#"
            SELECT
                so.id,
                so.sales_date,
                so.price,
                so.vehicle_vin,
                so.sales_employee_id,
                c.name AS customer_name,
                e.name AS sales_employee_name,
                v.make,
                v.model,
                v.year
            FROM sales_orders so
            JOIN customers c ON so.customer_id = c.id
            LEFT JOIN employees e ON so.sales_employee_id = e.id
            LEFT JOIN vehicles v ON so.vehicle_vin = v.vin
            ORDER BY so.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Órdenes asignadas a un empleado.
    pub async fn find_by_employee(
        &self,
        employee_id: i32,
    ) -> Result<Vec<AssignedSalesOrderRow>, AppError> {
        let orders = sqlx::query_as::<_, AssignedSalesOrderRow>(
            r#"
            SELECT
                so.id,
                so.sales_date,
                so.price,
                so.vehicle_vin,
                c.name AS customer_name,
                v.make,
                v.model,
                v.year
            FROM sales_orders so
            JOIN customers c ON so.customer_id = c.id
            LEFT JOIN vehicles v ON so.vehicle_vin = v.vin
            WHERE so.sales_employee_id = $1
            ORDER BY so.sales_date DESC, so.id DESC
            "#,
        )
        .bind(employee_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Reasigna el empleado de una orden. Sin chequeo de existencia:
    /// actualizar un id inexistente afecta cero filas y "funciona".
    pub async fn assign_employee(
        &self,
        employee_id: i32,
        sales_order_id: i32,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE sales_orders SET sales_employee_id = $1 WHERE id = $2")
            .bind(employee_id)
            .bind(sales_order_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn find_by_vehicle(
        &self,
        vin: &str,
    ) -> Result<Vec<VehicleSalesHistoryRow>, AppError> {
        let orders = sqlx::query_as::<_, VehicleSalesHistoryRow>(
            r#"
            SELECT
                so.id,
                so.sales_date,
                so.price,
                so.vehicle_vin,
                c.name AS customer_name,
                e.name AS sales_employee_name
            FROM sales_orders so
            LEFT JOIN customers c ON so.customer_id = c.id
            LEFT JOIN employees e ON so.sales_employee_id = e.id
            WHERE so.vehicle_vin = $1
            ORDER BY so.sales_date DESC, so.id DESC
            "#,
        )
        .bind(vin)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    pub async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<CustomerSalesHistoryRow>, AppError> {
        let orders = sqlx::query_as::<_, CustomerSalesHistoryRow>(
            r#"
            SELECT
                so.id,
                so.sales_date,
                so.price,
                so.vehicle_vin,
                e.name AS sales_employee_name,
                v.make,
                v.model,
                v.year
            FROM sales_orders so
            LEFT JOIN employees e ON so.sales_employee_id = e.id
            LEFT JOIN vehicles v ON so.vehicle_vin = v.vin
            WHERE so.customer_id = $1
            ORDER BY so.sales_date DESC, so.id DESC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Compra de un vehículo disponible.
    ///
    /// Transacción única: el SELECT con `FOR UPDATE` bloquea la fila del
    /// vehículo, de modo que dos compras casi simultáneas del mismo VIN se
    /// serializan y la segunda ve la venta de la primera. El constraint
    /// UNIQUE sobre `sales_orders.vehicle_vin` respalda el invariante de
    /// una venta por vehículo incluso fuera de este camino.
    pub async fn purchase_vehicle(
        &self,
        customer_id: i32,
        vin: &str,
        price: Decimal,
    ) -> Result<PurchaseOutcome, AppError> {
        let mut tx = self.pool.begin().await?;

        let available: Option<String> = sqlx::query_scalar(
            r#"
            SELECT v.vin
            FROM vehicles v
            WHERE v.vin = $1
              AND NOT EXISTS (SELECT 1 FROM sales_orders so WHERE so.vehicle_vin = v.vin)
            FOR UPDATE OF v
            "#,
        )
        .bind(vin)
        .fetch_optional(&mut *tx)
        .await?;

        if available.is_none() {
            tx.rollback().await?;
            return Ok(PurchaseOutcome::NotAvailable);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO sales_orders (customer_id, sales_employee_id, vehicle_vin, sales_date, price)
            VALUES ($1, NULL, $2, CURRENT_DATE, $3)
            "#,
        )
        .bind(customer_id)
        .bind(vin)
        .bind(price)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            tx.rollback().await?;
            if is_unique_violation(&e) {
                // Otra transacción vendió el vehículo primero
                return Ok(PurchaseOutcome::NotAvailable);
            }
            return Err(e.into());
        }

        sqlx::query("INSERT INTO customer_vehicles (customer_id, vehicle_vin) VALUES ($1, $2)")
            .bind(customer_id)
            .bind(vin)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(PurchaseOutcome::Purchased)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .and_then(|db| db.code())
        .map(|code| code == "23505")
        .unwrap_or(false)
}
