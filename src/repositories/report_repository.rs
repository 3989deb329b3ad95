//! Repositorio de agregados y reportes de manager
//!
//! Consultas agrupadas (por fecha, por empleado) y los tres reportes
//! fijos multi-join.

use sqlx::PgPool;

use crate::dto::manager_dto::{
    CustomerVehiclesReportRow, EmployeePerformanceReportRow, PartUsageRow, SalesByDateRow,
    SalesByEmployeeRow, ServiceSummaryByDateRow, ServiceSummaryByEmployeeRow,
    WaitingVehiclesReportRow,
};
use crate::utils::errors::AppError;

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn sales_by_date(&self) -> Result<Vec<SalesByDateRow>, AppError> {
        let rows = sqlx::query_as::<_, SalesByDateRow>(
            r#"
            SELECT
                sales_date AS date,
                SUM(price) AS total_sales,
                COUNT(*) AS order_count
            FROM sales_orders
            GROUP BY sales_date
            ORDER BY sales_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn sales_by_employee(&self) -> Result<Vec<SalesByEmployeeRow>, AppError> {
        let rows = sqlx::query_as::<_, SalesByEmployeeRow>(
            r#"
            SELECT
                e.id AS employee_id,
                e.name AS employee_name,
                SUM(so.price) AS total_sales,
                COUNT(*) AS order_count
            FROM sales_orders so
            JOIN employees e ON so.sales_employee_id = e.id
            WHERE so.sales_employee_id IS NOT NULL
            GROUP BY e.id, e.name
            ORDER BY total_sales DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn service_summary_by_date(
        &self,
    ) -> Result<Vec<ServiceSummaryByDateRow>, AppError> {
        let rows = sqlx::query_as::<_, ServiceSummaryByDateRow>(
            r#"
            SELECT
                so.date_from AS date,
                SUM(so.price) AS service_revenue,
                COALESCE(SUM(sl.labor_hours), 0) AS labor_hours,
                COALESCE(SUM(p.price * slup.quantity), 0) AS parts_cost
            FROM service_orders so
            LEFT JOIN service_lines sl ON so.id = sl.service_order_id
            LEFT JOIN service_line_parts slup ON sl.id = slup.service_line_id
            LEFT JOIN parts p ON slup.part_id = p.id
            GROUP BY so.date_from
            ORDER BY so.date_from DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn service_summary_by_employee(
        &self,
    ) -> Result<Vec<ServiceSummaryByEmployeeRow>, AppError> {
        let rows = sqlx::query_as::<_, ServiceSummaryByEmployeeRow>(
            r#"
            SELECT
                e.id AS employee_id,
                e.name AS employee_name,
                SUM(so.price) AS service_revenue,
                COALESCE(SUM(sl.labor_hours), 0) AS labor_hours,
                COALESCE(SUM(p.price * slup.quantity), 0) AS parts_cost
            FROM service_orders so
            JOIN employees e ON so.service_advisor_id = e.id
            LEFT JOIN service_lines sl ON so.id = sl.service_order_id
            LEFT JOIN service_line_parts slup ON sl.id = slup.service_line_id
            LEFT JOIN parts p ON slup.part_id = p.id
            WHERE so.service_advisor_id IS NOT NULL
            GROUP BY e.id, e.name
            ORDER BY service_revenue DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Todos los repuestos con la cantidad acumulada usada (0 si nunca).
    pub async fn parts_usage(&self) -> Result<Vec<PartUsageRow>, AppError> {
        let rows = sqlx::query_as::<_, PartUsageRow>(
            r#"
            SELECT
                p.id,
                p.name,
                p.price,
                p.stock,
                COALESCE(SUM(slup.quantity), 0) AS times_used
            FROM parts p
            LEFT JOIN service_line_parts slup ON p.id = slup.part_id
            GROUP BY p.id, p.name, p.price, p.stock
            ORDER BY times_used DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Reporte fijo 1: cantidad de vehículos y de servicios por cliente.
    pub async fn customer_vehicles_report(
        &self,
    ) -> Result<Vec<CustomerVehiclesReportRow>, AppError> {
        let rows = sqlx::query_as::<_, CustomerVehiclesReportRow>(
            r#"
            SELECT
                c.id AS customer_id,
                c.name AS customer_name,
                COUNT(DISTINCT cov.vehicle_vin) AS vehicle_amount,
                COUNT(DISTINCT so.id) AS service_times
            FROM customers c
            LEFT JOIN customer_vehicles cov ON c.id = cov.customer_id
            LEFT JOIN service_orders so ON c.id = so.customer_id
            GROUP BY c.id, c.name
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Reporte fijo 2: vehículos en espera de servicio con cada repuesto
    /// requerido y su stock.
    pub async fn waiting_vehicles_report(
        &self,
    ) -> Result<Vec<WaitingVehiclesReportRow>, AppError> {
        let rows = sqlx::query_as::<_, WaitingVehiclesReportRow>(
            r#"
            SELECT
                c.id AS customer_id,
                c.name AS customer_name,
                so.vehicle_vin,
                so.service_status,
                p.id AS part_id,
                p.name AS part_name,
                slup.quantity,
                p.stock
            FROM customers c
            JOIN service_orders so ON c.id = so.customer_id
            JOIN service_lines sl ON so.id = sl.service_order_id
            JOIN service_line_parts slup ON sl.id = slup.service_line_id
            JOIN parts p ON slup.part_id = p.id
            WHERE so.service_status = 'WAITING'
            ORDER BY c.id, so.vehicle_vin
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Reporte fijo 3: ventas 2024 por empleado más el conteo correlacionado
    /// de ventas 2024 distintas a clientes con dirección en Seattle.
    pub async fn employee_performance_report(
        &self,
    ) -> Result<Vec<EmployeePerformanceReportRow>, AppError> {
        let rows = sqlx::query_as::<_, EmployeePerformanceReportRow>(
            r#"
            SELECT
                e.id AS employee_id,
                e.name AS employee_name,
                COUNT(so.id) AS vehicles_sold,
                (SELECT COUNT(DISTINCT so2.id)
                 FROM sales_orders so2
                 JOIN customers c2 ON so2.customer_id = c2.id
                 WHERE so2.sales_employee_id = e.id
                   AND so2.sales_date >= '2024-01-01'
                   AND so2.sales_date <= '2024-12-31'
                   AND c2.address LIKE '%Seattle%') AS seattle_customers
            FROM employees e
            LEFT JOIN sales_orders so ON e.id = so.sales_employee_id
            WHERE so.sales_date >= '2024-01-01'
              AND so.sales_date <= '2024-12-31'
            GROUP BY e.id, e.name
            ORDER BY COUNT(so.id) DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
