//! Repositorio de repuestos

use sqlx::PgPool;

use crate::models::part::Part;
use crate::utils::errors::AppError;

pub struct PartRepository {
    pool: PgPool,
}

impl PartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Repuestos con stock en o bajo el umbral, stock ascendente.
    pub async fn find_below_threshold(&self, threshold: i32) -> Result<Vec<Part>, AppError> {
        let parts = sqlx::query_as::<_, Part>(
            r#"
            SELECT id, name, price, stock
            FROM parts
            WHERE stock <= $1
            ORDER BY stock ASC, id ASC
            "#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;

        Ok(parts)
    }
}
