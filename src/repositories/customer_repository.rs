//! Repositorio de clientes

use sqlx::PgPool;

use crate::dto::customer_dto::UpdateCustomerRequest;
use crate::models::customer::Customer;
use crate::utils::errors::AppError;
use crate::utils::validation::PartialUpdate;

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, AppError> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, name, phone, email, address, gender, registration_date, closure_date
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Actualización parcial del perfil. Solo setea las columnas de la
    /// lista blanca presentes en el payload; devuelve `false` si el
    /// payload no trae ninguna.
    pub async fn update_partial(
        &self,
        customer_id: i32,
        request: &UpdateCustomerRequest,
    ) -> Result<bool, AppError> {
        let mut update = PartialUpdate::new("customers", "id");
        update.set("name", request.name.clone());
        update.set("phone", request.phone.clone());
        update.set("email", request.email.clone());
        update.set("address", request.address.clone());
        update.set("gender", request.gender.clone());

        let (sql, values) = match update.build() {
            Some(built) => built,
            None => return Ok(false),
        };

        let mut query = sqlx::query(&sql);
        for value in &values {
            query = query.bind(value);
        }
        query.bind(customer_id).execute(&self.pool).await?;

        Ok(true)
    }
}
