//! Customer repository for KARTEI.

use sqlx::{QueryBuilder, SqlitePool};

use super::customer::{Customer, CustomerUpdate, NewCustomer};
use super::employee_repository::map_unique_violation;
use crate::{KarteiError, Result};

/// Repository for customer CRUD operations.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new CustomerRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new customer in the database.
    ///
    /// Returns the created customer with the assigned ID.
    pub async fn create(&self, new_customer: &NewCustomer) -> Result<Customer> {
        let result = sqlx::query(
            "INSERT INTO customers (code, name, email, phone, owner_id)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new_customer.code)
        .bind(&new_customer.name)
        .bind(&new_customer.email)
        .bind(&new_customer.phone)
        .bind(new_customer.owner_id)
        .execute(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "customer"))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| KarteiError::NotFound("customer".to_string()))
    }

    /// Get a customer by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, code, name, email, phone, owner_id, created_at
             FROM customers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(row.map(CustomerRow::into_customer))
    }

    /// Get a customer by record code.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, code, name, email, phone, owner_id, created_at
             FROM customers WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(row.map(CustomerRow::into_customer))
    }

    /// List customers ordered by code.
    ///
    /// With `owner = None` every record is returned; with `owner = Some(id)`
    /// only records whose owner matches.
    pub async fn list(&self, owner: Option<i64>) -> Result<Vec<Customer>> {
        let rows = match owner {
            None => {
                sqlx::query_as::<_, CustomerRow>(
                    "SELECT id, code, name, email, phone, owner_id, created_at
                     FROM customers ORDER BY code",
                )
                .fetch_all(self.pool)
                .await
            }
            Some(owner_id) => {
                sqlx::query_as::<_, CustomerRow>(
                    "SELECT id, code, name, email, phone, owner_id, created_at
                     FROM customers WHERE owner_id = ? ORDER BY code",
                )
                .bind(owner_id)
                .fetch_all(self.pool)
                .await
            }
        }
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(CustomerRow::into_customer).collect())
    }

    /// Update a customer by ID.
    ///
    /// Only fields that are set in the update will be modified; code, id,
    /// and owner_id are never touched. An empty update is a caller error.
    /// Returns the updated customer, or None if the id is absent.
    pub async fn update(&self, id: i64, update: &CustomerUpdate) -> Result<Option<Customer>> {
        if update.is_empty() {
            return Err(KarteiError::Validation(
                "update contains no fields".to_string(),
            ));
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE customers SET ");
        let mut separated = query.separated(", ");

        if let Some(ref name) = update.name {
            separated.push("name = ");
            separated.push_bind_unseparated(name);
        }
        if let Some(ref email) = update.email {
            separated.push("email = ");
            separated.push_bind_unseparated(email);
        }
        if let Some(ref phone) = update.phone {
            separated.push("phone = ");
            separated.push_bind_unseparated(phone.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| map_unique_violation(e, "customer"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Delete a customer by ID.
    ///
    /// Returns true if a customer was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| KarteiError::Storage(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all customers.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool)
            .await
            .map_err(|e| KarteiError::Storage(e.to_string()))?;
        Ok(count)
    }
}

/// Internal struct for mapping database rows to Customer.
#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    code: String,
    name: String,
    email: String,
    phone: Option<String>,
    owner_id: Option<i64>,
    created_at: String,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: self.id,
            code: self.code,
            name: self.name,
            email: self.email,
            phone: self.phone,
            owner_id: self.owner_id,
            created_at: self.created_at,
        }
    }
}
