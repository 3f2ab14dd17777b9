//! Employee repository for KARTEI.
//!
//! This module provides CRUD operations for staff records in the database.

use sqlx::{QueryBuilder, SqlitePool};

use super::employee::{Employee, EmployeeUpdate, NewEmployee, Role};
use crate::{KarteiError, Result};

/// Repository for employee CRUD operations.
pub struct EmployeeRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EmployeeRepository<'a> {
    /// Create a new EmployeeRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new employee in the database.
    ///
    /// Returns the created employee with the assigned ID. Unique-constraint
    /// violations surface as [`KarteiError::Conflict`]; the message names
    /// the colliding column so callers can route code collisions into the
    /// generator's retry path.
    pub async fn create(&self, new_employee: &NewEmployee) -> Result<Employee> {
        let result = sqlx::query(
            "INSERT INTO employees (code, name, email, phone, role, password)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_employee.code)
        .bind(&new_employee.name)
        .bind(&new_employee.email)
        .bind(&new_employee.phone)
        .bind(new_employee.role.as_str())
        .bind(&new_employee.password)
        .execute(self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "employee"))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| KarteiError::NotFound("employee".to_string()))
    }

    /// Get an employee by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, code, name, email, phone, role, password, created_at
             FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    /// Get an employee by record code.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, code, name, email, phone, role, password, created_at
             FROM employees WHERE code = ?",
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    /// List all employees ordered by code.
    pub async fn list(&self) -> Result<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            "SELECT id, code, name, email, phone, role, password, created_at
             FROM employees ORDER BY code",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| KarteiError::Storage(e.to_string()))?;

        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    /// Update an employee by ID.
    ///
    /// Only fields that are set in the update will be modified; code and id
    /// are never touched. An empty update is a caller error. Returns the
    /// updated employee, or None if the id is absent.
    pub async fn update(&self, id: i64, update: &EmployeeUpdate) -> Result<Option<Employee>> {
        if update.is_empty() {
            return Err(KarteiError::Validation(
                "update contains no fields".to_string(),
            ));
        }

        let mut query: QueryBuilder<sqlx::Sqlite> = QueryBuilder::new("UPDATE employees SET ");
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
        if let Some(role) = update.role {
            separated.push("role = ");
            separated.push_bind_unseparated(role.as_str().to_string());
        }

        query.push(" WHERE id = ");
        query.push_bind(id);

        let result = query
            .build()
            .execute(self.pool)
            .await
            .map_err(|e| map_unique_violation(e, "employee"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_by_id(id).await
    }

    /// Replace the password hash for an employee.
    ///
    /// This is the only write path that touches the hash. Returns true iff
    /// the employee existed.
    pub async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE employees SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| KarteiError::Storage(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an employee by ID.
    ///
    /// Returns true if an employee was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| KarteiError::Storage(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all employees.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(self.pool)
            .await
            .map_err(|e| KarteiError::Storage(e.to_string()))?;
        Ok(count)
    }

    /// Count employees holding a role.
    pub async fn count_by_role(&self, role: Role) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE role = ?")
            .bind(role.as_str())
            .fetch_one(self.pool)
            .await
            .map_err(|e| KarteiError::Storage(e.to_string()))?;
        Ok(count)
    }
}

/// Map a sqlx error to Conflict when a unique constraint fired.
///
/// The conflict message names the colliding column ("code" or "email") so
/// the service layer can tell a code collision from a duplicate email.
pub(crate) fn map_unique_violation(e: sqlx::Error, entity: &str) -> KarteiError {
    if let sqlx::Error::Database(ref db_err) = e {
        let msg = db_err.message();
        if msg.contains("UNIQUE constraint failed") {
            if msg.contains(".code") {
                return KarteiError::Conflict(format!("{entity} code already assigned"));
            }
            if msg.contains(".email") {
                return KarteiError::Conflict(format!("{entity} email already registered"));
            }
            return KarteiError::Conflict(msg.to_string());
        }
    }
    e.into()
}

/// Internal struct for mapping database rows to Employee.
#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: i64,
    code: String,
    name: String,
    email: String,
    phone: Option<String>,
    role: String,
    password: String,
    created_at: String,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            id: self.id,
            code: self.code,
            name: self.name,
            email: self.email,
            phone: self.phone,
            // A missing or unknown role tag reads as the standard role
            role: self.role.parse().unwrap_or(Role::Standard),
            password: self.password,
            created_at: self.created_at,
        }
    }
}
