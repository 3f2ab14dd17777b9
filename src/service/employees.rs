//! Employee service for KARTEI.
//!
//! Staff record operations with built-in authorization. All reads and
//! mutations return [`EmployeeProfile`] so the password hash never leaves
//! the store layer.

use super::{validate_email, validate_name, CODE_RETRY_ATTEMPTS};
use crate::auth::{authorize, hash_password, validate_password, Action, Identity};
use crate::db::{
    is_code_collision, CodeGenerator, Collection, EmployeeProfile, EmployeeRepository,
    EmployeeUpdate, NewEmployee, Role,
};
use crate::{Database, KarteiError, Result};

/// Data for creating a new employee through the service.
#[derive(Debug, Clone)]
pub struct CreateEmployeeRequest {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Role (defaults to Standard).
    pub role: Role,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
}

impl CreateEmployeeRequest {
    /// Create a request with the required fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            role: Role::Standard,
            password: password.into(),
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the role.
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Service for staff record operations with authorization checks.
pub struct EmployeeService<'a> {
    db: &'a Database,
}

impl<'a> EmployeeService<'a> {
    /// Create a new EmployeeService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create a staff record. Admin only.
    ///
    /// The record code is generated here; a collision with a pre-existing
    /// code retries with a fresh one before surfacing the conflict.
    pub async fn create(
        &self,
        caller: Option<&Identity>,
        request: &CreateEmployeeRequest,
    ) -> Result<EmployeeProfile> {
        validate_name(&request.name)?;
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        authorize(caller, &Action::CreateEmployee)?;

        let password_hash = hash_password(&request.password)?;
        let generator = CodeGenerator::new(self.db.pool());
        let repo = EmployeeRepository::new(self.db.pool());

        let mut last_err = KarteiError::Conflict("employee code already assigned".to_string());
        for _ in 0..CODE_RETRY_ATTEMPTS {
            let code = generator.next_code(Collection::Employees).await?;

            let mut new_employee =
                NewEmployee::new(code, &request.name, &request.email, password_hash.clone())
                    .with_role(request.role);
            if let Some(ref phone) = request.phone {
                new_employee = new_employee.with_phone(phone);
            }

            match repo.create(&new_employee).await {
                Ok(employee) => return Ok(employee.into_profile()),
                Err(e) if is_code_collision(&e) => last_err = e,
                Err(e) => return Err(e),
            }
        }

        Err(last_err)
    }

    /// List all staff records. Admin only.
    pub async fn list(&self, caller: Option<&Identity>) -> Result<Vec<EmployeeProfile>> {
        authorize(caller, &Action::ListEmployees)?;

        let repo = EmployeeRepository::new(self.db.pool());
        let employees = repo.list().await?;
        Ok(employees
            .into_iter()
            .map(|employee| employee.into_profile())
            .collect())
    }

    /// Update a staff record. Admin only.
    ///
    /// Applies only the provided fields; code and id are immutable and the
    /// password is reachable only through [`change_password`].
    ///
    /// [`change_password`]: EmployeeService::change_password
    pub async fn update(
        &self,
        caller: Option<&Identity>,
        id: i64,
        update: &EmployeeUpdate,
    ) -> Result<EmployeeProfile> {
        if update.is_empty() {
            return Err(KarteiError::Validation(
                "update contains no fields".to_string(),
            ));
        }
        if let Some(ref email) = update.email {
            validate_email(email)?;
        }
        if let Some(ref name) = update.name {
            validate_name(name)?;
        }

        authorize(caller, &Action::UpdateEmployee)?;

        let repo = EmployeeRepository::new(self.db.pool());
        let updated = repo
            .update(id, update)
            .await?
            .ok_or_else(|| KarteiError::NotFound("employee".to_string()))?;
        Ok(updated.into_profile())
    }

    /// Replace a staff member's password. Admin only.
    pub async fn change_password(
        &self,
        caller: Option<&Identity>,
        id: i64,
        new_password: &str,
    ) -> Result<()> {
        validate_password(new_password)?;

        authorize(caller, &Action::UpdateEmployee)?;

        let password_hash = hash_password(new_password)?;
        let repo = EmployeeRepository::new(self.db.pool());
        let changed = repo.update_password(id, &password_hash).await?;
        if !changed {
            return Err(KarteiError::NotFound("employee".to_string()));
        }
        Ok(())
    }

    /// Delete a staff record. Admin only.
    ///
    /// Returns true if a record was deleted, false if the id was absent.
    pub async fn delete(&self, caller: Option<&Identity>, id: i64) -> Result<bool> {
        authorize(caller, &Action::DeleteEmployee)?;

        let repo = EmployeeRepository::new(self.db.pool());
        repo.delete(id).await
    }
}
